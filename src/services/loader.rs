//! Country loader service
//!
//! Runs the one-time startup fetch on a background task and hands the result
//! to the UI loop over a channel. The task is bound to a cancellation token
//! owned by the view: once the token is cancelled the task stops and
//! delivers nothing, even if the request already completed.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::api::{CountriesClient, Country, FetchError};

pub type LoadResult = Result<Vec<Country>, FetchError>;

/// Spawn the loader task
///
/// The receiver yields at most one result. It yields `None` if the load was
/// cancelled.
pub fn spawn_country_loader(
    client: CountriesClient,
    cancel: CancellationToken,
) -> mpsc::UnboundedReceiver<LoadResult> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        debug!(url = client.url(), "fetching country list");

        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                debug!("country load cancelled before completion");
            }

            result = client.get_countries() => {
                if cancel.is_cancelled() {
                    debug!("country load finished after cancellation, dropping result");
                    return;
                }
                // Receiver is gone when the view was torn down
                let _ = tx.send(result);
            }
        }
    });

    rx
}
