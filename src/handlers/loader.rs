//! Load Result Handler
//!
//! Applies the startup fetch result to the model. Failures are logged and
//! otherwise swallowed: the card grid simply stays empty.

use countryviz::services::LoadResult;
use tracing::{error, info, warn};

use crate::App;

pub fn handle_load_result(app: &mut App, result: LoadResult) {
    match result {
        Ok(countries) => {
            let count = countries.len();
            app.model.update_catalog(|c| c.loaded(countries));
            app.scroll_to_top();

            info!(count, "country list loaded");
            if app.model.catalog.area_threshold().is_none() {
                warn!(
                    reference = %app.model.catalog.criteria.reference_country,
                    "reference country not in list, area filter will pass everything"
                );
            }
        }
        Err(e) => {
            error!(error = %e, "Error fetching countries");
        }
    }
}
