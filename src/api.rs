use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// Full country list, restricted to the three fields the app displays
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v2/all?fields=name,region,area";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default, skip_serializing_if = "Area::is_missing")]
    pub area: Area,
}

/// Area as reported by the API
///
/// A `null` area and an absent `area` field are kept apart: in comparisons a
/// null area counts as zero, while an absent one never compares.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Area {
    Known(f64),
    Null,
    #[default]
    Missing,
}

impl Area {
    /// Square kilometres, when the API reported a number
    pub fn km2(self) -> Option<f64> {
        match self {
            Area::Known(area) => Some(area),
            Area::Null | Area::Missing => None,
        }
    }

    /// Value used by the area filter
    pub fn comparable(self) -> Option<f64> {
        match self {
            Area::Known(area) => Some(area),
            Area::Null => Some(0.0),
            Area::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Area::Missing)
    }
}

impl<'de> Deserialize<'de> for Area {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only reached when the field is present; absence falls back to Missing
        Ok(match Option::<f64>::deserialize(deserializer)? {
            Some(area) => Area::Known(area),
            None => Area::Null,
        })
    }
}

impl Serialize for Area {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Area::Known(area) => serializer.serialize_some(area),
            Area::Null | Area::Missing => serializer.serialize_none(),
        }
    }
}

/// Everything that can go wrong while fetching the country list
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(StatusCode),

    #[error("response is not a country list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Parse a response body into a country list
pub fn parse_countries(body: &str) -> Result<Vec<Country>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Clone)]
pub struct CountriesClient {
    url: String,
    client: Client,
}

impl CountriesClient {
    /// Build a client for `url`
    ///
    /// With `timeout` set to `None` the transport default applies.
    pub fn new(url: String, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(url, builder.build()?))
    }

    /// Use a preconfigured reqwest client
    pub fn with_client(url: String, client: Client) -> Self {
        Self { url, client }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn get_countries(&self) -> Result<Vec<Country>, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        // Read as text first so a non-JSON body surfaces as Decode, not Network
        let body = response.text().await?;
        parse_countries(&body)
    }
}
