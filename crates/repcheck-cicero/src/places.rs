//! Google Places address autocomplete.
//!
//! Autocomplete only improves input quality. Every failure here is logged and
//! degrades to "no suggestions" so lookups keep working with the raw address.

use serde::Deserialize;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_COUNTRY: &str = "us";
pub const AUTOCOMPLETE_URL: &str = "https://maps.googleapis.com/maps/api/place/autocomplete/json";

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("no Google API key configured")]
    MissingKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid autocomplete URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("places returned {status}: {message}")]
    Status { status: String, message: String },
}

#[derive(Debug, Clone)]
pub struct PlacesConfig {
    pub api_key: Option<String>,
    /// ISO 3166-1 alpha-2 country restriction.
    pub country: String,
    pub endpoint: String,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            country: DEFAULT_COUNTRY.to_string(),
            endpoint: AUTOCOMPLETE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<Prediction>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    description: String,
}

/// Places Autocomplete web-service client restricted to street addresses.
pub struct PlacesClient {
    client: reqwest::Client,
    api_key: String,
    country: String,
    endpoint: String,
}

impl PlacesClient {
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(PlacesError::MissingKey)?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            api_key,
            country: config.country.to_lowercase(),
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn request_url(&self, input: &str) -> Result<Url, PlacesError> {
        let mut url = Url::parse(&self.endpoint)?;
        url.query_pairs_mut()
            .append_pair("input", input)
            .append_pair("types", "address")
            .append_pair("components", &format!("country:{}", self.country))
            .append_pair("key", &self.api_key);
        Ok(url)
    }

    /// Formatted addresses matching `input`, best match first.
    pub async fn suggest(&self, input: &str) -> Result<Vec<String>, PlacesError> {
        let url = self.request_url(input)?;
        debug!(country = %self.country, "requesting address suggestions");
        let resp: AutocompleteResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        predictions(resp)
    }
}

fn predictions(resp: AutocompleteResponse) -> Result<Vec<String>, PlacesError> {
    match resp.status.as_str() {
        "OK" | "ZERO_RESULTS" => Ok(resp
            .predictions
            .into_iter()
            .map(|p| p.description)
            .collect()),
        _ => Err(PlacesError::Status {
            status: resp.status,
            message: resp.error_message.unwrap_or_default(),
        }),
    }
}

/// Lazily initialises a [`PlacesClient`] exactly once.
///
/// Concurrent callers of [`ready`](Self::ready) share one in-flight
/// initialisation. A failed initialisation is remembered: autocomplete stays
/// off for the loader's lifetime.
pub struct PlacesLoader {
    config: PlacesConfig,
    client: OnceCell<Option<PlacesClient>>,
}

impl PlacesLoader {
    pub fn new(config: PlacesConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// The initialised client, or `None` when autocomplete is unavailable.
    pub async fn ready(&self) -> Option<&PlacesClient> {
        self.client
            .get_or_init(|| async {
                match PlacesClient::new(&self.config) {
                    Ok(client) => {
                        info!(country = %client.country, "address autocomplete ready");
                        Some(client)
                    }
                    Err(e) => {
                        warn!(error = %e, "address autocomplete unavailable, using plain input");
                        None
                    }
                }
            })
            .await
            .as_ref()
    }

    /// Suggestions for `input`; empty when autocomplete is unavailable or fails.
    pub async fn suggest(&self, input: &str) -> Vec<String> {
        if input.trim().is_empty() {
            return Vec::new();
        }
        let Some(client) = self.ready().await else {
            return Vec::new();
        };
        match client.suggest(input).await {
            Ok(suggestions) => {
                debug!(count = suggestions.len(), "address suggestions");
                suggestions
            }
            Err(e) => {
                warn!(error = %e, "address autocomplete failed");
                Vec::new()
            }
        }
    }

    /// Top suggestion's formatted address, or `input` unchanged.
    pub async fn resolve(&self, input: &str) -> String {
        self.suggest(input)
            .await
            .into_iter()
            .next()
            .unwrap_or_else(|| input.to_string())
    }
}
