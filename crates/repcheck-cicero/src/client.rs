//! HTTP client for Cicero's representative lookup.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use crate::error::LookupError;
use crate::response::{Lookup, interpret};

pub const DEFAULT_BASE_URL: &str = "https://app.cicerodata.com";

/// Anything that can turn an address into a [`Lookup`].
#[async_trait]
pub trait RepresentativeLookup: Send + Sync {
    async fn lookup(&self, address: &str) -> Result<Lookup, LookupError>;
}

#[async_trait]
impl<T: RepresentativeLookup + ?Sized> RepresentativeLookup for Arc<T> {
    async fn lookup(&self, address: &str) -> Result<Lookup, LookupError> {
        (**self).lookup(address).await
    }
}

/// Where lookup requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Cicero itself, authenticated with a key on every request.
    Direct { base_url: String, api_key: String },
    /// A deployment proxy that adds the key server-side.
    Proxy { url: String },
}

impl Endpoint {
    fn kind(&self) -> &'static str {
        match self {
            Self::Direct { .. } => "direct",
            Self::Proxy { .. } => "proxy",
        }
    }
}

/// Cicero `/official` client.
pub struct CiceroClient {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl CiceroClient {
    /// Create a client for `endpoint`. Trailing slashes on URLs are dropped.
    pub fn new(endpoint: Endpoint) -> Self {
        let endpoint = match endpoint {
            Endpoint::Direct { base_url, api_key } => Endpoint::Direct {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key,
            },
            Endpoint::Proxy { url } => Endpoint::Proxy {
                url: url.trim_end_matches('/').to_string(),
            },
        };
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Build the lookup URL for `address`, URL-encoding every query value.
    pub fn request_url(&self, address: &str) -> Result<Url, LookupError> {
        let url = match &self.endpoint {
            Endpoint::Direct { base_url, api_key } => {
                let mut url = Url::parse(&format!("{base_url}/v3.1/official"))?;
                url.query_pairs_mut()
                    .append_pair("search_loc", address)
                    .append_pair("key", api_key);
                url
            }
            Endpoint::Proxy { url } => {
                let mut url = Url::parse(url)?;
                url.query_pairs_mut().append_pair("search_loc", address);
                url
            }
        };
        Ok(url)
    }
}

#[async_trait]
impl RepresentativeLookup for CiceroClient {
    async fn lookup(&self, address: &str) -> Result<Lookup, LookupError> {
        let url = self.request_url(address)?;

        info!(endpoint = self.endpoint.kind(), "looking up representatives");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "cicero responded");

        let lookup = interpret(status.as_u16(), &body, address)?;
        info!(
            officials = lookup.officials.len(),
            address = %lookup.normalized_address,
            "lookup complete"
        );
        Ok(lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn direct_url_carries_address_and_key() {
        let client = CiceroClient::new(Endpoint::Direct {
            base_url: "https://app.cicerodata.com/".into(),
            api_key: "secret".into(),
        });
        let url = client.request_url("123 Main St, Springfield, IL").unwrap();
        assert_eq!(url.path(), "/v3.1/official");
        assert_eq!(
            query(&url),
            vec![
                ("search_loc".into(), "123 Main St, Springfield, IL".into()),
                ("key".into(), "secret".into()),
            ]
        );
    }

    #[test]
    fn proxy_url_omits_key() {
        let client = CiceroClient::new(Endpoint::Proxy {
            url: "https://repcheck.example/api/cicero/".into(),
        });
        let url = client.request_url("1 Elm & Oak #2").unwrap();
        assert_eq!(url.path(), "/api/cicero");
        assert_eq!(
            query(&url),
            vec![("search_loc".into(), "1 Elm & Oak #2".into())]
        );
        assert!(!url.as_str().contains("key="));
        assert!(!url.as_str().contains(" & "));
    }

    #[test]
    fn trailing_slashes_trimmed() {
        let client = CiceroClient::new(Endpoint::Direct {
            base_url: "http://localhost:8080//".into(),
            api_key: "k".into(),
        });
        assert_eq!(
            client.endpoint(),
            &Endpoint::Direct {
                base_url: "http://localhost:8080".into(),
                api_key: "k".into(),
            }
        );
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let client = CiceroClient::new(Endpoint::Proxy {
            url: "not a url".into(),
        });
        assert!(matches!(
            client.request_url("x"),
            Err(LookupError::Url(_))
        ));
    }
}
