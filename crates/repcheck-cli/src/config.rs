//! Runtime configuration from flags, environment, and `.env`.

use anyhow::anyhow;
use clap::Args;
use repcheck_cicero::client::DEFAULT_BASE_URL;
use repcheck_cicero::places::DEFAULT_COUNTRY;
use repcheck_cicero::{Endpoint, PlacesConfig};

#[derive(Args, Debug, Clone)]
pub struct Config {
    /// Cicero API key, sent with every request unless a proxy is configured
    #[arg(long, env = "CICERO_API_KEY", hide_env_values = true)]
    pub cicero_api_key: Option<String>,

    #[arg(long, env = "CICERO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub cicero_base_url: String,

    /// Lookup proxy that supplies the Cicero key server-side (production)
    #[arg(long, env = "CICERO_PROXY_URL")]
    pub cicero_proxy_url: Option<String>,

    /// Google Places key; autocomplete is disabled without it
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub google_api_key: Option<String>,

    /// Country restriction for address autocomplete
    #[arg(long, env = "REPCHECK_COUNTRY", default_value = DEFAULT_COUNTRY)]
    pub country: String,
}

impl Config {
    /// Lookup endpoint: the proxy when configured, otherwise Cicero with a key.
    pub fn endpoint(&self) -> anyhow::Result<Endpoint> {
        if let Some(url) = non_blank(&self.cicero_proxy_url) {
            return Ok(Endpoint::Proxy {
                url: url.to_string(),
            });
        }
        let api_key = non_blank(&self.cicero_api_key).ok_or_else(|| {
            anyhow!("CICERO_API_KEY is not set (or set CICERO_PROXY_URL to use a lookup proxy)")
        })?;
        Ok(Endpoint::Direct {
            base_url: self.cicero_base_url.clone(),
            api_key: api_key.to_string(),
        })
    }

    pub fn places(&self) -> PlacesConfig {
        PlacesConfig {
            api_key: non_blank(&self.google_api_key).map(String::from),
            country: self.country.clone(),
            ..Default::default()
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
