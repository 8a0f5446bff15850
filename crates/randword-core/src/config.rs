//! Serializable client settings with environment overrides.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `RANDWORD_QUANTITY` | `quantity` |
//! | `RANDWORD_PROXY` | `proxy` |
//! | `RANDWORD_ENDPOINT` | `endpoint.base_url` |
//! | `RANDWORD_USER_AGENT` | `endpoint.user_agent` |
//! | `RANDWORD_VERIFY_TLS` | `verify_tls` |
//! | `RANDWORD_TIMEOUT_MS` | `request_timeout_ms` |

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::request::WordsEndpoint;
use crate::transport::DEFAULT_REQUEST_TIMEOUT;
use crate::{ConfigError, FetchContext, Quantity, WordClient};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub quantity: Quantity,
    pub proxy: Option<String>,
    pub endpoint: WordsEndpoint,
    pub verify_tls: bool,
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            quantity: Quantity::default(),
            proxy: None,
            endpoint: WordsEndpoint::default(),
            verify_tls: false,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT.as_millis() as u64,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `RANDWORD_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(document).map_err(|error| ConfigError::InvalidDocument(error.to_string()))
    }

    /// Applies overrides from `lookup`; names without a value are left alone.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        if let Some(value) = lookup("RANDWORD_QUANTITY") {
            let parsed = value
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidEnv {
                    name: "RANDWORD_QUANTITY",
                    value: value.clone(),
                })?;
            self.quantity = Quantity::new(parsed)?;
        }

        if let Some(value) = lookup("RANDWORD_PROXY") {
            let trimmed = value.trim();
            self.proxy = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        }

        if let Some(value) = lookup("RANDWORD_ENDPOINT") {
            self.endpoint.base_url = value;
        }

        if let Some(value) = lookup("RANDWORD_USER_AGENT") {
            self.endpoint.user_agent = value;
        }

        if let Some(value) = lookup("RANDWORD_VERIFY_TLS") {
            self.verify_tls = parse_bool(&value).ok_or(ConfigError::InvalidEnv {
                name: "RANDWORD_VERIFY_TLS",
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup("RANDWORD_TIMEOUT_MS") {
            self.request_timeout_ms =
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidEnv {
                        name: "RANDWORD_TIMEOUT_MS",
                        value: value.clone(),
                    })?;
        }

        Ok(self)
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Runs every setter on a fresh client. The client is not initialized yet.
    pub fn into_client(self, ctx: FetchContext) -> Result<WordClient, ConfigError> {
        let mut client = WordClient::with_context(ctx);
        client.set_quantity(i64::from(self.quantity))?;
        if let Some(proxy) = &self.proxy {
            client.set_proxy(proxy)?;
        }
        client.set_verify_tls(self.verify_tls)?;
        client.set_request_timeout(self.request_timeout())?;
        client.set_endpoint(self.endpoint)?;
        Ok(client)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
