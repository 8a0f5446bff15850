use serde::{Deserialize, Serialize};
use url::Url;

use crate::http_client::HttpRequest;
use crate::{FetchError, Quantity};

pub const DEFAULT_ENDPOINT: &str = "https://randomwordgenerator.com/json/words.php";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";
pub const DEFAULT_CATEGORY: &str = "es";

/// Remote word source: base URL, category filter and the user agent sent with every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsEndpoint {
    pub base_url: String,
    pub user_agent: String,
    pub category: String,
}

impl Default for WordsEndpoint {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_ENDPOINT),
            user_agent: String::from(DEFAULT_USER_AGENT),
            category: String::from(DEFAULT_CATEGORY),
        }
    }
}

impl WordsEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Builds the GET request for `quantity` words.
    ///
    /// Letter and length filters are always sent empty. The quantity is not
    /// re-validated here; [`Quantity`] already guarantees its range.
    pub fn build_request(&self, quantity: Quantity) -> Result<HttpRequest, FetchError> {
        let mut url = Url::parse(&self.base_url).map_err(|error| {
            FetchError::RequestBuild(format!("invalid endpoint '{}': {error}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::RequestBuild(format!(
                "endpoint '{}' must use http or https",
                self.base_url
            )));
        }

        let query = format!(
            "qty={}&category={}&first_letter=&last_letter=&word_size_by=length&operator=equals&length=",
            quantity,
            urlencoding::encode(&self.category),
        );
        url.set_query(Some(&query));

        Ok(HttpRequest::get(url).with_header("user-agent", self.user_agent.as_str()))
    }
}
