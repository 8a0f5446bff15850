use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// GET request envelope handed to an [`HttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// HTTP response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The word endpoint treats every 2xx and 3xx status as usable.
    pub const fn is_acceptable(&self) -> bool {
        self.status >= 200 && self.status <= 399
    }
}

/// Failure class of a transport-level error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    Connect,
    Timeout,
    Body,
    Other,
}

/// Transport-level HTTP error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    kind: HttpErrorKind,
    message: String,
}

impl HttpError {
    pub fn new(kind: HttpErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::Connect, message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn kind(&self) -> HttpErrorKind {
        self.kind
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::new(HttpErrorKind::Timeout, format!("request timeout: {error}"))
        } else if error.is_connect() {
            Self::new(HttpErrorKind::Connect, format!("connection failed: {error}"))
        } else if error.is_body() || error.is_decode() {
            Self::new(
                HttpErrorKind::Body,
                format!("failed to read response body: {error}"),
            )
        } else {
            Self::new(HttpErrorKind::Other, format!("request failed: {error}"))
        }
    }
}

/// Transport contract used by the word client.
///
/// Dropping the returned future must abandon the in-flight request; the
/// orchestrator relies on this to abort work on cancellation.
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Production transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let mut builder = self.client.get(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;

            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
enum StubReply {
    Response(HttpResponse),
    Error(HttpError),
}

/// Offline transport returning a canned reply, optionally after a delay.
///
/// Every request is recorded so tests can inspect the query that was sent.
#[derive(Debug, Clone)]
pub struct StubHttpClient {
    reply: StubReply,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    completed: Arc<Mutex<usize>>,
}

impl StubHttpClient {
    pub fn responding(status: u16, body: impl Into<String>) -> Self {
        Self {
            reply: StubReply::Response(HttpResponse::new(status, body)),
            delay: None,
            requests: Arc::default(),
            completed: Arc::default(),
        }
    }

    pub fn failing(error: HttpError) -> Self {
        Self {
            reply: StubReply::Error(error),
            delay: None,
            requests: Arc::default(),
            completed: Arc::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Number of requests that ran to completion instead of being dropped.
    pub fn completed(&self) -> usize {
        self.completed.lock().map(|count| *count).unwrap_or_default()
    }
}

impl HttpClient for StubHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request);
            }

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            if let Ok(mut completed) = self.completed.lock() {
                *completed += 1;
            }

            match &self.reply {
                StubReply::Response(response) => Ok(response.clone()),
                StubReply::Error(error) => Err(error.clone()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_stored_lowercase() {
        let request = HttpRequest::get("https://example.test/words")
            .with_header("User-Agent", "Mozilla/5.0");

        assert_eq!(request.header("user-agent"), Some("Mozilla/5.0"));
        assert_eq!(request.header("USER-AGENT"), Some("Mozilla/5.0"));
    }

    #[test]
    fn redirect_statuses_are_acceptable() {
        assert!(HttpResponse::new(200, "").is_acceptable());
        assert!(HttpResponse::new(302, "").is_acceptable());
        assert!(HttpResponse::new(399, "").is_acceptable());
        assert!(!HttpResponse::new(199, "").is_acceptable());
        assert!(!HttpResponse::new(400, "").is_acceptable());
        assert!(!HttpResponse::new(500, "").is_acceptable());
    }

    #[tokio::test]
    async fn stub_records_requests_and_replies() {
        let stub = StubHttpClient::responding(200, "[\"a\"]");

        let response = stub
            .execute(HttpRequest::get("https://example.test/words?qty=1"))
            .await
            .expect("stub should reply");

        assert_eq!(response.body, "[\"a\"]");
        assert_eq!(stub.requests().len(), 1);
        assert_eq!(stub.completed(), 1);
    }

    #[tokio::test]
    async fn stub_failure_surfaces_error() {
        let stub = StubHttpClient::failing(HttpError::connect("connection refused"));

        let error = stub
            .execute(HttpRequest::get("https://example.test/words"))
            .await
            .expect_err("stub should fail");

        assert_eq!(error.kind(), HttpErrorKind::Connect);
        assert_eq!(error.message(), "connection refused");
    }
}
