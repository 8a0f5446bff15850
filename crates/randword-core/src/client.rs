//! The word client and its cancellable fetch.
//!
//! A [`WordClient`] is configured through setters, then frozen by
//! [`WordClient::initialize`], which builds the shared transport. Each call
//! to [`WordClient::generate_words`] spawns the fetch path (build request,
//! send, check status, parse body) onto the runtime and races it against the
//! client's [`FetchContext`].
//!
//! # Cancellation
//!
//! When the context fires first the caller gets
//! [`FetchError::Cancelled`] straight away. The fetch path observes a child
//! of the context token, so the in-flight request future is dropped and the
//! spawned task is drained before returning. The transport closes the
//! abandoned connection on its own schedule afterwards.
//! Dropping the `generate_words` future itself also cancels the fetch path.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::http_client::HttpClient;
use crate::parser::parse_words;
use crate::request::WordsEndpoint;
use crate::transport::{build_http_client, ProxyUri, TransportConfig};
use crate::{CancelReason, ConfigError, FetchContext, FetchError, Quantity};

pub struct WordClient {
    quantity: Quantity,
    transport: TransportConfig,
    endpoint: WordsEndpoint,
    ctx: FetchContext,
    http: Option<Arc<dyn HttpClient>>,
}

impl Default for WordClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WordClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordClient")
            .field("quantity", &self.quantity)
            .field("transport", &self.transport)
            .field("endpoint", &self.endpoint)
            .field("ctx", &self.ctx)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

impl WordClient {
    /// Un-initialized client with a background context.
    pub fn new() -> Self {
        Self::with_context(FetchContext::background())
    }

    pub fn with_context(ctx: FetchContext) -> Self {
        Self {
            quantity: Quantity::default(),
            transport: TransportConfig::default(),
            endpoint: WordsEndpoint::default(),
            ctx,
            http: None,
        }
    }

    /// Sets how many words each fetch requests. Fails outside `1..=MAX_QUANTITY`
    /// and leaves the previous quantity in place.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), ConfigError> {
        self.ensure_configurable()?;
        self.quantity = Quantity::new(quantity)?;
        Ok(())
    }

    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Routes every request through an http/https proxy. Must precede [`initialize`](Self::initialize).
    pub fn set_proxy(&mut self, proxy: &str) -> Result<(), ConfigError> {
        self.ensure_configurable()?;
        self.transport.proxy = Some(ProxyUri::parse(proxy)?);
        Ok(())
    }

    /// Replaces a previously set proxy.
    pub fn modify_proxy(&mut self, proxy: &str) -> Result<(), ConfigError> {
        self.set_proxy(proxy)
    }

    pub fn uses_proxy(&self) -> bool {
        self.transport.proxy.is_some()
    }

    pub fn proxy(&self) -> Option<&ProxyUri> {
        self.transport.proxy.as_ref()
    }

    pub fn set_verify_tls(&mut self, verify: bool) -> Result<(), ConfigError> {
        self.ensure_configurable()?;
        self.transport.verify_tls = verify;
        Ok(())
    }

    pub const fn verify_tls(&self) -> bool {
        self.transport.verify_tls
    }

    pub fn set_request_timeout(&mut self, timeout: Duration) -> Result<(), ConfigError> {
        self.ensure_configurable()?;
        self.transport.timeout = timeout;
        Ok(())
    }

    pub fn set_endpoint(&mut self, endpoint: WordsEndpoint) -> Result<(), ConfigError> {
        self.ensure_configurable()?;
        self.endpoint = endpoint;
        Ok(())
    }

    pub fn endpoint(&self) -> &WordsEndpoint {
        &self.endpoint
    }

    /// Replaces the cancellation context. Allowed at any time.
    pub fn set_context(&mut self, ctx: FetchContext) {
        self.ctx = ctx;
    }

    pub fn context(&self) -> &FetchContext {
        &self.ctx
    }

    pub fn is_initialized(&self) -> bool {
        self.http.is_some()
    }

    /// Builds the transport and freezes the configuration.
    pub fn initialize(&mut self) -> Result<(), ConfigError> {
        self.ensure_configurable()?;
        let http = build_http_client(&self.transport)?;
        self.http = Some(Arc::new(http));
        Ok(())
    }

    /// Freezes the configuration and sends through `http` instead of a built
    /// transport. Proxy, TLS and timeout settings are then up to `http`.
    pub fn initialize_with(&mut self, http: Arc<dyn HttpClient>) -> Result<(), ConfigError> {
        self.ensure_configurable()?;
        self.http = Some(http);
        Ok(())
    }

    /// Fetches one batch of words.
    ///
    /// Returns whichever happens first: the fetch path finishing, or the
    /// context being cancelled or reaching its deadline. Exactly one outcome
    /// is produced per call.
    pub async fn generate_words(&self) -> Result<Vec<String>, FetchError> {
        let http = self.http.clone().ok_or(ConfigError::NotInitialized)?;

        if let Some(reason) = self.ctx.err() {
            return Err(FetchError::Cancelled(reason));
        }

        let path_token = self.ctx.token().child_token();
        let _abort_on_drop = path_token.clone().drop_guard();

        let mut fetch = tokio::spawn(fetch_path(
            http,
            self.endpoint.clone(),
            self.quantity,
            path_token.clone(),
        ));

        tokio::select! {
            joined = &mut fetch => {
                joined.map_err(|error| FetchError::TaskFailed(error.to_string()))?
            }
            reason = self.ctx.done() => {
                path_token.cancel();
                drain(fetch, reason).await;
                Err(FetchError::Cancelled(reason))
            }
        }
    }

    fn ensure_configurable(&self) -> Result<(), ConfigError> {
        if self.is_initialized() {
            return Err(ConfigError::AlreadyInitialized);
        }
        Ok(())
    }
}

async fn fetch_path(
    http: Arc<dyn HttpClient>,
    endpoint: WordsEndpoint,
    quantity: Quantity,
    token: CancellationToken,
) -> Result<Vec<String>, FetchError> {
    let request = endpoint.build_request(quantity)?;
    debug!(url = %request.url, quantity = quantity.get(), "requesting words");

    let response = tokio::select! {
        biased;
        _ = token.cancelled() => return Err(FetchError::Cancelled(CancelReason::Canceled)),
        response = http.execute(request) => response?,
    };

    if !response.is_acceptable() {
        warn!(status = response.status, "word endpoint returned bad status");
        return Err(FetchError::RemoteStatus {
            status: response.status,
        });
    }

    let words = parse_words(&response.body);
    debug!(count = words.len(), "parsed words");
    Ok(words)
}

async fn drain(
    fetch: tokio::task::JoinHandle<Result<Vec<String>, FetchError>>,
    reason: CancelReason,
) {
    match fetch.await {
        Ok(Ok(words)) => debug!(
            %reason,
            count = words.len(),
            "discarding words fetched after cancellation"
        ),
        Ok(Err(error)) => debug!(%reason, %error, "fetch path stopped after cancellation"),
        Err(error) => debug!(%reason, %error, "fetch task ended abnormally after cancellation"),
    }
}
