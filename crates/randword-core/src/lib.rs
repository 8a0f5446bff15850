//! # Randword Core
//!
//! Cancellable client for the randomwordgenerator.com word endpoint.
//!
//! ## Overview
//!
//! - **Validated configuration**: quantity bounded to `1..=50`, http/https proxies only
//! - **Transport** built once with optional proxy and configurable TLS verification
//! - **Cancellable fetch** racing the request against a token and deadline
//! - **Structured errors** that callers can branch on by kind
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `WordClient` and the cancellable fetch |
//! | [`config`] | Serializable settings with `RANDWORD_*` overrides |
//! | [`context`] | Cancellation token plus optional deadline |
//! | [`error`] | Configuration and fetch error types |
//! | [`http_client`] | Transport trait, reqwest transport, offline stub |
//! | [`parser`] | Decoder for the endpoint's array-like body |
//! | [`quantity`] | Bounded word count |
//! | [`request`] | Request construction for the word endpoint |
//! | [`transport`] | Proxy and TLS policy for the reqwest transport |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use randword_core::{FetchContext, WordClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = FetchContext::background().with_timeout(Duration::from_secs(5));
//!     let mut client = WordClient::with_context(ctx);
//!     client.set_quantity(5)?;
//!     client.initialize()?;
//!
//!     for word in client.generate_words().await? {
//!         println!("{word}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use randword_core::{FetchError, FetchErrorKind};
//!
//! fn describe(error: &FetchError) -> &'static str {
//!     match error.kind() {
//!         FetchErrorKind::Cancelled => "gave up waiting",
//!         FetchErrorKind::RemoteStatus => "endpoint refused",
//!         FetchErrorKind::Transport => "network failure",
//!         _ => "misconfigured client",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! TLS peer verification is disabled unless
//! [`WordClient::set_verify_tls`] enables it.

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod http_client;
pub mod parser;
pub mod quantity;
pub mod request;
pub mod transport;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use client::WordClient;
pub use config::ClientConfig;
pub use context::FetchContext;
pub use error::{CancelReason, ConfigError, FetchError, FetchErrorKind};
pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
    StubHttpClient,
};
pub use parser::parse_words;
pub use quantity::{Quantity, MAX_QUANTITY};
pub use request::WordsEndpoint;
pub use transport::{ProxyUri, TransportConfig};

// Callers build contexts from their own tokens.
pub use tokio_util::sync::CancellationToken;
