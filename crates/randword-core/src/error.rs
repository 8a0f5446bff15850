use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::http_client::HttpError;

/// Configuration and lifecycle errors exposed by `randword-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("client is not initialized; call initialize() before generating words")]
    NotInitialized,
    #[error("client is already initialized; configuration is frozen")]
    AlreadyInitialized,

    #[error("quantity must be greater than 0 and at most {max}, got {value}")]
    QuantityOutOfRange { value: i64, max: u8 },

    #[error("invalid proxy uri '{value}': {reason}")]
    InvalidProxy { value: String, reason: String },
    #[error("unsupported proxy scheme '{scheme}', only http/https proxies are supported")]
    UnsupportedProxyScheme { scheme: String },

    #[error("failed to build http transport: {0}")]
    TransportBuild(String),

    #[error("environment variable {name} has invalid value '{value}'")]
    InvalidEnv { name: &'static str, value: String },
    #[error("invalid configuration document: {0}")]
    InvalidDocument(String),
}

/// Why a fetch context stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The cancellation token was cancelled explicitly.
    Canceled,
    /// The context deadline elapsed.
    DeadlineExceeded,
}

impl CancelReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canceled => "context canceled",
            Self::DeadlineExceeded => "context deadline exceeded",
        }
    }
}

impl Display for CancelReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a [`FetchError`] for callers that branch on cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Configuration,
    RequestBuild,
    Transport,
    RemoteStatus,
    Cancelled,
    Internal,
}

/// Error returned by [`WordClient::generate_words`](crate::WordClient::generate_words).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not build request: {0}")]
    RequestBuild(String),

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("server responded with bad status code {status}")]
    RemoteStatus { status: u16 },

    #[error("{0}")]
    Cancelled(CancelReason),

    #[error("fetch task failed: {0}")]
    TaskFailed(String),
}

impl FetchError {
    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Config(_) => FetchErrorKind::Configuration,
            Self::RequestBuild(_) => FetchErrorKind::RequestBuild,
            Self::Transport(_) => FetchErrorKind::Transport,
            Self::RemoteStatus { .. } => FetchErrorKind::RemoteStatus,
            Self::Cancelled(_) => FetchErrorKind::Cancelled,
            Self::TaskFailed(_) => FetchErrorKind::Internal,
        }
    }

    /// Status code carried by a remote-status error.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteStatus { status } => Some(*status),
            _ => None,
        }
    }

    pub const fn cancel_reason(&self) -> Option<CancelReason> {
        match self {
            Self::Cancelled(reason) => Some(*reason),
            _ => None,
        }
    }
}
