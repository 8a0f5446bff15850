use randword_core::{CancelReason, FetchErrorKind};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] randword_core::ConfigError),

    #[error(transparent)]
    Fetch(#[from] randword_core::FetchError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Fetch(error) => match error.kind() {
                FetchErrorKind::Configuration | FetchErrorKind::RequestBuild => 2,
                FetchErrorKind::RemoteStatus => 3,
                FetchErrorKind::Transport => 4,
                FetchErrorKind::Cancelled => match error.cancel_reason() {
                    Some(CancelReason::Canceled) => 130,
                    _ => 5,
                },
                FetchErrorKind::Internal => 10,
            },
            Self::Serialization(_) => 10,
            Self::Io(_) => 10,
        }
    }
}
