use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Largest batch the remote generator serves in one request.
pub const MAX_QUANTITY: u8 = 50;

const DEFAULT_QUANTITY: u8 = 10;

/// Number of words requested per fetch, always within `1..=MAX_QUANTITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(u8);

impl Quantity {
    pub fn new(value: i64) -> Result<Self, ConfigError> {
        if value <= 0 || value > i64::from(MAX_QUANTITY) {
            return Err(ConfigError::QuantityOutOfRange {
                value,
                max: MAX_QUANTITY,
            });
        }

        // In range, so the narrowing cannot truncate.
        Ok(Self(value as u8))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(DEFAULT_QUANTITY)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        i64::from(value.0)
    }
}
