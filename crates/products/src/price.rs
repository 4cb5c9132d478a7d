//! Unit price value object.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest magnitude (in currency units) accepted when parsing.
const MAX_UNITS: f64 = 1e15;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("not a decimal number: '{0}'")]
    Invalid(String),

    #[error("price out of range: '{0}'")]
    OutOfRange(String),
}

/// Unit price held in the smallest currency unit (cents).
///
/// Decimal input is rounded to the nearest cent. Negative prices are accepted;
/// nothing downstream relies on prices being non-negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| PriceError::Invalid(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(PriceError::Invalid(trimmed.to_string()));
        }
        if value.abs() > MAX_UNITS {
            return Err(PriceError::OutOfRange(trimmed.to_string()));
        }

        Ok(Self((value * 100.0).round() as i64))
    }
}

/// Two-decimal rendering, e.g. `9.99`, `-0.50`.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let rendered = format!("{sign}{}.{:02}", abs / 100, abs % 100);
        // Route through `pad` so width/alignment flags apply to the whole string.
        f.pad(&rendered)
    }
}
