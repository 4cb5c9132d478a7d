//! Case-normalization policy for text comparisons.

use serde::{Deserialize, Serialize};

/// How two pieces of text are compared.
///
/// `Insensitive` lowercases both sides (Unicode-aware) before comparing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

impl CaseSensitivity {
    /// Whole-string equality under this policy.
    pub fn equals(self, a: &str, b: &str) -> bool {
        match self {
            CaseSensitivity::Sensitive => a == b,
            CaseSensitivity::Insensitive => a.to_lowercase() == b.to_lowercase(),
        }
    }

    /// Substring containment under this policy.
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            CaseSensitivity::Sensitive => haystack.contains(needle),
            CaseSensitivity::Insensitive => {
                haystack.to_lowercase().contains(&needle.to_lowercase())
            }
        }
    }
}

impl core::fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CaseSensitivity::Sensitive => f.write_str("sensitive"),
            CaseSensitivity::Insensitive => f.write_str("insensitive"),
        }
    }
}

impl core::str::FromStr for CaseSensitivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sensitive" => Ok(CaseSensitivity::Sensitive),
            "insensitive" => Ok(CaseSensitivity::Insensitive),
            other => Err(format!(
                "unknown case policy '{other}' (expected 'sensitive' or 'insensitive')"
            )),
        }
    }
}
