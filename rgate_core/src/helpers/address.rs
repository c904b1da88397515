use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A 20-byte EVM address in its `0x`-prefixed hex form.
///
/// Validation is purely lexical (40 hex digits after the prefix); no
/// EIP-55 checksum is enforced. The inner string is always lower-cased so
/// it can be used directly as a registry key or upstream query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Option<Self> {
        let hex = raw.strip_prefix("0x")?;
        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }
}

impl FromStr for Address {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid address: {}", s))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
