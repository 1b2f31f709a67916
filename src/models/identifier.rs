use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted vehicle identifier schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Registration number: `DDDDLL-R` (R = regional code 1..7)
    #[default]
    #[value(name = "registration", alias = "reg")]
    #[serde(alias = "reg")]
    Registration,
    /// Last four digits of the VIN
    #[value(name = "vin")]
    Vin,
}

impl IdentifierKind {
    pub fn code(&self) -> &'static str {
        match self {
            IdentifierKind::Registration => "registration",
            IdentifierKind::Vin => "vin",
        }
    }

    /// Human readable hint shown next to validation errors.
    pub fn pattern_hint(&self) -> &'static str {
        match self {
            IdentifierKind::Registration => "4 digits, 2 uppercase letters, '-', region 1-7 (e.g. 1234AB-1)",
            IdentifierKind::Vin => "exactly 4 digits (e.g. 0427)",
        }
    }
}

/// A validated vehicle identifier.
///
/// Only obtainable through `core::validate::validate`, or from already
/// persisted data where the stored text is taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    pub(crate) fn new_unchecked(raw: impl Into<String>) -> Self {
        Identifier(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
