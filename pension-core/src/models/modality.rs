use std::fmt;

use serde::{Deserialize, Serialize};

/// Legal pathway chosen for retiring.
///
/// Serialized in snake_case; the short codes from [`RetirementModality::as_str`]
/// are accepted as aliases when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetirementModality {
    #[default]
    #[serde(alias = "ORD")]
    Ordinary,
    #[serde(alias = "EARLY_VOL")]
    EarlyVoluntary,
    #[serde(alias = "EARLY_INVOL")]
    EarlyInvoluntary,
    #[serde(alias = "DELAYED")]
    Delayed,
    #[serde(alias = "PARTIAL")]
    Partial,
}

impl RetirementModality {
    pub fn all() -> &'static [RetirementModality] {
        &[
            RetirementModality::Ordinary,
            RetirementModality::EarlyVoluntary,
            RetirementModality::EarlyInvoluntary,
            RetirementModality::Delayed,
            RetirementModality::Partial,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ordinary => "ORD",
            Self::EarlyVoluntary => "EARLY_VOL",
            Self::EarlyInvoluntary => "EARLY_INVOL",
            Self::Delayed => "DELAYED",
            Self::Partial => "PARTIAL",
        }
    }

    /// Parses a short code, ignoring ASCII case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ORD" => Some(Self::Ordinary),
            "EARLY_VOL" => Some(Self::EarlyVoluntary),
            "EARLY_INVOL" => Some(Self::EarlyInvoluntary),
            "DELAYED" => Some(Self::Delayed),
            "PARTIAL" => Some(Self::Partial),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ordinary => "Ordinary retirement",
            Self::EarlyVoluntary => "Early retirement (voluntary)",
            Self::EarlyInvoluntary => "Early retirement (involuntary)",
            Self::Delayed => "Delayed retirement",
            Self::Partial => "Partial retirement",
        }
    }

    /// True for the two anticipated variants, which get an ordinary-age comparison.
    pub fn is_early(&self) -> bool {
        matches!(self, Self::EarlyVoluntary | Self::EarlyInvoluntary)
    }
}

impl fmt::Display for RetirementModality {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
