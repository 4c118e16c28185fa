//! Pipe product families with their own EPD workbooks

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Pipe family; each family is published as a separate EPD workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipeKind {
    Single,
    Twin,
    SingleRecase,
    TwinRecase,
}

impl PipeKind {
    pub const ALL: [Self; 4] = [Self::Single, Self::Twin, Self::SingleRecase, Self::TwinRecase];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Twin => "Twin",
            Self::SingleRecase => "Single Recase",
            Self::TwinRecase => "Twin Recase",
        }
    }

    /// Whether products of this family use a recased jacket
    #[must_use]
    pub fn is_recase(&self) -> bool {
        self.label().to_lowercase().contains("recase")
    }
}

impl fmt::Display for PipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PipeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().to_lowercase() == normalized)
            .ok_or_else(|| DomainError::not_found("Pipe kind", s.trim()))
    }
}
