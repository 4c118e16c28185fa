//! Product catalog port
//!
//! Loads EPD reference tables. The project catalog drives the bill of
//! materials; one pipe catalog per [`PipeKind`] feeds the comparison views.

use std::fmt;

use async_trait::async_trait;
use domain::{ProductCatalog, value_objects::PipeKind};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Which reference table to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Catalog used by the project calculator
    Project,
    /// Comparison catalog of one pipe kind
    Pipe(PipeKind),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project => write!(f, "project catalog"),
            Self::Pipe(kind) => write!(f, "{} catalog", kind.label()),
        }
    }
}

/// Port for loading product catalogs
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Load a complete catalog
    async fn load(&self, source: CatalogSource) -> Result<ProductCatalog, ApplicationError>;
}
