//! Catalog configuration: EPD workbook paths.

use std::path::{Path, PathBuf};

use application::ports::CatalogSource;
use domain::{DEFAULT_EMISSION_FACTOR_COLUMN, value_objects::PipeKind};
use serde::{Deserialize, Serialize};

/// Locations of the EPD workbooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Workbook behind the project calculator
    #[serde(default = "default_project")]
    pub project: PathBuf,

    /// Column holding the unit emission factor in the project workbook
    #[serde(default = "default_emission_factor_column")]
    pub emission_factor_column: String,

    /// Single series comparison workbook
    #[serde(default = "default_single")]
    pub single: PathBuf,

    /// Twin series comparison workbook
    #[serde(default = "default_twin")]
    pub twin: PathBuf,

    /// Single series recase comparison workbook
    #[serde(default = "default_single_recase")]
    pub single_recase: PathBuf,

    /// Twin series recase comparison workbook
    #[serde(default = "default_twin_recase")]
    pub twin_recase: PathBuf,
}

fn default_project() -> PathBuf {
    PathBuf::from("data/Final_Powerpipe_with_Weight_Product_Filled.xlsx")
}

fn default_emission_factor_column() -> String {
    DEFAULT_EMISSION_FACTOR_COLUMN.to_string()
}

fn default_single() -> PathBuf {
    PathBuf::from("data/EPD_singel_series_kingspan.xlsx")
}

fn default_twin() -> PathBuf {
    PathBuf::from("data/EPD_twin_series_kingspan.xlsx")
}

fn default_single_recase() -> PathBuf {
    PathBuf::from("data/EPD_singel_series_recase_kingspan.xlsx")
}

fn default_twin_recase() -> PathBuf {
    PathBuf::from("data/EPD_twin_series_recase_kingspan.xlsx")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            emission_factor_column: default_emission_factor_column(),
            single: default_single(),
            twin: default_twin(),
            single_recase: default_single_recase(),
            twin_recase: default_twin_recase(),
        }
    }
}

impl CatalogConfig {
    /// Workbook of one pipe kind
    pub fn pipe_path(&self, kind: PipeKind) -> &Path {
        match kind {
            PipeKind::Single => &self.single,
            PipeKind::Twin => &self.twin,
            PipeKind::SingleRecase => &self.single_recase,
            PipeKind::TwinRecase => &self.twin_recase,
        }
    }

    /// Workbook behind a catalog source
    pub fn path_for(&self, source: CatalogSource) -> &Path {
        match source {
            CatalogSource::Project => &self.project,
            CatalogSource::Pipe(kind) => self.pipe_path(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_source_has_a_distinct_workbook() {
        let config = CatalogConfig::default();
        let mut paths: Vec<&Path> = PipeKind::ALL
            .into_iter()
            .map(|kind| config.path_for(CatalogSource::Pipe(kind)))
            .collect();
        paths.push(config.path_for(CatalogSource::Project));
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 5);
    }

    #[test]
    fn default_factor_column() {
        assert_eq!(
            CatalogConfig::default().emission_factor_column,
            "A1-A3 (kg CO2e)"
        );
    }
}
