//! XLSX catalog adapter - Implements CatalogPort with calamine
//!
//! Every worksheet becomes one [`CatalogGroup`]. The first row holds the
//! column names; blank rows are skipped. Comparison workbooks name their
//! series after the sheet, so their `Series` column is overwritten with the
//! sheet name.

use std::path::Path;

use application::{
    error::ApplicationError,
    ports::{CatalogPort, CatalogSource},
};
use async_trait::async_trait;
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use domain::{CatalogGroup, ProductCatalog, SERIES_COLUMN, value_objects::CellValue};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::config::CatalogConfig;

/// Errors that can occur while reading a workbook
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The file is missing or not a readable XLSX workbook
    #[error("Cannot open workbook {path}: {message}")]
    Open { path: String, message: String },

    /// No worksheet contains a header row
    #[error("Workbook {0} contains no data")]
    Empty(String),
}

/// Catalog loader reading the configured EPD workbooks
#[derive(Debug, Clone)]
pub struct XlsxCatalogAdapter {
    config: CatalogConfig,
}

impl XlsxCatalogAdapter {
    pub const fn new(config: CatalogConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CatalogPort for XlsxCatalogAdapter {
    #[instrument(skip(self))]
    async fn load(&self, source: CatalogSource) -> Result<ProductCatalog, ApplicationError> {
        let path = self.config.path_for(source).to_path_buf();
        let factor_column = self.config.emission_factor_column.clone();

        let catalog =
            tokio::task::spawn_blocking(move || read_catalog(&path, source, &factor_column))
                .await
                .map_err(|e| ApplicationError::Internal(format!("Catalog reader failed: {e}")))?
                .map_err(|e| {
                    warn!(error = %e, "Catalog could not be loaded");
                    ApplicationError::Catalog(e.to_string())
                })?;

        info!(
            catalog = %catalog.name(),
            groups = catalog.groups().len(),
            "Catalog loaded from workbook"
        );
        Ok(catalog)
    }
}

fn read_catalog(
    path: &Path,
    source: CatalogSource,
    factor_column: &str,
) -> Result<ProductCatalog, CatalogLoadError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e: calamine::XlsxError| {
        CatalogLoadError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;

    let series_from_sheet = matches!(source, CatalogSource::Pipe(_));
    let catalog = catalog_from_sheets(&source.to_string(), workbook.worksheets(), series_from_sheet)
        .map_err(|e| match e {
            CatalogLoadError::Empty(_) => CatalogLoadError::Empty(path.display().to_string()),
            other => other,
        })?;
    Ok(catalog.with_emission_factor_column(factor_column))
}

/// Build a catalog from `(sheet name, cells)` pairs
///
/// With `series_from_sheet` every group gets a `Series` column holding its
/// sheet name.
pub fn catalog_from_sheets(
    name: &str,
    sheets: Vec<(String, Range<Data>)>,
    series_from_sheet: bool,
) -> Result<ProductCatalog, CatalogLoadError> {
    let mut groups = Vec::with_capacity(sheets.len());

    for (sheet, range) in sheets {
        let Some(mut group) = group_from_range(&sheet, &range) else {
            debug!(%sheet, "Skipping empty worksheet");
            continue;
        };
        if series_from_sheet {
            group.set_constant_column(SERIES_COLUMN, &CellValue::Text(sheet.clone()));
        }
        groups.push(group);
    }

    if groups.is_empty() {
        return Err(CatalogLoadError::Empty(name.to_string()));
    }
    Ok(ProductCatalog::new(name, groups))
}

fn group_from_range(sheet: &str, range: &Range<Data>) -> Option<CatalogGroup> {
    let mut rows = range.rows();
    let header = rows.next()?;

    let columns = header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let name = cell_value(cell).key();
            if name.is_empty() {
                format!("Unnamed: {i}")
            } else {
                name
            }
        })
        .collect();

    let rows = rows
        .map(|row| row.iter().map(cell_value).collect::<Vec<_>>())
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect();

    Some(CatalogGroup::new(sheet, columns, rows))
}

#[allow(clippy::cast_precision_loss)]
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            if s.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        },
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}
