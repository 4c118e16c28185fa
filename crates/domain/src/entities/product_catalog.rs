//! Product catalog - EPD reference tables grouped by sheet
//!
//! A catalog is an ordered list of named groups (one per workbook sheet),
//! each holding rows keyed by product type, series and nominal diameter.
//! Lookups follow the sheet order: the first group containing a
//! (type, series) pair owns that product line.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    errors::DomainError,
    value_objects::{CellValue, compare_keys},
};

/// Column holding the product type
pub const TYPE_COLUMN: &str = "Type";
/// Column holding the product series
pub const SERIES_COLUMN: &str = "Series";
/// Column holding the nominal diameter
pub const DN_COLUMN: &str = "DN";
/// Default name of the A1-A3 emission factor column
pub const DEFAULT_EMISSION_FACTOR_COLUMN: &str = "A1-A3 (kg CO2e)";
/// Length used when a product has no usable default length
pub const FALLBACK_LENGTH_M: f64 = 1.0;

/// One sheet of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogGroup {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl CatalogGroup {
    /// Create a group; short rows are padded with empty cells
    #[must_use]
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Index of a column by exact name
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// First column whose name contains "length", case-insensitive
    #[must_use]
    pub fn length_column(&self) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.to_lowercase().contains("length"))
    }

    /// Replace (or add) a column holding the same value on every row
    pub fn set_constant_column(&mut self, name: &str, value: &CellValue) {
        let index = if let Some(i) = self.column_index(name) {
            i
        } else {
            self.columns.push(name.to_string());
            for row in &mut self.rows {
                row.push(CellValue::Empty);
            }
            self.columns.len() - 1
        };
        for row in &mut self.rows {
            row[index] = value.clone();
        }
    }

    /// Cell of `row` in the named column
    #[must_use]
    pub fn cell<'a>(&self, row: &'a [CellValue], column: &str) -> Option<&'a CellValue> {
        self.column_index(column).and_then(|i| row.get(i))
    }

    fn row_matches(&self, row: &[CellValue], column: &str, key: &str) -> bool {
        self.cell(row, column).is_some_and(|c| c.matches_key(key))
    }

    /// Rows of a product type and series
    pub fn rows_for<'a>(
        &'a self,
        product_type: &'a str,
        series: &'a str,
    ) -> impl Iterator<Item = &'a Vec<CellValue>> + 'a {
        self.rows.iter().filter(move |row| {
            self.row_matches(row, TYPE_COLUMN, product_type)
                && self.row_matches(row, SERIES_COLUMN, series)
        })
    }

    /// Whether any row has this product type and series
    #[must_use]
    pub fn contains(&self, product_type: &str, series: &str) -> bool {
        self.rows_for(product_type, series).next().is_some()
    }

    /// Rows whose `column` matches `key`
    pub fn rows_where<'a>(
        &'a self,
        column: &'a str,
        key: &'a str,
    ) -> impl Iterator<Item = &'a Vec<CellValue>> + 'a {
        self.rows
            .iter()
            .filter(move |row| self.row_matches(row, column, key))
    }
}

/// Result of an emission factor lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductLookup {
    /// A1-A3 emissions in kg CO2e per metre
    pub unit_factor_kg_per_m: f64,
    /// Default product length, if the sheet has a numeric one
    pub default_length_m: Option<f64>,
}

impl ProductLookup {
    /// Default length, or 1.0 m when the sheet has none
    #[must_use]
    pub fn length_or_fallback(&self) -> f64 {
        self.default_length_m.unwrap_or(FALLBACK_LENGTH_M)
    }
}

/// A complete EPD reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    name: String,
    groups: Vec<CatalogGroup>,
    emission_factor_column: String,
}

impl ProductCatalog {
    #[must_use]
    pub fn new(name: impl Into<String>, groups: Vec<CatalogGroup>) -> Self {
        Self {
            name: name.into(),
            groups,
            emission_factor_column: DEFAULT_EMISSION_FACTOR_COLUMN.to_string(),
        }
    }

    /// Read emission factors from a differently named column
    #[must_use]
    pub fn with_emission_factor_column(mut self, column: impl Into<String>) -> Self {
        self.emission_factor_column = column.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn groups(&self) -> &[CatalogGroup] {
        &self.groups
    }

    #[must_use]
    pub fn emission_factor_column(&self) -> &str {
        &self.emission_factor_column
    }

    /// First group that holds the (type, series) pair
    #[must_use]
    pub fn group_for(&self, product_type: &str, series: &str) -> Option<&CatalogGroup> {
        self.groups
            .iter()
            .find(|g| g.contains(product_type, series))
    }

    /// Find the unit emission factor and default length of a product
    ///
    /// # Errors
    ///
    /// `NotFound` when no group holds the (type, series) pair or the group
    /// has no row with that DN; `InvalidCatalogValue` when the emission factor
    /// cell is empty or not numeric.
    pub fn lookup(
        &self,
        product_type: &str,
        series: &str,
        dn: &str,
    ) -> Result<ProductLookup, DomainError> {
        let group = self.group_for(product_type, series).ok_or_else(|| {
            DomainError::not_found("Product", format!("{product_type} series {series}"))
        })?;

        let row = group
            .rows_for(product_type, series)
            .find(|row| group.row_matches(row, DN_COLUMN, dn))
            .ok_or_else(|| {
                DomainError::not_found(
                    "Product",
                    format!("{product_type} series {series} DN{dn}"),
                )
            })?;

        let unit_factor_kg_per_m = group
            .cell(row, &self.emission_factor_column)
            .and_then(CellValue::as_f64)
            .ok_or_else(|| DomainError::InvalidCatalogValue {
                column: self.emission_factor_column.clone(),
                product: format!("{product_type} series {series} DN{dn}"),
            })?;

        let default_length_m = group
            .length_column()
            .and_then(|i| row.get(i))
            .and_then(CellValue::as_f64);

        Ok(ProductLookup {
            unit_factor_kg_per_m,
            default_length_m,
        })
    }

    /// Distinct product types across all groups, sorted
    #[must_use]
    pub fn product_types(&self) -> Vec<String> {
        self.distinct_values(TYPE_COLUMN)
    }

    /// Distinct series available for a product type across all groups, sorted
    #[must_use]
    pub fn series_for_type(&self, product_type: &str) -> Vec<String> {
        let keys: BTreeSet<String> = self
            .groups
            .iter()
            .flat_map(|g| {
                g.rows_where(TYPE_COLUMN, product_type)
                    .filter_map(move |row| g.cell(row, SERIES_COLUMN))
            })
            .filter(|c| !c.is_empty())
            .map(CellValue::key)
            .collect();
        sorted(keys)
    }

    /// DN values of a product line, in sheet order without duplicates
    #[must_use]
    pub fn dn_values(&self, product_type: &str, series: &str) -> Vec<String> {
        let Some(group) = self.group_for(product_type, series) else {
            return Vec::new();
        };
        let mut seen = Vec::new();
        for cell in group
            .rows_for(product_type, series)
            .filter_map(|row| group.cell(row, DN_COLUMN))
            .filter(|c| !c.is_empty())
        {
            let key = cell.key();
            if !seen.contains(&key) {
                seen.push(key);
            }
        }
        seen
    }

    /// Distinct non-empty values of any column across all groups, sorted
    #[must_use]
    pub fn distinct_values(&self, column: &str) -> Vec<String> {
        let keys: BTreeSet<String> = self
            .groups
            .iter()
            .flat_map(|g| g.rows.iter().filter_map(move |row| g.cell(row, column)))
            .filter(|c| !c.is_empty())
            .map(CellValue::key)
            .collect();
        sorted(keys)
    }
}

fn sorted(keys: BTreeSet<String>) -> Vec<String> {
    let mut keys: Vec<String> = keys.into_iter().collect();
    keys.sort_by(|a, b| compare_keys(a, b));
    keys
}
