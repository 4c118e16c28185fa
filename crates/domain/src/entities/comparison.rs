//! Side-by-side comparison of EPD products and their impact categories

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    entities::product_catalog::{CatalogGroup, DN_COLUMN, ProductCatalog, SERIES_COLUMN},
    errors::DomainError,
    value_objects::{CellValue, PipeKind, compare_keys},
};

/// EN 15804 life-cycle modules that can be charted, in display order
pub const IMPACT_CATEGORIES: [&str; 12] = [
    "A1", "A2", "A3", "A1–A3", "A4", "A5", "B1-B7", "C1", "C2", "C3", "C4", "D",
];

/// Whether a product comes from a recase workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSource {
    Recase,
    NonRecase,
}

impl From<PipeKind> for ProductSource {
    fn from(kind: PipeKind) -> Self {
        if kind.is_recase() {
            Self::Recase
        } else {
            Self::NonRecase
        }
    }
}

/// A catalog row detached from its sheet, labelled for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparedProduct {
    label: String,
    source: ProductSource,
    columns: Vec<String>,
    values: Vec<CellValue>,
}

impl ComparedProduct {
    fn from_row(group: &CatalogGroup, row: &[CellValue], source: ProductSource) -> Self {
        let series = group.cell(row, SERIES_COLUMN).map(CellValue::key).unwrap_or_default();
        let dn = group.cell(row, DN_COLUMN).map(CellValue::key).unwrap_or_default();
        let mut label = format!("{series} - DN{dn}");
        if source == ProductSource::Recase {
            label.push_str(" (Recase)");
        }
        Self {
            label,
            source,
            columns: group.columns().to_vec(),
            values: row.to_vec(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn source(&self) -> ProductSource {
        self.source
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Value of a named column
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|i| self.values.get(i))
    }
}

/// Every row of a catalog as a labelled product
#[must_use]
pub fn catalog_products(catalog: &ProductCatalog, kind: PipeKind) -> Vec<ComparedProduct> {
    let source = ProductSource::from(kind);
    catalog
        .groups()
        .iter()
        .flat_map(|g| g.rows().iter().map(move |row| ComparedProduct::from_row(g, row, source)))
        .collect()
}

/// Keep only products whose `column` matches `value`
#[must_use]
pub fn filter_products(products: &[ComparedProduct], column: &str, value: &str) -> Vec<ComparedProduct> {
    products
        .iter()
        .filter(|p| p.get(column).is_some_and(|c| c.matches_key(value)))
        .cloned()
        .collect()
}

fn matching_products(
    catalog: &ProductCatalog,
    kind: PipeKind,
    series: &str,
    dn: &str,
) -> Vec<ComparedProduct> {
    let source = ProductSource::from(kind);
    catalog
        .groups()
        .iter()
        .flat_map(|g| {
            g.rows_where(SERIES_COLUMN, series)
                .filter(move |row| g.cell(row, DN_COLUMN).is_some_and(|c| c.matches_key(dn)))
                .map(move |row| ComparedProduct::from_row(g, row, source))
        })
        .collect()
}

/// Rows of both catalogs with the given series and DN, left catalog first
///
/// # Errors
///
/// Returns `NoMatchingProducts` when either catalog has no matching row.
pub fn compare_products(
    left: (&ProductCatalog, PipeKind),
    right: (&ProductCatalog, PipeKind),
    series: &str,
    dn: &str,
) -> Result<Vec<ComparedProduct>, DomainError> {
    let mut products = matching_products(left.0, left.1, series, dn);
    let others = matching_products(right.0, right.1, series, dn);
    if products.is_empty() || others.is_empty() {
        return Err(DomainError::NoMatchingProducts);
    }
    products.extend(others);
    Ok(products)
}

/// Series present in both catalogs, sorted
#[must_use]
pub fn common_series(left: &ProductCatalog, right: &ProductCatalog) -> Vec<String> {
    intersect(
        left.distinct_values(SERIES_COLUMN),
        right.distinct_values(SERIES_COLUMN),
    )
}

/// DN values of a series present in both catalogs, sorted
#[must_use]
pub fn common_dimensions(left: &ProductCatalog, right: &ProductCatalog, series: &str) -> Vec<String> {
    intersect(dimensions_of(left, series), dimensions_of(right, series))
}

fn dimensions_of(catalog: &ProductCatalog, series: &str) -> Vec<String> {
    catalog
        .groups()
        .iter()
        .flat_map(|g| {
            g.rows_where(SERIES_COLUMN, series)
                .filter_map(move |row| g.cell(row, DN_COLUMN))
        })
        .filter(|c| !c.is_empty())
        .map(CellValue::key)
        .collect()
}

fn intersect(left: Vec<String>, right: Vec<String>) -> Vec<String> {
    let right: BTreeSet<String> = right.into_iter().collect();
    let both: BTreeSet<String> = left.into_iter().filter(|k| right.contains(k)).collect();
    let mut both: Vec<String> = both.into_iter().collect();
    both.sort_by(|a, b| compare_keys(a, b));
    both
}

/// Impact categories present among `columns`, in display order
#[must_use]
pub fn available_categories(columns: &[String]) -> Vec<&'static str> {
    IMPACT_CATEGORIES
        .into_iter()
        .filter(|cat| columns.iter().any(|c| c == cat))
        .collect()
}

/// Chart series of one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSeries {
    pub label: String,
    /// Category and its value; non-numeric cells are `None`
    pub values: Vec<(String, Option<f64>)>,
    /// Sum of the numeric values
    pub total: f64,
}

/// Per-product values of the chosen impact categories plus a total
#[must_use]
pub fn impact_chart(products: &[ComparedProduct], categories: &[&str]) -> Vec<ImpactSeries> {
    products
        .iter()
        .map(|product| {
            let values: Vec<(String, Option<f64>)> = categories
                .iter()
                .map(|cat| ((*cat).to_string(), product.get(cat).and_then(CellValue::as_f64)))
                .collect();
            let total = values.iter().filter_map(|(_, v)| *v).sum();
            ImpactSeries {
                label: product.label().to_string(),
                values,
                total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<String> {
        ["Type", "Series", "DN", "A1", "A2", "A3", "D"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn row(series: &str, dn: f64, a1: CellValue) -> Vec<CellValue> {
        vec![
            CellValue::from("Single"),
            CellValue::from(series),
            CellValue::Number(dn),
            a1,
            CellValue::Number(2.0),
            CellValue::from("n/a"),
            CellValue::Number(-1.0),
        ]
    }

    fn catalog(name: &str, rows: Vec<Vec<CellValue>>) -> ProductCatalog {
        ProductCatalog::new(name, vec![CatalogGroup::new("Series 1", columns(), rows)])
    }

    fn left() -> ProductCatalog {
        catalog(
            "single",
            vec![row("Series 1", 100.0, 10.0.into()), row("Series 1", 150.0, 12.0.into())],
        )
    }

    fn right() -> ProductCatalog {
        catalog(
            "single recase",
            vec![row("Series 1", 100.0, 8.0.into()), row("Series 1", 200.0, 9.0.into())],
        )
    }

    #[test]
    fn compare_labels_recase_products() {
        let products = compare_products(
            (&left(), PipeKind::Single),
            (&right(), PipeKind::SingleRecase),
            "Series 1",
            "100",
        )
        .unwrap();
        let labels: Vec<_> = products.iter().map(ComparedProduct::label).collect();
        assert_eq!(labels, vec!["Series 1 - DN100", "Series 1 - DN100 (Recase)"]);
        assert_eq!(products[1].source(), ProductSource::Recase);
    }

    #[test]
    fn compare_without_match_fails() {
        let result = compare_products(
            (&left(), PipeKind::Single),
            (&right(), PipeKind::SingleRecase),
            "Series 1",
            "150",
        );
        let err = result.unwrap_err();
        assert!(matches!(err, DomainError::NoMatchingProducts));
        assert_eq!(err.to_string(), "No matching products found for the selected criteria");
    }

    #[test]
    fn common_series_and_dimensions() {
        assert_eq!(common_series(&left(), &right()), vec!["Series 1"]);
        assert_eq!(common_dimensions(&left(), &right(), "Series 1"), vec!["100"]);
        assert!(common_dimensions(&left(), &right(), "Series 9").is_empty());
    }

    #[test]
    fn chart_skips_non_numeric_values_in_total() {
        let products = catalog_products(&left(), PipeKind::Single);
        let cats = available_categories(products[0].columns());
        assert_eq!(cats, vec!["A1", "A2", "A3", "D"]);

        let chart = impact_chart(&products[..1], &cats);
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].values[2], ("A3".to_string(), None));
        assert!((chart[0].total - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn filter_by_column_value() {
        let products = catalog_products(&left(), PipeKind::Single);
        let filtered = filter_products(&products, "DN", "150");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label(), "Series 1 - DN150");
    }
}
