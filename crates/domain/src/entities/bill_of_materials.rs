//! Bill of materials - project line items with a running CO2 total

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A product added to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLineItem {
    product_type: String,
    series: String,
    dn: String,
    length_m: f64,
    quantity: u32,
    total_co2_kg: f64,
}

impl ProductLineItem {
    /// Build a line item; the total is `unit_factor x length x quantity`
    /// rounded to whole kilograms, ties to even (2.5 kg -> 2 kg).
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive length, a zero
    /// quantity or a non-finite unit factor.
    pub fn new(
        product_type: impl Into<String>,
        series: impl Into<String>,
        dn: impl Into<String>,
        length_m: f64,
        quantity: u32,
        unit_factor_kg_per_m: f64,
    ) -> Result<Self, DomainError> {
        if !length_m.is_finite() || length_m <= 0.0 {
            return Err(DomainError::validation(format!(
                "length must be greater than 0 m, got {length_m}"
            )));
        }
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if !unit_factor_kg_per_m.is_finite() {
            return Err(DomainError::validation("emission factor must be a finite number"));
        }

        let total_co2_kg = (unit_factor_kg_per_m * length_m * f64::from(quantity)).round_ties_even();

        Ok(Self {
            product_type: product_type.into(),
            series: series.into(),
            dn: dn.into(),
            length_m,
            quantity,
            total_co2_kg,
        })
    }

    #[must_use]
    pub fn product_type(&self) -> &str {
        &self.product_type
    }

    #[must_use]
    pub fn series(&self) -> &str {
        &self.series
    }

    #[must_use]
    pub fn dn(&self) -> &str {
        &self.dn
    }

    #[must_use]
    pub const fn length_m(&self) -> f64 {
        self.length_m
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// A1-A3 emissions of the whole line, in whole kg
    #[must_use]
    pub const fn total_co2_kg(&self) -> f64 {
        self.total_co2_kg
    }

    /// One-line description, e.g. `Single | Series 1 | DN100 | 12 m x 3 | 156 kg CO2eq.`
    #[must_use]
    pub fn format_line(&self) -> String {
        format!(
            "{} | Series {} | DN{} | {} m x {} | {:.0} kg CO2eq.",
            self.product_type, self.series, self.dn, self.length_m, self.quantity, self.total_co2_kg
        )
    }
}

/// Ordered line items, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    items: Vec<ProductLineItem>,
}

impl BillOfMaterials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item at the front
    pub fn add(&mut self, item: ProductLineItem) {
        self.items.insert(0, item);
    }

    /// Remove and return the item at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` when `index` is past the end.
    pub fn remove(&mut self, index: usize) -> Result<ProductLineItem, DomainError> {
        if index >= self.items.len() {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn items(&self) -> &[ProductLineItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line totals; 0 when empty
    #[must_use]
    pub fn total_co2_kg(&self) -> f64 {
        self.items.iter().map(ProductLineItem::total_co2_kg).sum()
    }

    /// `budget - total`; negative when over budget
    #[must_use]
    pub fn budget_remaining(&self, budget_kg: f64) -> f64 {
        budget_kg - self.total_co2_kg()
    }
}
