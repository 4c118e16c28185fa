//! Project calculator
//!
//! Per-session accumulator behind the bill-of-materials view: looks up unit
//! emission factors in the project catalog, keeps the line items and
//! compares their total against the project's CO2 budget.

use std::{fmt, sync::Arc};

use domain::{
    BillOfMaterials, BudgetStatus, ProductCatalog, ProductLineItem, ProjectDetails,
};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;

/// Bill of materials bound to a catalog and project details
pub struct ProjectCalculator {
    catalog: Arc<ProductCatalog>,
    details: ProjectDetails,
    bill: BillOfMaterials,
}

impl fmt::Debug for ProjectCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectCalculator")
            .field("catalog", &self.catalog.name())
            .field("items", &self.bill.len())
            .finish_non_exhaustive()
    }
}

impl ProjectCalculator {
    /// Start an empty project over a loaded catalog
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self {
            catalog,
            details: ProjectDetails::default(),
            bill: BillOfMaterials::new(),
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub const fn details(&self) -> &ProjectDetails {
        &self.details
    }

    /// Replace company, name and location; the budget is kept
    pub fn set_details(&mut self, company: &str, name: &str, location: &str) {
        self.details.company = company.trim().to_string();
        self.details.name = name.trim().to_string();
        self.details.location = location.trim().to_string();
    }

    /// Set the CO2 budget in kg; 0 disables the comparison
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative budget.
    pub fn set_budget(&mut self, budget_kg: f64) -> Result<(), ApplicationError> {
        self.details.set_co2_budget_kg(budget_kg)?;
        Ok(())
    }

    /// Suggested length for the add form: the catalog default or 1.0 m
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the product is not in the catalog.
    pub fn default_length_m(
        &self,
        product_type: &str,
        series: &str,
        dn: &str,
    ) -> Result<f64, ApplicationError> {
        Ok(self
            .catalog
            .lookup(product_type, series, dn)?
            .length_or_fallback())
    }

    /// Look up the product and add a line item at the front
    ///
    /// Nothing is added when the lookup or the validation fails.
    #[instrument(skip(self))]
    pub fn add_product(
        &mut self,
        product_type: &str,
        series: &str,
        dn: &str,
        length_m: f64,
        quantity: u32,
    ) -> Result<&ProductLineItem, ApplicationError> {
        let found = self.catalog.lookup(product_type, series, dn)?;
        let item = ProductLineItem::new(
            product_type,
            series,
            dn,
            length_m,
            quantity,
            found.unit_factor_kg_per_m,
        )?;
        info!(
            total_co2_kg = item.total_co2_kg(),
            unit_factor = found.unit_factor_kg_per_m,
            "Product added to project"
        );
        self.bill.add(item);
        Ok(&self.bill.items()[0])
    }

    /// Remove the line item at `index` (0 is the newest)
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` when there is no such item.
    pub fn remove(&mut self, index: usize) -> Result<ProductLineItem, ApplicationError> {
        let removed = self.bill.remove(index)?;
        debug!(index, "Product removed from project");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.bill.clear();
        debug!("Project cleared");
    }

    pub fn items(&self) -> &[ProductLineItem] {
        self.bill.items()
    }

    pub fn total_co2_kg(&self) -> f64 {
        self.bill.total_co2_kg()
    }

    /// `budget - total`; negative when over budget
    pub fn budget_remaining(&self) -> f64 {
        self.bill.budget_remaining(self.details.co2_budget_kg())
    }

    /// Budget comparison, `None` while no budget is set
    pub fn budget_status(&self) -> Option<BudgetStatus> {
        self.details.budget_status(self.total_co2_kg())
    }
}
