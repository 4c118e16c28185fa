//! Project details and CO2 budget tracking

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Descriptive project data entered alongside the bill of materials
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub company: String,
    pub name: String,
    pub location: String,
    co2_budget_kg: f64,
}

impl ProjectDetails {
    #[must_use]
    pub fn new(
        company: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            name: name.into(),
            location: location.into(),
            co2_budget_kg: 0.0,
        }
    }

    /// CO2 budget in kg; 0 means no budget is set
    #[must_use]
    pub const fn co2_budget_kg(&self) -> f64 {
        self.co2_budget_kg
    }

    /// Set the CO2 budget
    ///
    /// # Errors
    ///
    /// Returns a validation error for negative or non-finite budgets.
    pub fn set_co2_budget_kg(&mut self, budget_kg: f64) -> Result<(), DomainError> {
        if !budget_kg.is_finite() || budget_kg < 0.0 {
            return Err(DomainError::validation(format!(
                "CO2 budget must be a non-negative number, got {budget_kg}"
            )));
        }
        self.co2_budget_kg = budget_kg;
        Ok(())
    }

    /// Budget comparison for a project total, `None` when no budget is set
    #[must_use]
    pub fn budget_status(&self, total_co2_kg: f64) -> Option<BudgetStatus> {
        (self.co2_budget_kg > 0.0).then(|| BudgetStatus::new(self.co2_budget_kg, total_co2_kg))
    }
}

/// Project total compared against its budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub budget_kg: f64,
    pub total_kg: f64,
    /// `budget - total`; negative when over budget
    pub remaining_kg: f64,
    /// Share of the budget used, capped at 1.0
    pub usage_fraction: f64,
}

impl BudgetStatus {
    fn new(budget_kg: f64, total_kg: f64) -> Self {
        Self {
            budget_kg,
            total_kg,
            remaining_kg: budget_kg - total_kg,
            usage_fraction: (total_kg / budget_kg).min(1.0),
        }
    }

    #[must_use]
    pub fn is_over_budget(&self) -> bool {
        self.remaining_kg < 0.0
    }
}
