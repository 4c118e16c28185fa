//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Position outside the bounds of an ordered collection
    #[error("Index {index} is out of range for {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A catalog cell that must hold a number is empty or not numeric
    #[error("Invalid value in column '{column}' for {product}")]
    InvalidCatalogValue { column: String, product: String },

    /// A comparison side has no row for the chosen series and DN
    #[error("No matching products found for the selected criteria")]
    NoMatchingProducts,
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_creates_correct_error() {
        let err = DomainError::not_found("Product", "Single / series 1");
        match err {
            DomainError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Product");
                assert_eq!(id, "Single / series 1");
            },
            _ => unreachable!("Expected NotFound error"),
        }
    }

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("Facility", "Nowhere AB");
        assert_eq!(err.to_string(), "Facility not found: Nowhere AB");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::validation("length must be positive");
        assert_eq!(err.to_string(), "Validation failed: length must be positive");
    }

    #[test]
    fn index_out_of_range_message() {
        let err = DomainError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Index 4 is out of range for 2 item(s)");
    }

    #[test]
    fn invalid_catalog_value_message() {
        let err = DomainError::InvalidCatalogValue {
            column: "A1-A3 (kg CO2e)".to_string(),
            product: "Single DN100".to_string(),
        };
        assert!(err.to_string().contains("A1-A3 (kg CO2e)"));
        assert!(err.to_string().contains("Single DN100"));
    }
}
