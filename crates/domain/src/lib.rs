//! Domain layer for the EPD dashboards
//!
//! Contains the emissions arithmetic, the product catalog lookup, the bill of
//! materials and the value objects they share. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
