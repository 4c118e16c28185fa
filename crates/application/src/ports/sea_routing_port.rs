//! Sea routing port
//!
//! The default adapter draws a straight great-circle line and never fails;
//! the port exists so a real maritime router can replace it.

use domain::{RouteLeg, value_objects::GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for sea legs between two ports
#[cfg_attr(test, automock)]
pub trait SeaRoutingPort: Send + Sync {
    /// Sea leg between two port coordinates
    fn sea_route(&self, from: &GeoLocation, to: &GeoLocation) -> Result<RouteLeg, ApplicationError>;
}
