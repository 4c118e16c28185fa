//! Domain entities - Transport estimates, product catalogs and projects

mod bill_of_materials;
mod comparison;
mod product_catalog;
mod project;
mod route_leg;
mod transport_estimate;

pub use bill_of_materials::{BillOfMaterials, ProductLineItem};
pub use comparison::{
    ComparedProduct, IMPACT_CATEGORIES, ImpactSeries, ProductSource, available_categories,
    catalog_products, common_dimensions, common_series, compare_products, filter_products,
    impact_chart,
};
pub use product_catalog::{
    CatalogGroup, DEFAULT_EMISSION_FACTOR_COLUMN, DN_COLUMN, FALLBACK_LENGTH_M, ProductCatalog,
    ProductLookup, SERIES_COLUMN, TYPE_COLUMN,
};
pub use project::{BudgetStatus, ProjectDetails};
pub use route_leg::{LegMode, RouteLeg};
pub use transport_estimate::{
    EmissionFactors, LegEstimate, LegKind, TransportEstimate, Waypoints,
};
