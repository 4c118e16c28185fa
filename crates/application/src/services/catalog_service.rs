//! Catalog service
//!
//! Loads EPD catalogs through the [`CatalogPort`] and serves the browsing
//! and comparison use cases on top of them.

use std::{fmt, sync::Arc};

use domain::{
    ComparedProduct, IMPACT_CATEGORIES, ImpactSeries, ProductCatalog, catalog_products,
    common_dimensions, common_series, compare_products, impact_chart,
    value_objects::PipeKind,
};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{CatalogPort, CatalogSource},
    services::ProjectCalculator,
};

/// Outcome of a side-by-side comparison
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub products: Vec<ComparedProduct>,
    /// Impact categories present in the compared rows
    pub categories: Vec<&'static str>,
    pub chart: Vec<ImpactSeries>,
}

/// Catalog browsing and product comparison
pub struct CatalogService {
    catalogs: Arc<dyn CatalogPort>,
}

impl fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(catalogs: Arc<dyn CatalogPort>) -> Self {
        Self { catalogs }
    }

    /// Load one catalog
    #[instrument(skip(self))]
    pub async fn load(&self, source: CatalogSource) -> Result<ProductCatalog, ApplicationError> {
        let catalog = self.catalogs.load(source).await?;
        debug!(groups = catalog.groups().len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Fresh project calculator over the project catalog
    pub async fn project_calculator(&self) -> Result<ProjectCalculator, ApplicationError> {
        let catalog = self.load(CatalogSource::Project).await?;
        Ok(ProjectCalculator::new(Arc::new(catalog)))
    }

    /// Every row of a pipe catalog, labelled for display
    pub async fn products(&self, kind: PipeKind) -> Result<Vec<ComparedProduct>, ApplicationError> {
        let catalog = self.load(CatalogSource::Pipe(kind)).await?;
        Ok(catalog_products(&catalog, kind))
    }

    /// Series offered by both pipe kinds
    pub async fn common_series(
        &self,
        left: PipeKind,
        right: PipeKind,
    ) -> Result<Vec<String>, ApplicationError> {
        let (left, right) = self.load_pair(left, right).await?;
        Ok(common_series(&left, &right))
    }

    /// DN values of a series offered by both pipe kinds, sorted
    pub async fn common_dimensions(
        &self,
        left: PipeKind,
        right: PipeKind,
        series: &str,
    ) -> Result<Vec<String>, ApplicationError> {
        let (left, right) = self.load_pair(left, right).await?;
        Ok(common_dimensions(&left, &right, series))
    }

    /// Compare the rows of two pipe kinds for one series and DN
    ///
    /// # Errors
    ///
    /// Returns `NoMatchingProducts` when either side has no such row.
    #[instrument(skip(self))]
    pub async fn compare(
        &self,
        left: PipeKind,
        right: PipeKind,
        series: &str,
        dn: &str,
    ) -> Result<Comparison, ApplicationError> {
        let (left_catalog, right_catalog) = self.load_pair(left, right).await?;
        let products = compare_products(
            (&left_catalog, left),
            (&right_catalog, right),
            series,
            dn,
        )?;

        let categories: Vec<&'static str> = IMPACT_CATEGORIES
            .into_iter()
            .filter(|cat| products.iter().any(|p| p.get(cat).is_some()))
            .collect();

        let chart = impact_chart(&products, &categories);
        info!(rows = products.len(), categories = categories.len(), "Products compared");
        Ok(Comparison {
            products,
            categories,
            chart,
        })
    }

    async fn load_pair(
        &self,
        left: PipeKind,
        right: PipeKind,
    ) -> Result<(ProductCatalog, ProductCatalog), ApplicationError> {
        let left = self.load(CatalogSource::Pipe(left)).await?;
        let right = self.load(CatalogSource::Pipe(right)).await?;
        Ok((left, right))
    }
}
