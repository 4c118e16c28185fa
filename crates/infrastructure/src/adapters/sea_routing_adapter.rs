//! Sea routing adapter - straight great-circle line between two ports

use application::{error::ApplicationError, ports::SeaRoutingPort};
use domain::{RouteLeg, value_objects::GeoLocation};
use tracing::debug;

/// Sea router drawing the direct line between ports
///
/// Distance is the haversine distance; the adapter never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircleSeaRouter;

impl GreatCircleSeaRouter {
    pub const fn new() -> Self {
        Self
    }
}

impl SeaRoutingPort for GreatCircleSeaRouter {
    fn sea_route(&self, from: &GeoLocation, to: &GeoLocation) -> Result<RouteLeg, ApplicationError> {
        let leg = RouteLeg::sea(*from, *to);
        debug!(distance_km = leg.distance_km(), "Sea leg drawn");
        Ok(leg)
    }
}

#[cfg(test)]
mod tests {
    use domain::LegMode;

    use super::*;

    #[test]
    fn sea_leg_is_two_point_great_circle() {
        let gothenburg = GeoLocation::new_unchecked(57.7, 11.97);
        let aarhus = GeoLocation::new_unchecked(56.15, 10.21);

        let leg = GreatCircleSeaRouter::new()
            .sea_route(&gothenburg, &aarhus)
            .unwrap();

        assert_eq!(leg.mode(), LegMode::Sea);
        assert_eq!(leg.polyline(), &[gothenburg, aarhus]);
        assert!((leg.distance_km() - gothenburg.distance_km(&aarhus)).abs() < 1e-9);
    }

    #[test]
    fn same_port_is_zero_distance() {
        let port = GeoLocation::new_unchecked(53.55, 9.99);
        let leg = GreatCircleSeaRouter.sea_route(&port, &port).unwrap();
        assert!(leg.distance_km().abs() < f64::EPSILON);
    }
}
