//! Value Objects - Immutable, identity-less domain primitives

mod cell_value;
mod facility;
mod geo_location;
mod pipe_kind;
mod vehicle_class;

pub use cell_value::{CellValue, compare_keys};
pub use facility::Facility;
pub use geo_location::{EARTH_RADIUS_KM, GeoLocation, InvalidCoordinates, distance_km};
pub use pipe_kind::PipeKind;
pub use vehicle_class::{MARITIME_CO2_KG_PER_TONNE_KM, VehicleClass};
