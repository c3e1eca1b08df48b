//! Travel modes and the duration/geocoding provider seam

pub mod router;
pub mod types;

pub use router::MapsRouter;
pub use types::{Durationer, Locator, TravelMode, format_duration};
