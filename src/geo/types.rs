//! Travel modes and provider traits

use crate::error::Result;
use std::fmt;
use std::time::Duration;

/// Method of transportation for a commute query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Drive,
    Walk,
    Bike,
    Transit,
}

impl TravelMode {
    /// All modes, in the order results are reported
    pub const ALL: [TravelMode; 4] = [
        TravelMode::Drive,
        TravelMode::Walk,
        TravelMode::Bike,
        TravelMode::Transit,
    ];

    /// Mode name on the provider's wire format
    pub fn api_mode(self) -> &'static str {
        match self {
            TravelMode::Drive => "driving",
            TravelMode::Walk => "walking",
            TravelMode::Bike => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TravelMode::Drive => "drive",
            TravelMode::Walk => "walk",
            TravelMode::Bike => "bike",
            TravelMode::Transit => "transit",
        };
        write!(f, "{name}")
    }
}

/// Computes the travel duration between two location strings
pub trait Durationer {
    fn duration(&self, from: &str, to: &str, mode: TravelMode) -> Result<Duration>;
}

/// Reports the device's current coordinates
pub trait Locator {
    fn current_location(&self) -> Result<(f64, f64)>;
}

/// Render a duration as a short human-readable string, minute precision
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.as_secs() / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
