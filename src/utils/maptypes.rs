use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both values must be finite; `None` otherwise.
    pub fn try_new(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude.is_finite() && longitude.is_finite() {
            Some(Self::new(latitude, longitude))
        } else {
            None
        }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(pos: Coordinates) -> Self {
        [pos.longitude, pos.latitude]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub description: String,
    pub coordinates: Coordinates,
}
