use serde::Deserialize;

use crate::types::address::Coordinates;

/// Query-string coordinates where either half may be missing. Converts to a
/// usable pair only when both are present.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct PartialCoords {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl From<PartialCoords> for Option<Coordinates> {
    fn from(value: PartialCoords) -> Self {
        match (value.lat, value.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
            _ => None,
        }
    }
}
