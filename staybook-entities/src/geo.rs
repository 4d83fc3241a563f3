use thiserror::Error;

pub type LatCoord = f64;
pub type LngCoord = f64;

pub const LAT_DEG_MIN: LatCoord = -90.0;
pub const LAT_DEG_MAX: LatCoord = 90.0;
pub const LNG_DEG_MIN: LngCoord = -180.0;
pub const LNG_DEG_MAX: LngCoord = 180.0;

pub fn is_valid_lat_deg(lat: LatCoord) -> bool {
    (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat)
}

pub fn is_valid_lng_deg(lng: LngCoord) -> bool {
    (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng)
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoordRangeError {
    #[error("Latitude out of range")]
    Latitude,
    #[error("Longitude out of range")]
    Longitude,
}

/// Position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat: LatCoord, lng: LngCoord) -> Result<Self, CoordRangeError> {
        if !is_valid_lat_deg(lat) {
            return Err(CoordRangeError::Latitude);
        }
        if !is_valid_lng_deg(lng) {
            return Err(CoordRangeError::Longitude);
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(&self) -> LatCoord {
        self.lat
    }

    pub const fn lng(&self) -> LngCoord {
        self.lng
    }
}
