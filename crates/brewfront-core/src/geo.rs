//! Great-circle distance on a spherical Earth.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points, in kilometers.
///
/// Spherical law of cosines:
/// `R * acos(cos(lat1) * cos(lat2) * cos(lon2 - lon1) + sin(lat1) * sin(lat2))`
/// with all angles in radians and R = 6371 km.
///
/// Inputs are assumed to be valid coordinates; callers validate ranges.
/// The acos argument is clamped to [-1, 1]; rounding can push it just
/// outside the domain for identical or antipodal points, which would
/// otherwise yield NaN instead of 0 or half the circumference.
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let cos_angle = lat1.cos() * lat2.cos() * delta_lon.cos() + lat1.sin() * lat2.sin();
    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}
