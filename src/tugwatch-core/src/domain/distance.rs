use super::Location;

/// Mean earth radius in kilometers (IUGG).
pub static MEAN_EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance in kilometers between two points given in degrees,
/// using the haversine formula.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push `a` slightly outside [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);

    2.0 * MEAN_EARTH_RADIUS_KM * a.sqrt().asin()
}

impl Location {
    pub fn distance_km(&self, other: &Location) -> f64 {
        haversine_km(self.lat, self.long, other.lat, other.long)
    }
}
