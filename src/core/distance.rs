/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Search radius used when a profile does not declare one
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 10.0;

/// Distance assigned to two different places that cannot both be resolved
pub const UNKNOWN_LOCATION_DISTANCE_KM: f64 = 3000.0;

/// A point on the globe in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

const fn coords(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates { latitude, longitude }
}

/// Place names the scorer can place on a map
const KNOWN_CITIES: &[(&str, Coordinates)] = &[
    ("New York", coords(40.7128, -74.0060)),
    ("San Francisco", coords(37.7749, -122.4194)),
    ("Boston", coords(42.3601, -71.0589)),
    ("Chicago", coords(41.8781, -87.6298)),
    ("Los Angeles", coords(34.0522, -118.2437)),
    ("Seattle", coords(47.6062, -122.3321)),
    ("Miami", coords(25.7617, -80.1918)),
    ("Washington", coords(38.9072, -77.0369)),
    ("Philadelphia", coords(39.9526, -75.1652)),
    ("Atlanta", coords(33.7490, -84.3880)),
    ("Houston", coords(29.7604, -95.3698)),
    ("Austin", coords(30.2672, -97.7431)),
    ("Denver", coords(39.7392, -104.9903)),
    ("London", coords(51.5074, -0.1278)),
    ("Paris", coords(48.8566, 2.3522)),
];

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Look up a place name in the city table (trimmed, ASCII case-insensitive)
pub fn resolve_city(name: &str) -> Option<Coordinates> {
    let needle = name.trim();
    KNOWN_CITIES
        .iter()
        .find(|(city, _)| city.eq_ignore_ascii_case(needle))
        .map(|(_, coordinates)| *coordinates)
}

/// Distance in km between two free-text locations
///
/// Both names resolvable: great-circle distance. Otherwise identical strings
/// are 0 km apart and anything else is [`UNKNOWN_LOCATION_DISTANCE_KM`].
pub fn location_distance(a: &str, b: &str) -> f64 {
    match (resolve_city(a), resolve_city(b)) {
        (Some(from), Some(to)) => {
            haversine_distance(from.latitude, from.longitude, to.latitude, to.longitude)
        }
        _ if a == b => 0.0,
        _ => UNKNOWN_LOCATION_DISTANCE_KM,
    }
}
