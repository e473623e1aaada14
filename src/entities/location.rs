use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.latitude, coordinates.longitude)
    }
}

impl From<Point<f64>> for Coordinates {
    fn from(point: Point<f64>) -> Self {
        Coordinates::new(point.y(), point.x())
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.longitude, coordinates.latitude)
    }
}

/// A start or stop handed to the navigator, either a coordinate pair or a
/// free-text address that the navigator geocodes itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Coordinates {
        latitude: f64,
        longitude: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Address {
        address: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl Location {
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180]; this is
    /// the caller's contract and is only checked in debug builds.
    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        debug_assert!(
            Coordinates::new(latitude, longitude).in_range(),
            "coordinates out of range: {},{}",
            latitude,
            longitude
        );

        Self::Coordinates {
            latitude,
            longitude,
            name: None,
        }
    }

    pub fn address(address: impl Into<String>) -> Self {
        Self::Address {
            address: address.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, new_name: impl Into<String>) -> Self {
        match &mut self {
            Self::Coordinates { name, .. } | Self::Address { name, .. } => {
                *name = Some(new_name.into())
            }
        };

        self
    }

    /// The unencoded parameter value: `"<lat>,<lon>"` or the address text.
    pub fn value_text(&self) -> String {
        match self {
            Self::Coordinates {
                latitude,
                longitude,
                name: _,
            } => Coordinates::new(*latitude, *longitude).into(),
            Self::Address { address, name: _ } => address.clone(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Coordinates { name, .. } | Self::Address { name, .. } => name.as_deref(),
        }
    }

    pub fn as_coordinates(&self) -> Option<Coordinates> {
        match self {
            Self::Coordinates {
                latitude,
                longitude,
                name: _,
            } => Some(Coordinates::new(*latitude, *longitude)),
            Self::Address { .. } => None,
        }
    }
}

impl From<Coordinates> for Location {
    fn from(coordinates: Coordinates) -> Self {
        Location::coordinates(coordinates.latitude, coordinates.longitude)
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Location::coordinates(latitude, longitude)
    }
}

impl From<Point<f64>> for Location {
    fn from(point: Point<f64>) -> Self {
        Coordinates::from(point).into()
    }
}

impl From<&str> for Location {
    fn from(address: &str) -> Self {
        Location::address(address)
    }
}

impl From<String> for Location {
    fn from(address: String) -> Self {
        Location::address(address)
    }
}

#[test]
fn coordinate_value_text_test() {
    let location = Location::coordinates(47.6, -122.3);
    assert_eq!(location.value_text(), "47.6,-122.3");
    assert_eq!(location.name(), None);

    // whole and tiny values stay in plain decimal notation
    let location = Location::coordinates(0.00001, -122.0);
    assert_eq!(location.value_text(), "0.00001,-122");
}

#[test]
fn address_value_text_test() {
    let location = Location::address("380 New York St, Redlands, CA").with_name("Esri");
    assert_eq!(location.value_text(), "380 New York St, Redlands, CA");
    assert_eq!(location.name(), Some("Esri"));
    assert_eq!(location.as_coordinates(), None);
}

#[test]
fn with_name_overwrites_test() {
    let location = Location::coordinates(1.0, 2.0)
        .with_name("first")
        .with_name("second");
    assert_eq!(location.name(), Some("second"));
}

#[test]
fn point_conversion_test() {
    let point = Point::new(-70.092359, 43.681959);
    let location: Location = point.into();
    assert_eq!(location.value_text(), "43.681959,-70.092359");

    let back: Point<f64> = location.as_coordinates().unwrap().into();
    assert_eq!(back, point);
}

#[test]
fn location_serde_test() {
    use serde_json::json;

    let stop: Location =
        serde_json::from_value(json!({"latitude": 43.5, "longitude": -70.2, "name": "Home"}))
            .unwrap();
    assert_eq!(stop, Location::coordinates(43.5, -70.2).with_name("Home"));

    let stop: Location = serde_json::from_value(json!({"address": "100 Commercial St"})).unwrap();
    assert_eq!(stop, Location::address("100 Commercial St"));

    let value = serde_json::to_value(Location::address("100 Commercial St")).unwrap();
    assert_eq!(value, json!({"address": "100 Commercial St"}));
}

#[test]
fn coordinates_range_test() {
    assert!(Coordinates::new(90.0, -180.0).in_range());
    assert!(!Coordinates::new(90.5, 0.0).in_range());
    assert!(!Coordinates::new(0.0, 181.0).in_range());
}
