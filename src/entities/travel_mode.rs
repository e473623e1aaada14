use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Travel modes published with the default Esri transportation networks.
/// Networks may define others, which are carried as `Custom`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TravelMode {
    DrivingTime,
    DrivingDistance,
    TruckingTime,
    TruckingDistance,
    WalkingTime,
    WalkingDistance,
    RuralDrivingTime,
    RuralDrivingDistance,
    Custom(String),
}

impl TravelMode {
    pub const KNOWN: [TravelMode; 8] = [
        TravelMode::DrivingTime,
        TravelMode::DrivingDistance,
        TravelMode::TruckingTime,
        TravelMode::TruckingDistance,
        TravelMode::WalkingTime,
        TravelMode::WalkingDistance,
        TravelMode::RuralDrivingTime,
        TravelMode::RuralDrivingDistance,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::DrivingTime => "Driving Time",
            Self::DrivingDistance => "Driving Distance",
            Self::TruckingTime => "Trucking Time",
            Self::TruckingDistance => "Trucking Distance",
            Self::WalkingTime => "Walking Time",
            Self::WalkingDistance => "Walking Distance",
            Self::RuralDrivingTime => "Rural Driving Time",
            Self::RuralDrivingDistance => "Rural Driving Distance",
            Self::Custom(name) => name.as_str(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    // "Driving Time", "driving-time" and "DRIVINGTIME" all share one key
    fn key(name: &str) -> String {
        name.chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect()
    }
}

impl FromStr for TravelMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = Self::key(s);

        let known = Self::KNOWN
            .into_iter()
            .find(|mode| Self::key(mode.as_str()) == key);

        Ok(known.unwrap_or_else(|| Self::Custom(s.to_string())))
    }
}

impl From<&str> for TravelMode {
    fn from(name: &str) -> Self {
        match name.parse() {
            Ok(mode) => mode,
            Err(never) => match never {},
        }
    }
}

impl From<String> for TravelMode {
    fn from(name: String) -> Self {
        TravelMode::from(name.as_str())
    }
}

impl From<TravelMode> for String {
    fn from(mode: TravelMode) -> Self {
        match mode {
            TravelMode::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[test]
fn travel_mode_parse_test() {
    assert_eq!(TravelMode::from("Driving Time"), TravelMode::DrivingTime);
    assert_eq!(TravelMode::from("driving time"), TravelMode::DrivingTime);
    assert_eq!(TravelMode::from("driving-time"), TravelMode::DrivingTime);
    assert_eq!(TravelMode::from("WALKINGDISTANCE"), TravelMode::WalkingDistance);
    assert_eq!(TravelMode::from("rural_driving_time"), TravelMode::RuralDrivingTime);
    assert_eq!(TravelMode::from("trucking-distance"), TravelMode::TruckingDistance);
}

#[test]
fn travel_mode_custom_test() {
    let mode = TravelMode::from("Bicycle Time");
    assert!(mode.is_custom());
    assert_eq!(mode.as_str(), "Bicycle Time");

    let mode = TravelMode::from("   ");
    assert!(mode.is_custom());
}

#[test]
fn travel_mode_labels_test() {
    for mode in TravelMode::KNOWN {
        assert!(!mode.is_custom());
        assert_eq!(TravelMode::from(mode.to_string()), mode);
    }

    let label: String = TravelMode::TruckingTime.into();
    assert_eq!(label, "Trucking Time");
}

#[test]
fn travel_mode_serde_test() {
    let mode: TravelMode = serde_json::from_str("\"walking time\"").unwrap();
    assert_eq!(mode, TravelMode::WalkingTime);
    assert_eq!(
        serde_json::to_string(&TravelMode::WalkingTime).unwrap(),
        "\"Walking Time\""
    );
}
