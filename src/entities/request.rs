use serde::{Deserialize, Serialize};

use crate::entities::{Location, TravelMode};
use crate::error::Error;
use crate::scheme::{NavigatorUri, SchemeRequestBuilder};

/// A trip described as data, e.g. loaded from a JSON file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Location>,
    #[serde(default)]
    pub stops: Vec<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimize: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<Callback>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Callback {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl TripRequest {
    #[tracing::instrument(skip_all)]
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let request: TripRequest = serde_json::from_str(json)?;

        tracing::debug!(stops = request.stops.len(), "parsed trip request");

        Ok(request)
    }

    /// Known travel modes are written with their canonical label, so
    /// `"driving-time"` in a trip file becomes `Driving Time` on the wire.
    pub fn into_builder(self) -> SchemeRequestBuilder {
        let mut builder = SchemeRequestBuilder::new();

        if let Some(start) = self.start {
            builder = builder.set_start(start);
        }

        for stop in self.stops {
            builder = builder.add_stop(stop);
        }

        if let Some(optimize) = self.optimize {
            builder = builder.set_optimize(optimize);
        }

        if let Some(travel_mode) = self.travel_mode {
            builder = builder.set_travel_mode(TravelMode::from(travel_mode));
        }

        if let Some(navigate) = self.navigate {
            builder = builder.set_navigate(navigate);
        }

        if let Some(callback) = self.callback {
            builder = builder.set_callback_uri(callback.uri);
            if let Some(prompt) = callback.prompt {
                builder = builder.set_callback_prompt(prompt);
            }
        }

        builder
    }

    pub fn to_uri(self) -> Result<NavigatorUri, Error> {
        self.into_builder().try_build()
    }
}

#[test]
fn trip_request_from_json_test() {
    let request = TripRequest::from_json(
        r#"{
            "start": {"latitude": 43.633332, "longitude": -70.259971, "name": "My house"},
            "stops": [{"latitude": 43.681959, "longitude": -70.092359, "name": "Jewell Island"}],
            "travel_mode": "driving time",
            "callback": {"uri": "my-cool-app://", "prompt": "My Cool App"}
        }"#,
    )
    .unwrap();

    assert_eq!(request.stops.len(), 1);
    assert_eq!(request.optimize, None);

    let uri = request.to_uri().unwrap();
    assert_eq!(
        uri.as_str(),
        "arcgis-navigator://?start=43.633332%2C-70.259971&startname=My+house\
         &stop=43.681959%2C-70.092359&stopname=Jewell+Island&travelmode=Driving+Time\
         &callback=my-cool-app%3A%2F%2F&callbackprompt=My+Cool+App"
    );
}

#[test]
fn trip_request_without_stops_test() {
    use crate::error::missing_stop_error;

    let request = TripRequest::from_json(r#"{"start": {"address": "Portland, ME"}}"#).unwrap();
    assert_eq!(request.to_uri(), Err(missing_stop_error()));
}

#[test]
fn trip_request_invalid_json_test() {
    let err = TripRequest::from_json(r#"{"stops": 3}"#).unwrap_err();
    assert_eq!(err.code, 3);
}

#[test]
fn trip_request_custom_travel_mode_test() {
    let request = TripRequest {
        stops: vec![Location::address("Portland, ME")],
        travel_mode: Some("Bicycle Time".into()),
        ..Default::default()
    };

    let uri = request.to_uri().unwrap();
    assert!(uri.as_str().ends_with("&travelmode=Bicycle+Time"));
}
