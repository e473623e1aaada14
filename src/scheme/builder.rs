use super::{
    Encoding, NavigatorUri, CALLBACK_PARAM, CALLBACK_PROMPT_PARAM, NAVIGATE_PARAM,
    OPTIMIZE_PARAM, SCHEME, START_NAME_PARAM, START_PARAM, STOP_NAME_PARAM, STOP_PARAM,
    TRAVEL_MODE_PARAM,
};
use crate::entities::Location;
use crate::error::{missing_stop_error, Error};
use crate::external::ViewIntent;

/// Everything collected for one navigator request. Optional values stay
/// `None` until set and are left out of the URI entirely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestConfig {
    pub stops: Vec<Location>,
    pub start: Option<Location>,
    pub optimize: Option<bool>,
    pub travel_mode: Option<String>,
    pub navigate: Option<bool>,
    pub callback_uri: Option<String>,
    pub callback_prompt: Option<String>,
    pub encoding: Encoding,
}

/// Builds `arcgis-navigator://` links.
///
/// ```
/// use navlink::entities::{Location, TravelMode};
/// use navlink::scheme::SchemeRequestBuilder;
///
/// let uri = SchemeRequestBuilder::new()
///     .add_stop(Location::address("380 New York St, Redlands, CA").with_name("Esri"))
///     .set_travel_mode(TravelMode::DrivingTime)
///     .set_navigate(true)
///     .build();
///
/// assert_eq!(
///     uri.as_str(),
///     "arcgis-navigator://?stop=380+New+York+St%2C+Redlands%2C+CA&stopname=Esri\
///      &travelmode=Driving+Time&navigate=true"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemeRequestBuilder {
    config: RequestConfig,
}

impl SchemeRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Stops are visited in the order they are added.
    pub fn add_stop(mut self, stop: impl Into<Location>) -> Self {
        self.config.stops.push(stop.into());
        self
    }

    pub fn set_start(mut self, start: impl Into<Location>) -> Self {
        self.config.start = Some(start.into());
        self
    }

    /// Lets the navigator reorder the stops for the best route.
    pub fn set_optimize(mut self, optimize: bool) -> Self {
        self.config.optimize = Some(optimize);
        self
    }

    /// Accepts any name the map's network supports, see
    /// [`TravelMode`](crate::entities::TravelMode) for the default ones.
    pub fn set_travel_mode(mut self, travel_mode: impl Into<String>) -> Self {
        self.config.travel_mode = Some(travel_mode.into());
        self
    }

    pub fn set_navigate(mut self, navigate: bool) -> Self {
        self.config.navigate = Some(navigate);
        self
    }

    pub fn set_callback_uri(mut self, callback_uri: impl Into<String>) -> Self {
        self.config.callback_uri = Some(callback_uri.into());
        self
    }

    pub fn set_callback_prompt(mut self, callback_prompt: impl Into<String>) -> Self {
        self.config.callback_prompt = Some(callback_prompt.into());
        self
    }

    pub fn set_encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    /// # Panics
    ///
    /// Panics if no stop has been added. Use [`try_build`](Self::try_build)
    /// to get the error as a value instead.
    pub fn build(&self) -> NavigatorUri {
        match self.try_build() {
            Ok(uri) => uri,
            Err(err) => panic!("{}", err.message),
        }
    }

    #[tracing::instrument(level = "debug", skip(self), fields(stops = self.config.stops.len()))]
    pub fn try_build(&self) -> Result<NavigatorUri, Error> {
        let config = &self.config;

        if config.stops.is_empty() {
            return Err(missing_stop_error());
        }

        let mut query = Query::new(config.encoding);

        if let Some(start) = &config.start {
            query.location(START_PARAM, START_NAME_PARAM, start);
        }

        for stop in &config.stops {
            query.location(STOP_PARAM, STOP_NAME_PARAM, stop);
        }

        if let Some(optimize) = config.optimize {
            query.flag(OPTIMIZE_PARAM, optimize);
        }

        if let Some(travel_mode) = &config.travel_mode {
            let travel_mode = travel_mode.trim();
            if travel_mode.is_empty() {
                tracing::debug!("skipping blank travel mode");
            } else {
                query.text(TRAVEL_MODE_PARAM, travel_mode);
            }
        }

        if let Some(navigate) = config.navigate {
            query.flag(NAVIGATE_PARAM, navigate);
        }

        if let Some(callback_uri) = &config.callback_uri {
            query.text(CALLBACK_PARAM, callback_uri);
        }

        if let Some(callback_prompt) = &config.callback_prompt {
            query.text(CALLBACK_PROMPT_PARAM, callback_prompt);
        }

        let uri = query.finish();
        tracing::debug!(%uri, "built navigator uri");

        Ok(uri)
    }

    pub fn build_intent(&self) -> ViewIntent {
        self.build().into_intent()
    }

    pub fn try_build_intent(&self) -> Result<ViewIntent, Error> {
        Ok(self.try_build()?.into_intent())
    }
}

struct Query {
    encoding: Encoding,
    params: Vec<String>,
}

impl Query {
    fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            params: Vec::new(),
        }
    }

    fn text(&mut self, key: &str, value: &str) {
        let value = self.encoding.encode(value);
        self.params.push(format!("{}={}", key, value));
    }

    fn flag(&mut self, key: &str, value: bool) {
        self.params.push(format!("{}={}", key, value));
    }

    // the name goes right after its own location, not grouped at the end
    fn location(&mut self, key: &str, name_key: &str, location: &Location) {
        self.text(key, &location.value_text());
        if let Some(name) = location.name() {
            self.text(name_key, name);
        }
    }

    fn finish(self) -> NavigatorUri {
        NavigatorUri::new(format!("{}://?{}", SCHEME, self.params.join("&")))
    }
}

#[cfg(test)]
fn decode(uri: &NavigatorUri) -> String {
    urlencoding::decode(uri.query()).unwrap().into_owned()
}

#[test]
fn build_without_stops_test() {
    let builder = SchemeRequestBuilder::new()
        .set_start(Location::coordinates(47.5, -122.4))
        .set_optimize(true)
        .set_travel_mode("Driving Time")
        .set_navigate(true)
        .set_callback_uri("my-app://done")
        .set_callback_prompt("Back to my app");

    assert_eq!(builder.try_build(), Err(missing_stop_error()));
    assert!(builder.try_build_intent().is_err());

    let result = std::panic::catch_unwind(|| builder.build());
    assert!(result.is_err());
}

#[test]
#[should_panic(expected = "must have at least one stop")]
fn build_panics_without_stops_test() {
    SchemeRequestBuilder::new().build();
}

#[test]
fn round_trip_test() {
    let uri = SchemeRequestBuilder::new()
        .add_stop(Location::coordinates(47.6, -122.3).with_name("Office"))
        .set_start(Location::coordinates(47.5, -122.4).with_name("Home"))
        .set_optimize(true)
        .set_travel_mode("Driving Time")
        .build();

    assert_eq!(uri.scheme(), "arcgis-navigator");
    assert!(uri.as_str().starts_with("arcgis-navigator://?"));
    assert_eq!(
        decode(&uri),
        "start=47.5,-122.4&startname=Home&stop=47.6,-122.3&stopname=Office&optimize=true&travelmode=Driving+Time"
    );
}

#[test]
fn stop_order_test() {
    let uri = SchemeRequestBuilder::new()
        .add_stop(Location::coordinates(1.0, 1.5))
        .add_stop(Location::address("Main St").with_name("Second"))
        .add_stop((3.25, -3.0))
        .build();

    assert_eq!(
        decode(&uri),
        "stop=1,1.5&stop=Main+St&stopname=Second&stop=3.25,-3"
    );
}

#[test]
fn set_start_overwrites_test() {
    let uri = SchemeRequestBuilder::new()
        .set_start(Location::address("First").with_name("one"))
        .set_start(Location::coordinates(10.0, 20.0))
        .add_stop("Destination")
        .build();

    assert_eq!(decode(&uri), "start=10,20&stop=Destination");
}

#[test]
fn setters_overwrite_test() {
    let uri = SchemeRequestBuilder::new()
        .add_stop("Destination")
        .set_optimize(true)
        .set_optimize(false)
        .set_navigate(false)
        .set_navigate(true)
        .set_travel_mode("Walking Time")
        .set_travel_mode("Trucking Distance")
        .set_callback_uri("a://")
        .set_callback_uri("b://")
        .build();

    assert_eq!(
        decode(&uri),
        "stop=Destination&optimize=false&travelmode=Trucking+Distance&navigate=true&callback=b://"
    );
}

#[test]
fn blank_travel_mode_test() {
    let uri = SchemeRequestBuilder::new()
        .add_stop("Destination")
        .set_travel_mode(" \t ")
        .set_navigate(true)
        .build();

    assert!(!uri.as_str().contains("travelmode"));
    assert_eq!(decode(&uri), "stop=Destination&navigate=true");
}

#[test]
fn travel_mode_is_trimmed_test() {
    let uri = SchemeRequestBuilder::new()
        .add_stop("Destination")
        .set_travel_mode("  Walking Distance ")
        .build();

    assert_eq!(uri.query(), "stop=Destination&travelmode=Walking+Distance");
}

#[test]
fn addresses_are_not_trimmed_test() {
    let uri = SchemeRequestBuilder::new()
        .add_stop(" Destination ")
        .set_callback_prompt(" ok ")
        .build();

    assert_eq!(uri.query(), "stop=+Destination+&callbackprompt=+ok+");
}

#[test]
fn full_parameter_order_test() {
    let uri = SchemeRequestBuilder::new()
        .set_callback_prompt("Return to Field App")
        .set_callback_uri("field-app://navigated?job=7")
        .set_navigate(false)
        .set_travel_mode(crate::entities::TravelMode::RuralDrivingTime)
        .set_optimize(false)
        .add_stop(Location::address("100 Commercial St Portland ME").with_name("Esri"))
        .set_start(Location::coordinates(43.633332, -70.259971))
        .build();

    assert_eq!(
        uri.as_str(),
        "arcgis-navigator://?start=43.633332%2C-70.259971\
         &stop=100+Commercial+St+Portland+ME&stopname=Esri\
         &optimize=false&travelmode=Rural+Driving+Time&navigate=false\
         &callback=field-app%3A%2F%2Fnavigated%3Fjob%3D7\
         &callbackprompt=Return+to+Field+App"
    );
}

#[test]
fn component_encoding_test() {
    let uri = SchemeRequestBuilder::new()
        .add_stop(Location::address("Main St").with_name("Corner Shop"))
        .set_encoding(Encoding::Component)
        .build();

    assert_eq!(uri.query(), "stop=Main%20St&stopname=Corner%20Shop");
}

#[test]
fn build_is_idempotent_test() {
    let builder = SchemeRequestBuilder::new()
        .add_stop(Location::coordinates(47.6, -122.3).with_name("Office"))
        .set_travel_mode("Driving Time");

    let first = builder.build();
    let second = builder.build();
    assert_eq!(first, second);
    assert_eq!(builder.config().stops.len(), 1);

    // building does not lock the builder
    let third = builder.add_stop("Lunch").build();
    assert_ne!(first, third);
}

#[test]
fn unset_fields_are_omitted_test() {
    let builder = SchemeRequestBuilder::new().add_stop("Destination");

    let config = builder.config();
    assert_eq!(config.start, None);
    assert_eq!(config.optimize, None);
    assert_eq!(config.navigate, None);
    assert_eq!(config.encoding, Encoding::Form);

    assert_eq!(builder.build().as_str(), "arcgis-navigator://?stop=Destination");
}

#[test]
fn build_intent_test() {
    use crate::external::ACTION_VIEW;

    let builder = SchemeRequestBuilder::new().add_stop("Destination");
    let intent = builder.build_intent();

    assert_eq!(intent.action, ACTION_VIEW);
    assert_eq!(intent.uri, builder.build());
}

#[test]
fn boundary_coordinates_test() {
    let uri = SchemeRequestBuilder::new()
        .add_stop(Location::coordinates(90.0, -180.0).with_name("North"))
        .add_stop(Location::coordinates(-90.0, 180.0))
        .add_stop(Location::coordinates(-0.0, 0.0000001))
        .add_stop(Location::coordinates(0.0, 0.0))
        .build();

    assert_eq!(
        uri.query(),
        "stop=90%2C-180&stopname=North&stop=-90%2C180&stop=-0%2C0.0000001&stop=0%2C0"
    );
    // no exponent notation for tiny values
    assert!(!uri.query().contains("1e-7"));
}
