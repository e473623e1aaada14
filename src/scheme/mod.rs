mod builder;
mod encoding;
mod uri;

pub use builder::{RequestConfig, SchemeRequestBuilder};
pub use encoding::Encoding;
pub use uri::NavigatorUri;

/// URL scheme registered by the ArcGIS Navigator app.
pub const SCHEME: &str = "arcgis-navigator";

const START_PARAM: &str = "start";
const START_NAME_PARAM: &str = "startname";
const STOP_PARAM: &str = "stop";
const STOP_NAME_PARAM: &str = "stopname";
const OPTIMIZE_PARAM: &str = "optimize";
const TRAVEL_MODE_PARAM: &str = "travelmode";
const NAVIGATE_PARAM: &str = "navigate";
const CALLBACK_PARAM: &str = "callback";
const CALLBACK_PROMPT_PARAM: &str = "callbackprompt";
