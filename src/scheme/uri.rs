use std::fmt;

use serde::{Deserialize, Serialize};

use super::SCHEME;
use crate::error::{invalid_input_error, Error};
use crate::external::ViewIntent;

/// A finished navigator deep link.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NavigatorUri(String);

impl NavigatorUri {
    pub(crate) fn new(uri: String) -> Self {
        Self(uri)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn scheme(&self) -> &str {
        SCHEME
    }

    /// Everything after the `?`, still encoded.
    pub fn query(&self) -> &str {
        self.0.split_once('?').map(|(_, query)| query).unwrap_or("")
    }

    pub fn into_intent(self) -> ViewIntent {
        ViewIntent::new(self)
    }
}

impl fmt::Display for NavigatorUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NavigatorUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Only `arcgis-navigator://` links are accepted.
impl TryFrom<String> for NavigatorUri {
    type Error = Error;

    fn try_from(uri: String) -> Result<Self, Self::Error> {
        let is_navigator = uri
            .split_once("://")
            .map_or(false, |(scheme, _)| scheme == SCHEME);

        if !is_navigator {
            return Err(invalid_input_error(format!("not a {}:// link: {}", SCHEME, uri)));
        }

        Ok(Self(uri))
    }
}

impl From<NavigatorUri> for String {
    fn from(uri: NavigatorUri) -> Self {
        uri.0
    }
}

#[test]
fn navigator_uri_try_from_test() {
    let uri = NavigatorUri::try_from("arcgis-navigator://?stop=Portland".to_string()).unwrap();
    assert_eq!(uri.query(), "stop=Portland");

    let err = NavigatorUri::try_from("https://example.com/".to_string()).unwrap_err();
    assert_eq!(err.code, 101);

    assert!(NavigatorUri::try_from("arcgis-navigator-x://?stop=a".to_string()).is_err());
    assert!(NavigatorUri::try_from("stop=Portland".to_string()).is_err());
}

#[test]
fn deserialize_rejects_other_schemes_test() {
    let uri: NavigatorUri =
        serde_json::from_str("\"arcgis-navigator://?stop=Portland\"").unwrap();
    assert_eq!(uri.scheme(), "arcgis-navigator");

    let result = serde_json::from_str::<ViewIntent>(
        r#"{"action":"android.intent.action.VIEW","uri":"https://elsewhere.example/"}"#,
    );
    assert!(result.is_err());

    let result = serde_json::from_str::<NavigatorUri>("\"https://elsewhere.example/\"");
    assert!(result.is_err());
}
