use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

/// How parameter values are percent-encoded. Both escape every byte of the
/// UTF-8 text outside `A-Z a-z 0-9 - _ . ~`; they differ only in spaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// `application/x-www-form-urlencoded` style, spaces become `+`.
    #[default]
    Form,
    /// URI component style, spaces become `%20`.
    Component,
}

impl Encoding {
    pub fn encode(&self, value: &str) -> String {
        let encoded = urlencoding::encode(value);

        match self {
            // every literal '%' is itself escaped, so "%20" only ever comes from a space
            Self::Form => encoded.replace("%20", "+"),
            Self::Component => encoded.into_owned(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Component => "component",
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "form" => Ok(Self::Form),
            "component" => Ok(Self::Component),
            other => Err(invalid_input_error(format!("unknown encoding {:?}", other))),
        }
    }
}

#[test]
fn form_encoding_test() {
    let encoding = Encoding::Form;
    assert_eq!(encoding.encode("Driving Time"), "Driving+Time");
    assert_eq!(encoding.encode("47.6,-122.3"), "47.6%2C-122.3");
    assert_eq!(encoding.encode("a&b=c"), "a%26b%3Dc");
    assert_eq!(encoding.encode("1+1"), "1%2B1");
    assert_eq!(encoding.encode("100%20"), "100%2520");
}

#[test]
fn component_encoding_test() {
    let encoding = Encoding::Component;
    assert_eq!(encoding.encode("Driving Time"), "Driving%20Time");
    assert_eq!(encoding.encode("my-app://done"), "my-app%3A%2F%2Fdone");
}

#[test]
fn utf8_encoding_test() {
    assert_eq!(Encoding::Form.encode("Café"), "Caf%C3%A9");
    assert_eq!(Encoding::Component.encode("Café"), "Caf%C3%A9");
}

#[test]
fn encoding_parse_test() {
    assert_eq!("form".parse::<Encoding>().unwrap(), Encoding::Form);
    assert_eq!(" Component ".parse::<Encoding>().unwrap(), Encoding::Component);

    let err = "base64".parse::<Encoding>().unwrap_err();
    assert_eq!(err.code, 101);
}
