use std::env::{self, VarError};

use crate::entities::{Callback, TripRequest};
use crate::error::Error;
use crate::scheme::Encoding;

pub const ENCODING_VAR: &str = "NAVLINK_ENCODING";
pub const CALLBACK_VAR: &str = "NAVLINK_CALLBACK";
pub const CALLBACK_PROMPT_VAR: &str = "NAVLINK_CALLBACK_PROMPT";

/// Settings for the command line tool. The builder never reads these.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub encoding: Encoding,
    pub callback_uri: Option<String>,
    pub callback_prompt: Option<String>,
}

impl Config {
    /// Reads the process environment, after loading `.env` if there is one.
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let encoding = match optional(lookup(ENCODING_VAR))? {
            Some(encoding) => encoding.parse()?,
            None => Encoding::default(),
        };

        Ok(Self {
            encoding,
            callback_uri: optional(lookup(CALLBACK_VAR))?,
            callback_prompt: optional(lookup(CALLBACK_PROMPT_VAR))?,
        })
    }

    /// Fills in the configured callback when the request names none.
    pub fn apply_callback(&self, request: &mut TripRequest) {
        if request.callback.is_some() {
            return;
        }

        if let Some(uri) = &self.callback_uri {
            request.callback = Some(Callback {
                uri: uri.clone(),
                prompt: self.callback_prompt.clone(),
            });
        }
    }
}

fn optional(value: Result<String, VarError>) -> Result<Option<String>, Error> {
    match value {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
    let vars: std::collections::HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    move |key: &str| vars.get(key).cloned().ok_or(VarError::NotPresent)
}

#[test]
fn config_defaults_test() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.encoding, Encoding::Form);
}

#[test]
fn config_from_vars_test() {
    let config = Config::from_lookup(lookup_from(&[
        (ENCODING_VAR, "component"),
        (CALLBACK_VAR, "field-app://done"),
        (CALLBACK_PROMPT_VAR, "Return to Field App"),
        ("UNRELATED", "x"),
    ]))
    .unwrap();

    assert_eq!(config.encoding, Encoding::Component);
    assert_eq!(config.callback_uri.as_deref(), Some("field-app://done"));
    assert_eq!(config.callback_prompt.as_deref(), Some("Return to Field App"));
}

#[test]
fn config_bad_encoding_test() {
    let err = Config::from_lookup(lookup_from(&[(ENCODING_VAR, "rot13")])).unwrap_err();
    assert_eq!(err.code, 101);
}

#[test]
fn config_non_unicode_var_test() {
    let err = Config::from_lookup(|_| Err(VarError::NotUnicode("\u{fffd}".into()))).unwrap_err();
    assert_eq!(err.code, 1);
}

#[test]
fn apply_callback_test() {
    use crate::entities::Location;

    let config = Config {
        callback_uri: Some("field-app://done".into()),
        ..Default::default()
    };

    let mut request = TripRequest {
        stops: vec![Location::address("Portland")],
        ..Default::default()
    };
    config.apply_callback(&mut request);
    assert_eq!(
        request.callback,
        Some(Callback {
            uri: "field-app://done".into(),
            prompt: None,
        })
    );

    let own = Callback {
        uri: "other-app://".into(),
        prompt: Some("Other".into()),
    };
    request.callback = Some(own.clone());
    config.apply_callback(&mut request);
    assert_eq!(request.callback, Some(own));
}
