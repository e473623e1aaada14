use std::env;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        io_error(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        serialization_error(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        serialization_error(err)
    }
}

impl Error {
    /// Caller errors use codes from 100 up; anything lower is environmental.
    pub fn is_caller_error(&self) -> bool {
        self.code >= 100
    }
}

pub fn missing_stop_error() -> Error {
    Error {
        code: 100,
        message: "must have at least one stop".into(),
    }
}

pub fn invalid_input_error(detail: impl Display) -> Error {
    Error {
        code: 101,
        message: format!("invalid input: {}", detail),
    }
}

pub fn application_unavailable_error(scheme: &str) -> Error {
    Error {
        code: 102,
        message: format!("no application can open {}:// links", scheme),
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    Error {
        code: 1,
        message: format!("environment variable error: {}", err),
    }
}

pub fn io_error(err: std::io::Error) -> Error {
    Error {
        code: 2,
        message: format!("io error: {}", err),
    }
}

pub fn serialization_error<T: Display>(err: T) -> Error {
    Error {
        code: 3,
        message: format!("serialization error: {}", err),
    }
}

pub fn launch_error(detail: impl Display) -> Error {
    Error {
        code: 4,
        message: format!("launch error: {}", detail),
    }
}

#[test]
fn error_code_ranges_test() {
    assert!(missing_stop_error().is_caller_error());
    assert!(invalid_input_error("bad").is_caller_error());
    assert!(!io_error(std::io::Error::new(std::io::ErrorKind::Other, "boom")).is_caller_error());
    assert!(!env_var_error(env::VarError::NotPresent).is_caller_error());
}

#[test]
fn error_display_test() {
    assert_eq!(
        missing_stop_error().to_string(),
        "must have at least one stop (code 100)"
    );
}
