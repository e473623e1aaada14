use serde::{Deserialize, Serialize};

use crate::error::{application_unavailable_error, Error};
use crate::scheme::NavigatorUri;

pub const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// A platform "view this URI" action wrapping a navigator link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewIntent {
    pub action: String,
    pub uri: NavigatorUri,
}

/// The host platform's mechanism for opening other apps.
pub trait Launcher {
    /// Whether some installed app handles `scheme://` links.
    fn can_open(&self, scheme: &str) -> bool;

    fn launch(&self, intent: &ViewIntent) -> Result<(), Error>;
}

impl ViewIntent {
    pub fn new(uri: NavigatorUri) -> Self {
        Self {
            action: ACTION_VIEW.into(),
            uri,
        }
    }

    #[tracing::instrument(skip(launcher))]
    pub fn launch_with(&self, launcher: &dyn Launcher) -> Result<(), Error> {
        let scheme = self.uri.scheme();

        if !launcher.can_open(scheme) {
            return Err(application_unavailable_error(scheme));
        }

        launcher.launch(self)?;
        tracing::info!("handed off navigator request");

        Ok(())
    }
}

#[cfg(test)]
struct RecordingLauncher {
    installed: bool,
    fail: bool,
    launched: std::cell::RefCell<Vec<ViewIntent>>,
}

#[cfg(test)]
impl RecordingLauncher {
    fn new(installed: bool, fail: bool) -> Self {
        Self {
            installed,
            fail,
            launched: std::cell::RefCell::new(vec![]),
        }
    }
}

#[cfg(test)]
impl Launcher for RecordingLauncher {
    fn can_open(&self, scheme: &str) -> bool {
        self.installed && scheme == crate::scheme::SCHEME
    }

    fn launch(&self, intent: &ViewIntent) -> Result<(), Error> {
        if self.fail {
            return Err(crate::error::launch_error("activity not found"));
        }

        self.launched.borrow_mut().push(intent.clone());
        Ok(())
    }
}

#[cfg(test)]
fn sample_intent() -> ViewIntent {
    crate::scheme::SchemeRequestBuilder::new()
        .add_stop("Destination")
        .build_intent()
}

#[test]
fn launch_with_installed_app_test() {
    let launcher = RecordingLauncher::new(true, false);
    let intent = sample_intent();

    intent.launch_with(&launcher).unwrap();

    assert_eq!(launcher.launched.borrow().as_slice(), &[intent]);
}

#[test]
fn launch_without_app_test() {
    let launcher = RecordingLauncher::new(false, false);

    let err = sample_intent().launch_with(&launcher).unwrap_err();

    assert_eq!(err, application_unavailable_error("arcgis-navigator"));
    assert!(launcher.launched.borrow().is_empty());
}

#[test]
fn launch_failure_test() {
    let launcher = RecordingLauncher::new(true, true);

    let err = sample_intent().launch_with(&launcher).unwrap_err();

    assert_eq!(err.code, 4);
}

#[test]
fn intent_serde_test() {
    let value = serde_json::to_value(sample_intent()).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "action": "android.intent.action.VIEW",
            "uri": "arcgis-navigator://?stop=Destination",
        })
    );
}
