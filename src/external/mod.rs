mod launcher;

pub use launcher::{Launcher, ViewIntent, ACTION_VIEW};
