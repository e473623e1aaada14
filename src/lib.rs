pub mod config;
pub mod entities;
pub mod error;
pub mod external;
pub mod links;
pub mod scheme;

pub use entities::{Location, TravelMode};
pub use error::Error;
pub use scheme::{NavigatorUri, SchemeRequestBuilder};
