mod location;
mod request;
mod travel_mode;

pub use location::{Coordinates, Location};
pub use request::{Callback, TripRequest};
pub use travel_mode::TravelMode;
