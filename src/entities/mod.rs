mod location;
mod venue;

pub use location::{Coordinates, Location};
pub use venue::Venue;
