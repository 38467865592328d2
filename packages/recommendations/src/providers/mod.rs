//! Provider adapters implementing the engine's client traits.

mod places;

pub use places::PlacesProvider;
