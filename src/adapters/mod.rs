// Adapters layer: concrete sources that feed parcels into the registry.

pub mod loader;
