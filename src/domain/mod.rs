// Domain layer: the parcel record and the ports (traits) the registry is written against.

pub mod model;
pub mod ports;
