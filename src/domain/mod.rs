// Domain layer: margin records and the ports the batch engine depends on.

pub mod model;
pub mod ports;
