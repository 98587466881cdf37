// Domain layer: models, ports and the pure transformation services.

pub mod model;
pub mod ports;

pub mod services;
