// Domain layer: menu types and the traits the core implements. No I/O here.

pub mod model;
pub mod ports;
