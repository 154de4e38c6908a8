// Domain layer: core models and ports (interfaces). No I/O beyond serde shapes.

pub mod model;
pub mod ports;
