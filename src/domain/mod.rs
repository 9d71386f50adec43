// Domain layer: value types and ports (interfaces). No I/O here.

pub mod decimal;
pub mod digits;
pub mod model;
pub mod ports;
