//! Domain layer: validated value types and the ports the core consumes.

pub mod calculation;
pub mod ports;
pub mod user;
