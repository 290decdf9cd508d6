//! Traits do HAL
//!
//! Define as interfaces abstratas para hardware.

pub mod sink;

pub use sink::*;
