//! Hardware Abstraction Layer (HAL)
//!
//! Único ponto de contato entre o logging e a plataforma: o [`CharSink`].
//! Implementações concretas ficam em [`crate::drivers`].

pub mod traits;

pub use traits::*;
