//! Core Module
//!
//! Contém a lógica central do logging, independente de plataforma.

pub mod error;
pub mod logging;
pub mod redirect;
pub mod severity;
