//! Sevlog - Logging por severidade para firmware.
//!
//! Logs com custo ZERO quando desligados e uma única chamada formatada,
//! com strings estáticas, quando ligados. O threshold é escolhido em
//! compilação pelas features `log_error` .. `log_debug`; sem nenhuma
//! feature, todas as macros desaparecem do binário.
//!
//! ```text
//! log_err!/log_warn!/log!/log_verb!/log_dbg!   (core::logging)
//!                 │
//!                 ▼
//!        redirect::print()                      (core::redirect)
//!                 │
//!                 ▼
//!       CharSink::put_char()                    (hal / drivers)
//! ```
//!
//! # Uso
//! ```ignore
//! use sevlog::drivers::Usart;
//!
//! sevlog::log_globals!(static SERIAL: Usart = unsafe { Usart::usart0(16_000_000) });
//!
//! fn main() {
//!     sevlog::log_init!(SERIAL, 115_200);
//!     sevlog::log_err!("Erro conectando ao servidor, http status {}", 503);
//! }
//! ```

#![cfg_attr(not(test), no_std)]

// --- Camada de Hardware ---
pub mod drivers; // Sinks concretos (USART, função da plataforma, memória)
pub mod hal; // Trait CharSink

// --- Núcleo ---
pub mod core; // Severidade, redirecionador, macros, erros

pub use crate::core::error::{LogError, LogResult, SinkError, SinkResult};
pub use crate::core::redirect::{bind, current, initialize, is_bound, print, release};
pub use crate::core::redirect::{Channel, Emitted, Output};
pub use crate::core::severity::{Severity, THRESHOLD};
pub use crate::hal::CharSink;

/// Serializa os testes que mexem no vínculo global.
#[cfg(test)]
pub(crate) static TEST_LOCK: spin::Mutex<()> = spin::Mutex::new(());
