//! # Sinks de Saída
//!
//! Implementações concretas de [`CharSink`](crate::hal::CharSink).
//!
//! | Sink         | Arquivo      | Uso |
//! |--------------|--------------|-----|
//! | `Usart`      | `serial.rs`  | Registradores da USART, busy wait |
//! | `FnSink`     | `func.rs`    | Driver serial já existente na plataforma |
//! | `BufferSink` | `buffer.rs`  | Captura em memória (self-test, testes) |
//!
//! ```text
//! log_err!() ──▶ redirect::print() ──▶ Channel<S> ──▶ S::put_char()
//! ```

pub mod buffer;
pub mod func;
pub mod serial;

pub use buffer::BufferSink;
pub use func::FnSink;
pub use serial::Usart;
