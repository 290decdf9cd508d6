//! Sink via primitiva da plataforma.
//!
//! Para plataformas que já têm um driver serial (ex: o `Serial` do Arduino,
//! um UART do SDK do fabricante). A plataforma fornece duas funções simples
//! e o logging não precisa saber nada do hardware.

use crate::core::error::SinkResult;
use crate::hal::CharSink;

/// Sink formado por dois ponteiros de função.
#[derive(Clone, Copy)]
pub struct FnSink {
    init: fn(u32),
    put: fn(u8) -> SinkResult<()>,
}

impl FnSink {
    /// `init` recebe o baud rate; `put` deve bloquear até aceitar o byte.
    pub const fn new(init: fn(u32), put: fn(u8) -> SinkResult<()>) -> Self {
        Self { init, put }
    }
}

impl CharSink for FnSink {
    #[inline]
    fn init(&mut self, baud: u32) {
        (self.init)(baud)
    }

    #[inline]
    fn put_char(&mut self, byte: u8) -> SinkResult<()> {
        (self.put)(byte)
    }
}
