//! Sink de memória.
//!
//! Grava os bytes num array de tamanho fixo (sem alocação). Serve para
//! capturar a saída no alvo durante o self-test e nos testes de host.

use crate::core::error::{SinkError, SinkResult};
use crate::hal::CharSink;

/// Sink que grava até `N` bytes.
///
/// Quando cheio, `put_char` retorna [`SinkError::Full`] em vez de descartar.
pub struct BufferSink<const N: usize> {
    buf: [u8; N],
    len: usize,
    baud: Option<u32>,
}

impl<const N: usize> BufferSink<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            baud: None,
        }
    }

    /// Bytes gravados até agora.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Conteúdo como texto, se for UTF-8 válido.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Baud rate recebido no último `init`.
    pub fn baud(&self) -> Option<u32> {
        self.baud
    }

    /// Descarta o conteúdo (mantém a configuração).
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<const N: usize> Default for BufferSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CharSink for BufferSink<N> {
    fn init(&mut self, baud: u32) {
        self.baud = Some(baud);
    }

    fn put_char(&mut self, byte: u8) -> SinkResult<()> {
        if self.len >= N {
            return Err(SinkError::Full);
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }
}
