//! Trait de Sink
//!
//! A capacidade mínima que uma plataforma precisa fornecer para receber logs:
//! configurar o transporte e emitir um byte por vez.

use crate::core::error::SinkResult;

/// Saída de caracteres bloqueante.
///
/// # Contrato
/// - `put_char` bloqueia até o transporte aceitar o byte (busy wait é aceitável)
/// - Nunca descarta nem reordena bytes
/// - Não bufferiza além do que o próprio transporte já bufferiza
///
/// O core nunca repete uma escrita que falhou.
pub trait CharSink {
    /// Configura o transporte (ex: baud rate da serial).
    fn init(&mut self, baud: u32);

    /// Emite um byte.
    fn put_char(&mut self, byte: u8) -> SinkResult<()>;
}
