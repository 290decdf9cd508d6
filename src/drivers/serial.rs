// =============================================================================
// SERIAL DRIVER - USART MAPEADA EM MEMÓRIA
// =============================================================================
//
// Sink de USART para logging em microcontroladores (layout ATmega328P USART0).
//
// ARQUITETURA:
// - SEM buffer - Cada byte vai direto ao registrador de dados
// - SEM interrupções - Espera ativa no flag UDRE
// - SEM alocação
//
// MAPA DE REGISTRADORES (offsets a partir da base, 0xC0 na USART0):
//   +0 UCSRnA  status / modo double-speed
//   +1 UCSRnB  habilita RX/TX
//   +2 UCSRnC  formato do frame
//   +4 UBRRnL  divisor de baud (byte baixo)
//   +5 UBRRnH  divisor de baud (byte alto)
//   +6 UDRn    dado
//
// NOTA IMPORTANTE:
// put_char bloqueia indefinidamente se o transmissor nunca ficar livre.
// Isso é aceito: não há timeout nem cancelamento. Com TXEN desligado
// (init nunca chamado) UDRE não tem significado: retorna NotReady.
//
// =============================================================================

use core::ptr::NonNull;

use bitflags::bitflags;
use volatile::VolatilePtr;

use crate::core::error::{SinkError, SinkResult};
use crate::hal::CharSink;

/// Endereço base da USART0 (espaço de I/O estendido do ATmega328P).
pub const USART0_BASE: usize = 0xC0;

/// Quantidade de bytes do bloco de registradores.
pub const REGISTER_SPAN: usize = 7;

const UCSRA: usize = 0;
const UCSRB: usize = 1;
const UCSRC: usize = 2;
const UBRRL: usize = 4;
const UBRRH: usize = 5;
const UDR: usize = 6;

/// Maior divisor representável (UBRR tem 12 bits).
const UBRR_MAX: u32 = 0x0FFF;

bitflags! {
    /// UCSRnA: status e controle A.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct StatusA: u8 {
        /// Recepção completa.
        const RXC  = 1 << 7;
        /// Transmissão completa.
        const TXC  = 1 << 6;
        /// Registrador de dados vazio: pronto para o próximo byte.
        const UDRE = 1 << 5;
        /// Erro de frame.
        const FE   = 1 << 4;
        /// Data overrun.
        const DOR  = 1 << 3;
        /// Erro de paridade.
        const UPE  = 1 << 2;
        /// Double speed (divisor por 8 em vez de 16).
        const U2X  = 1 << 1;
        /// Modo multiprocessador.
        const MPCM = 1 << 0;
    }
}

bitflags! {
    /// UCSRnB: status e controle B.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ControlB: u8 {
        const RXCIE = 1 << 7;
        const TXCIE = 1 << 6;
        const UDRIE = 1 << 5;
        /// Habilita receptor.
        const RXEN  = 1 << 4;
        /// Habilita transmissor.
        const TXEN  = 1 << 3;
        const UCSZ2 = 1 << 2;
        const RXB8  = 1 << 1;
        const TXB8  = 1 << 0;
    }
}

bitflags! {
    /// UCSRnC: formato do frame.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ControlC: u8 {
        const UMSEL1 = 1 << 7;
        const UMSEL0 = 1 << 6;
        const UPM1   = 1 << 5;
        const UPM0   = 1 << 4;
        const USBS   = 1 << 3;
        const UCSZ1  = 1 << 2;
        const UCSZ0  = 1 << 1;
        const UCPOL  = 1 << 0;

        /// 8 bits de dados, sem paridade, 1 stop bit.
        const FRAME_8N1 = Self::UCSZ1.bits() | Self::UCSZ0.bits();
    }
}

/// Calcula UBRR para modo double-speed: F_CPU / (baud * 8) - 1.
///
/// Satura nos limites do registrador; baud 0 resulta em 0.
pub const fn divisor(f_cpu: u32, baud: u32) -> u16 {
    let denom = baud.saturating_mul(8);
    if denom == 0 {
        return 0;
    }
    let ubrr = (f_cpu / denom).saturating_sub(1);
    if ubrr > UBRR_MAX {
        UBRR_MAX as u16
    } else {
        ubrr as u16
    }
}

/// Driver de USART mapeada em memória.
pub struct Usart {
    base: NonNull<u8>,
    f_cpu: u32,
}

// SAFETY: o bloco de registradores é único por instância e todo acesso
// passa pelo Mutex do Channel que a contém.
unsafe impl Send for Usart {}

impl Usart {
    /// Cria o driver sobre um bloco de registradores arbitrário.
    ///
    /// # Safety
    /// `base` deve apontar para [`REGISTER_SPAN`] bytes válidos para acesso
    /// volátil durante toda a vida do driver, sem outro dono.
    pub const unsafe fn new(base: NonNull<u8>, f_cpu: u32) -> Self {
        Self { base, f_cpu }
    }

    /// USART0 do ATmega328P.
    ///
    /// # Safety
    /// Só é válido no próprio microcontrolador, com uma única instância.
    pub const unsafe fn usart0(f_cpu: u32) -> Self {
        // SAFETY: endereço fixo do hardware, nunca nulo
        unsafe { Self::new(NonNull::new_unchecked(USART0_BASE as *mut u8), f_cpu) }
    }

    /// Clock da CPU usado no cálculo do divisor.
    pub const fn f_cpu(&self) -> u32 {
        self.f_cpu
    }

    /// Lê UCSRnA.
    pub fn status(&self) -> StatusA {
        StatusA::from_bits_retain(self.reg(UCSRA).read())
    }

    /// Lê UCSRnB.
    pub fn control(&self) -> ControlB {
        ControlB::from_bits_retain(self.reg(UCSRB).read())
    }

    /// Transmissor habilitado (TXEN)?
    #[inline(always)]
    pub fn is_enabled(&self) -> bool {
        self.control().contains(ControlB::TXEN)
    }

    /// Transmissor pronto para o próximo byte?
    #[inline(always)]
    pub fn is_ready(&self) -> bool {
        self.status().contains(StatusA::UDRE)
    }

    #[inline(always)]
    fn reg(&self, offset: usize) -> VolatilePtr<'_, u8> {
        // SAFETY: offset < REGISTER_SPAN, garantido pelo contrato de `new`
        unsafe { VolatilePtr::new(NonNull::new_unchecked(self.base.as_ptr().add(offset))) }
    }
}

// =============================================================================
// FUNÇÕES DE INICIALIZAÇÃO E ESCRITA
// =============================================================================

impl CharSink for Usart {
    /// Configura: double speed, divisor para `baud`, 8N1, RX e TX habilitados.
    fn init(&mut self, baud: u32) {
        let ubrr = divisor(self.f_cpu, baud);

        self.reg(UBRRH).write((ubrr >> 8) as u8);
        self.reg(UBRRL).write(ubrr as u8);
        self.reg(UCSRA).write(StatusA::U2X.bits());
        self.reg(UCSRC).write(ControlC::FRAME_8N1.bits());
        self.reg(UCSRB).write((ControlB::RXEN | ControlB::TXEN).bits());
    }

    /// Espera o registrador de dados esvaziar (busy wait) e envia o byte.
    #[inline]
    fn put_char(&mut self, byte: u8) -> SinkResult<()> {
        if !self.is_enabled() {
            return Err(SinkError::NotReady);
        }
        while !self.is_ready() {
            core::hint::spin_loop();
        }
        self.reg(UDR).write(byte);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisor_matches_datasheet_table() {
        // ATmega328P @ 16 MHz, U2X = 1
        assert_eq!(divisor(16_000_000, 9_600), 207);
        assert_eq!(divisor(16_000_000, 57_600), 33);
        assert_eq!(divisor(16_000_000, 115_200), 16);
        assert_eq!(divisor(8_000_000, 38_400), 25);
    }

    #[test]
    fn divisor_saturates() {
        assert_eq!(divisor(16_000_000, 0), 0);
        assert_eq!(divisor(16_000_000, 300), 0x0FFF);
        assert_eq!(divisor(1_000, 1_000_000), 0);
        assert_eq!(divisor(16_000_000, u32::MAX), 0);
    }

    #[test]
    fn frame_constant_is_8n1() {
        assert_eq!(ControlC::FRAME_8N1.bits(), 0b0000_0110);
    }
}
