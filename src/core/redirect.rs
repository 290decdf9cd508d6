// =============================================================================
// OUTPUT REDIRECTOR
// =============================================================================
//
// Vínculo único, de processo inteiro, entre as macros de log e o sink.
//
// ARQUITETURA:
// - `initialize()` configura o transporte e vincula a saída
// - Toda chamada de log ativa lê o vínculo e escreve por ele
// - Re-inicializar apenas troca o vínculo (ex: mudar baud rate)
// - O vínculo vive até o fim do processo, salvo `release()` explícito
//
// COMO FUNCIONA:
// `Channel<S>` envolve o sink concreto num spin::Mutex. Cada chamada trava
// o canal UMA vez e percorre os pedaços `&'static str` do format_args!,
// empurrando byte a byte em `put_char`. Nenhum buffer intermediário:
// as strings literais nunca são copiadas para RAM.
//
// NOTA IMPORTANTE:
// Não há garantia de reentrância. Um sink que loga de dentro de `put_char`
// trava o próprio canal. Interrupções que logam devem ser serializadas
// pelo chamador.
//
// =============================================================================

use core::fmt;

use spin::{Mutex, MutexGuard, RwLock};

use super::error::{LogError, LogResult, SinkError};
use crate::hal::CharSink;

// =============================================================================
// SAÍDA
// =============================================================================

/// Destino que pode ser vinculado como saída global.
pub trait Output: Sync {
    /// Configura o transporte subjacente.
    fn configure(&self, baud: u32);

    /// Escreve uma chamada formatada completa.
    ///
    /// Retorna o número de bytes aceitos pelo sink.
    fn write_fmt(&self, args: fmt::Arguments<'_>) -> LogResult<usize>;
}

/// Sink concreto protegido por lock, pronto para virar a saída global.
///
/// Normalmente declarado via [`log_globals!`](crate::log_globals).
pub struct Channel<S> {
    sink: Mutex<S>,
}

impl<S> Channel<S> {
    /// Cria um canal. Utilizável em `static`.
    pub const fn new(sink: S) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Acesso direto ao sink (inspeção, testes).
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.sink.lock()
    }
}

impl<S: CharSink + Send> Output for Channel<S> {
    fn configure(&self, baud: u32) {
        self.sink.lock().init(baud);
    }

    fn write_fmt(&self, args: fmt::Arguments<'_>) -> LogResult<usize> {
        let mut sink = self.sink.lock();
        let mut writer = SinkWriter {
            sink: &mut *sink,
            written: 0,
            error: None,
        };

        match fmt::write(&mut writer, args) {
            Ok(()) => Ok(writer.written),
            Err(_) => Err(writer.error.map_or(LogError::Format, LogError::Sink)),
        }
    }
}

/// Adaptador fmt::Write -> CharSink.
///
/// Guarda o erro do sink, já que fmt::Error não carrega informação.
struct SinkWriter<'a, S: ?Sized> {
    sink: &'a mut S,
    written: usize,
    error: Option<SinkError>,
}

impl<S: CharSink + ?Sized> fmt::Write for SinkWriter<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            if let Err(e) = self.sink.put_char(byte) {
                self.error = Some(e);
                return Err(fmt::Error);
            }
            self.written += 1;
        }
        Ok(())
    }
}

// =============================================================================
// RESULTADO DE UMA CHAMADA
// =============================================================================

/// Valor de toda macro de log.
///
/// Ignorá-lo é a convenção normal (como o retorno de `printf`). Chamadores que
/// precisam de garantia de entrega inspecionam [`Emitted::result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emitted(LogResult<usize>);

impl Emitted {
    /// Valor de uma chamada eliminada em compilação.
    pub const ELIDED: Self = Self(Ok(0));

    pub const fn result(self) -> LogResult<usize> {
        self.0
    }

    pub const fn is_ok(&self) -> bool {
        self.0.is_ok()
    }

    /// Bytes emitidos (0 em caso de erro).
    pub const fn bytes(&self) -> usize {
        match self.0 {
            Ok(n) => n,
            Err(_) => 0,
        }
    }
}

impl From<LogResult<usize>> for Emitted {
    fn from(result: LogResult<usize>) -> Self {
        Self(result)
    }
}

// =============================================================================
// VÍNCULO GLOBAL
// =============================================================================

static OUTPUT: RwLock<Option<&'static dyn Output>> = RwLock::new(None);

/// Configura o transporte e vincula `out` como saída de todos os logs.
///
/// Deve ser chamada antes do primeiro log ativo. Chamar de novo re-vincula.
/// Não é thread-safe em relação a logs concorrentes.
pub fn initialize(out: &'static dyn Output, baud: u32) {
    out.configure(baud);
    *OUTPUT.write() = Some(out);
}

/// Vincula `out` sem reconfigurar o transporte.
///
/// Retorna o vínculo anterior.
pub fn bind(out: &'static dyn Output) -> Option<&'static dyn Output> {
    OUTPUT.write().replace(out)
}

/// Desfaz o vínculo. Retorna o anterior.
pub fn release() -> Option<&'static dyn Output> {
    OUTPUT.write().take()
}

/// Saída vinculada atualmente.
pub fn current() -> Option<&'static dyn Output> {
    *OUTPUT.read()
}

pub fn is_bound() -> bool {
    OUTPUT.read().is_some()
}

/// Primitiva de saída formatada.
///
/// Todas as macros ativas chegam aqui. Também pode ser usada diretamente:
/// `sevlog::print(format_args!("..."))`.
#[inline(never)]
pub fn print(args: fmt::Arguments<'_>) -> Emitted {
    // Copia a referência e solta o lock antes de escrever
    let out = *OUTPUT.read();
    match out {
        Some(out) => Emitted(out.write_fmt(args)),
        None => Emitted(Err(LogError::Unbound)),
    }
}
