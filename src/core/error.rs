//! Tipos de Erro do Logging
//!
//! Define erros estruturados para as duas camadas que podem falhar:
//! o sink (transporte) e a chamada formatada que o alimenta.

/// Erros reportados por um [`CharSink`](crate::hal::CharSink)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    /// Capacidade do sink esgotada (sinks de memória)
    Full,
    /// Transporte recusou o byte
    Rejected,
    /// Transporte ainda não configurado
    NotReady,
}

impl SinkError {
    /// Retorna descrição legível do erro
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "sink cheio",
            Self::Rejected => "byte recusado pelo transporte",
            Self::NotReady => "transporte não configurado",
        }
    }
}

impl core::fmt::Display for SinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Erros de uma chamada de log ativa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogError {
    /// Nenhuma saída vinculada (`initialize` não foi chamado)
    Unbound,
    /// O sink falhou no meio da linha; bytes anteriores já foram emitidos
    Sink(SinkError),
    /// Uma implementação de `Display` do chamador retornou erro
    Format,
}

impl LogError {
    /// Retorna descrição legível do erro
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unbound => "saída de log não inicializada",
            Self::Sink(e) => e.as_str(),
            Self::Format => "erro de formatação",
        }
    }
}

impl core::fmt::Display for LogError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SinkError> for LogError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}

/// Tipo Result específico para operações de sink
pub type SinkResult<T> = Result<T, SinkError>;

/// Tipo Result específico para chamadas de log
pub type LogResult<T> = Result<T, LogError>;
