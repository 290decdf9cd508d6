// =============================================================================
// SEVERIDADE E THRESHOLD DE COMPILAÇÃO
// =============================================================================
//
// O threshold é decidido UMA vez, em tempo de compilação, pelas features
// log_* do Cargo. Não existe override por chamada nem ajuste em runtime.
//
// NÍVEIS (do mais crítico ao menos):
// - 0 OFF:     Nada é emitido (padrão sem features)
// - 1 ERROR:   log_err!
// - 2 WARNING: + log_warn!
// - 3 INFO:    + log!
// - 4 VERBOSE: + log_verb!
// - 5 DEBUG:   + log_dbg!
//
// NOTA: o build de testes unitários da própria crate (cfg(test)) trata
// todos os níveis como ativos, para exercitar os corpos ativos das macros.
//
// =============================================================================

/// Níveis de severidade, em ordem crescente de verbosidade.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Off = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Verbose = 4,
    Debug = 5,
}

/// Header e footer literais de um nível.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    pub header: &'static str,
    pub footer: &'static str,
}

impl Decoration {
    /// Sem decoração (INFO, VERBOSE, DEBUG).
    pub const NONE: Self = Self {
        header: "",
        footer: "",
    };
}

/// Terminador de linha emitido apenas pelos formatos Whole e End.
pub const LINE_TERMINATOR: &str = crate::__sevlog_eol!();

/// Header do nível ERROR.
pub const ERR_HEADER: &str = crate::__sevlog_err_header!();
/// Footer do nível ERROR (o terminador vem depois dele).
pub const ERR_FOOTER: &str = crate::__sevlog_err_footer!();
/// Header do nível WARNING.
pub const WARN_HEADER: &str = crate::__sevlog_warn_header!();

/// Os cinco níveis que podem ser ativados, em ordem.
pub const TIERS: [Severity; 5] = [
    Severity::Error,
    Severity::Warning,
    Severity::Info,
    Severity::Verbose,
    Severity::Debug,
];

impl Severity {
    /// Converte o valor numérico do threshold.
    ///
    /// Valores não reconhecidos significam "desligado".
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Error,
            2 => Self::Warning,
            3 => Self::Info,
            4 => Self::Verbose,
            5 => Self::Debug,
            _ => Self::Off,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
        }
    }

    /// Decoração aplicada no início (Begin/Whole) e no fim (End/Whole) da linha.
    pub const fn decoration(&self) -> Decoration {
        match self {
            Self::Error => Decoration {
                header: ERR_HEADER,
                footer: ERR_FOOTER,
            },
            Self::Warning => Decoration {
                header: WARN_HEADER,
                footer: "",
            },
            _ => Decoration::NONE,
        }
    }

    /// Nível `self` ativo sob o threshold `threshold`?
    ///
    /// Ativo sse `threshold >= self > Off`.
    #[inline(always)]
    pub const fn is_active_under(self, threshold: Severity) -> bool {
        (self as u8) > 0 && (threshold as u8) >= (self as u8)
    }

    /// Nível ativo neste build?
    #[inline(always)]
    pub const fn is_active(self) -> bool {
        self.is_active_under(THRESHOLD)
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// THRESHOLD (derivado das features)
// =============================================================================

/// Threshold configurado para este build.
#[cfg(any(test, feature = "log_debug"))]
pub const THRESHOLD: Severity = Severity::Debug;

/// Threshold configurado para este build.
#[cfg(all(not(test), feature = "log_verbose", not(feature = "log_debug")))]
pub const THRESHOLD: Severity = Severity::Verbose;

/// Threshold configurado para este build.
#[cfg(all(not(test), feature = "log_info", not(feature = "log_verbose")))]
pub const THRESHOLD: Severity = Severity::Info;

/// Threshold configurado para este build.
#[cfg(all(not(test), feature = "log_warn", not(feature = "log_info")))]
pub const THRESHOLD: Severity = Severity::Warning;

/// Threshold configurado para este build.
#[cfg(all(not(test), feature = "log_error", not(feature = "log_warn")))]
pub const THRESHOLD: Severity = Severity::Error;

/// Threshold configurado para este build.
#[cfg(all(not(test), not(feature = "log_error")))]
pub const THRESHOLD: Severity = Severity::Off;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_maps_unknown_values_to_off() {
        assert_eq!(Severity::from_u8(0), Severity::Off);
        assert_eq!(Severity::from_u8(3), Severity::Info);
        assert_eq!(Severity::from_u8(5), Severity::Debug);
        assert_eq!(Severity::from_u8(6), Severity::Off);
        assert_eq!(Severity::from_u8(u8::MAX), Severity::Off);
    }

    #[test]
    fn partition_is_exact_for_every_threshold() {
        for k in 0..=5u8 {
            let threshold = Severity::from_u8(k);
            for tier in TIERS {
                let expected = (tier as u8) <= k;
                assert_eq!(
                    tier.is_active_under(threshold),
                    expected,
                    "tier {} under threshold {}",
                    tier,
                    k
                );
            }
            assert!(!Severity::Off.is_active_under(threshold));
        }
    }

    #[test]
    fn unit_test_build_enables_every_tier() {
        assert_eq!(THRESHOLD, Severity::Debug);
        assert!(TIERS.iter().all(|t| t.is_active()));
    }

    #[test]
    fn only_error_and_warning_are_decorated() {
        assert_eq!(
            Severity::Error.decoration().header,
            "\r\n********** ERROR **********\r\n"
        );
        assert_eq!(
            Severity::Error.decoration().footer,
            "\r\n***************************\r\n"
        );
        assert_eq!(Severity::Warning.decoration().header, "*** WARNING: ");
        assert_eq!(Severity::Warning.decoration().footer, "");
        for tier in [Severity::Info, Severity::Verbose, Severity::Debug] {
            assert_eq!(tier.decoration(), Decoration::NONE);
        }
    }
}
