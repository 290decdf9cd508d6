// =============================================================================
// SISTEMA DE LOGGING - ZERO OVERHEAD
// =============================================================================
//
// Macros de log por severidade com custo ZERO quando desligadas.
//
// ARQUITETURA:
// - Usa features do Cargo para filtrar em tempo de compilação
// - Nível abaixo do threshold: a macro vira uma constante, SEM chamada,
//   SEM string literal no binário, SEM avaliar os argumentos
// - Nível ativo: UMA chamada a `print(format_args!(...))`, com header,
//   formato e footer concatenados em compilação numa única string estática
// - As strings nunca são copiadas para RAM: o Channel percorre os pedaços
//   `&'static str` e os envia byte a byte ao sink
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR:   log_err!   (banner em volta da mensagem)
// - WARNING: log_warn!  (prefixo "*** WARNING: ")
// - INFO:    log!
// - VERBOSE: log_verb!
// - DEBUG:   log_dbg!
//
// FORMATOS DE LINHA (mesma convenção de formato em todos):
// - Whole    log_*!   header + msg + footer + CRLF
// - Begin    logb_*!  header + msg            (linha fica aberta)
// - Continue logc_*!  msg
// - End      loge_*!  msg + footer + CRLF     (fecha a linha)
//
// COMO USAR:
//   log_err!("Falha no servidor, http status {}", status);
//
//   logb_verb!("Esperando sensores");
//   for r in leituras {
//       logc_verb!(" - recebido {}", r);
//   }
//   loge_verb!(" - pronto.");
//
// NOTA: a sequência Begin/Continue/End é disciplina do chamador; nada
// verifica que um End fecha um Begin.
//
// NOTA: como o formato vem de concat!, `{var}` implícito não funciona.
// Use argumentos posicionais ou nomeados (`{v}`, v = var).
//
// =============================================================================

// =============================================================================
// DECORAÇÕES (literais, para uso dentro de concat!)
// =============================================================================

#[doc(hidden)]
#[macro_export]
macro_rules! __sevlog_eol {
    () => {
        "\r\n"
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __sevlog_err_header {
    () => {
        "\r\n********** ERROR **********\r\n"
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __sevlog_err_footer {
    () => {
        "\r\n***************************\r\n"
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __sevlog_warn_header {
    () => {
        "*** WARNING: "
    };
}

// =============================================================================
// DECLARAÇÃO E INICIALIZAÇÃO
// =============================================================================

/// Declara o armazenamento estático do sink.
///
/// Deve aparecer exatamente UMA vez no programa inteiro. Uma segunda
/// declaração falha no link (símbolo `__SEVLOG_GLOBALS` duplicado).
///
/// # Uso
/// ```ignore
/// sevlog::log_globals!(static SERIAL: Usart = unsafe { Usart::usart0(16_000_000) });
/// ```
#[cfg(any(test, feature = "log_error"))]
#[macro_export]
macro_rules! log_globals {
    ($vis:vis static $name:ident : $ty:ty = $init:expr $(;)?) => {
        $vis static $name: $crate::Channel<$ty> = $crate::Channel::new($init);

        #[doc(hidden)]
        #[no_mangle]
        pub static __SEVLOG_GLOBALS: u8 = 0;
    };
}

#[cfg(not(any(test, feature = "log_error")))]
#[macro_export]
macro_rules! log_globals {
    ($($t:tt)*) => {};
}

/// Configura o transporte e vincula o canal declarado por `log_globals!`.
///
/// # Uso
/// ```ignore
/// log_init!(SERIAL, 115_200);
/// ```
#[cfg(any(test, feature = "log_error"))]
#[macro_export]
macro_rules! log_init {
    ($channel:path, $baud:expr $(,)?) => {
        $crate::initialize(&$channel, $baud)
    };
}

#[cfg(not(any(test, feature = "log_error")))]
#[macro_export]
macro_rules! log_init {
    ($($t:tt)*) => {
        ()
    };
}

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================
//
// log_err! - Ativo com log_error ou superior.
// Usado para erros críticos. A mensagem fica entre dois banners.
//

/// Linha completa de erro.
///
/// # Uso
/// ```ignore
/// log_err!("x={}", 5);
/// // "\r\n********** ERROR **********\r\nx=5\r\n***************************\r\n\r\n"
/// ```
#[cfg(any(test, feature = "log_error"))]
#[macro_export]
macro_rules! log_err {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!(
                $crate::__sevlog_err_header!(),
                $fmt,
                $crate::__sevlog_err_footer!(),
                $crate::__sevlog_eol!()
            )
            $($arg)*
        ))
    };
}

/// Abre uma linha de erro (header + mensagem).
#[cfg(any(test, feature = "log_error"))]
#[macro_export]
macro_rules! logb_err {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!($crate::__sevlog_err_header!(), $fmt)
            $($arg)*
        ))
    };
}

/// Continua uma linha de erro aberta.
#[cfg(any(test, feature = "log_error"))]
#[macro_export]
macro_rules! logc_err {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!($fmt $($arg)*))
    };
}

/// Fecha uma linha de erro (mensagem + footer + CRLF).
#[cfg(any(test, feature = "log_error"))]
#[macro_export]
macro_rules! loge_err {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!($fmt, $crate::__sevlog_err_footer!(), $crate::__sevlog_eol!())
            $($arg)*
        ))
    };
}

#[cfg(not(any(test, feature = "log_error")))]
#[macro_export]
macro_rules! log_err {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_error")))]
#[macro_export]
macro_rules! logb_err {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_error")))]
#[macro_export]
macro_rules! logc_err {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_error")))]
#[macro_export]
macro_rules! loge_err {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARNING
// =============================================================================
//
// log_warn! - Ativo com log_warn ou superior.
// Situações suspeitas mas recuperáveis. Prefixo, sem footer.
//

/// Linha completa de aviso: `"*** WARNING: " + msg + CRLF`.
#[cfg(any(test, feature = "log_warn"))]
#[macro_export]
macro_rules! log_warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!($crate::__sevlog_warn_header!(), $fmt, $crate::__sevlog_eol!())
            $($arg)*
        ))
    };
}

#[cfg(any(test, feature = "log_warn"))]
#[macro_export]
macro_rules! logb_warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!($crate::__sevlog_warn_header!(), $fmt)
            $($arg)*
        ))
    };
}

#[cfg(any(test, feature = "log_warn"))]
#[macro_export]
macro_rules! logc_warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!($fmt $($arg)*))
    };
}

#[cfg(any(test, feature = "log_warn"))]
#[macro_export]
macro_rules! loge_warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!($fmt, $crate::__sevlog_eol!())
            $($arg)*
        ))
    };
}

#[cfg(not(any(test, feature = "log_warn")))]
#[macro_export]
macro_rules! log_warn {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_warn")))]
#[macro_export]
macro_rules! logb_warn {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_warn")))]
#[macro_export]
macro_rules! logc_warn {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_warn")))]
#[macro_export]
macro_rules! loge_warn {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================
//
// log! - Ativo com log_info ou superior.
// Fluxo normal de execução. Sem decoração.
//

/// Linha completa de informação: `msg + CRLF`.
#[cfg(any(test, feature = "log_info"))]
#[macro_export]
macro_rules! log {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!($fmt, $crate::__sevlog_eol!())
            $($arg)*
        ))
    };
}

#[cfg(any(test, feature = "log_info"))]
#[macro_export]
macro_rules! logb {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!($fmt $($arg)*))
    };
}

#[cfg(any(test, feature = "log_info"))]
#[macro_export]
macro_rules! logc {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!($fmt $($arg)*))
    };
}

#[cfg(any(test, feature = "log_info"))]
#[macro_export]
macro_rules! loge {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!($fmt, $crate::__sevlog_eol!())
            $($arg)*
        ))
    };
}

#[cfg(not(any(test, feature = "log_info")))]
#[macro_export]
macro_rules! log {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_info")))]
#[macro_export]
macro_rules! logb {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_info")))]
#[macro_export]
macro_rules! logc {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_info")))]
#[macro_export]
macro_rules! loge {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

// =============================================================================
// MACROS DE LOG - NÍVEL VERBOSE
// =============================================================================
//
// log_verb! - Ativo com log_verbose ou superior.
//

#[cfg(any(test, feature = "log_verbose"))]
#[macro_export]
macro_rules! log_verb {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!($fmt, $crate::__sevlog_eol!())
            $($arg)*
        ))
    };
}

#[cfg(any(test, feature = "log_verbose"))]
#[macro_export]
macro_rules! logb_verb {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!($fmt $($arg)*))
    };
}

#[cfg(any(test, feature = "log_verbose"))]
#[macro_export]
macro_rules! logc_verb {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!($fmt $($arg)*))
    };
}

#[cfg(any(test, feature = "log_verbose"))]
#[macro_export]
macro_rules! loge_verb {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!($fmt, $crate::__sevlog_eol!())
            $($arg)*
        ))
    };
}

#[cfg(not(any(test, feature = "log_verbose")))]
#[macro_export]
macro_rules! log_verb {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_verbose")))]
#[macro_export]
macro_rules! logb_verb {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_verbose")))]
#[macro_export]
macro_rules! logc_verb {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_verbose")))]
#[macro_export]
macro_rules! loge_verb {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================
//
// log_dbg! - Ativo apenas com log_debug.
// Detalhes de debugging. Normalmente desligado em produção.
//

#[cfg(any(test, feature = "log_debug"))]
#[macro_export]
macro_rules! log_dbg {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!($fmt, $crate::__sevlog_eol!())
            $($arg)*
        ))
    };
}

#[cfg(any(test, feature = "log_debug"))]
#[macro_export]
macro_rules! logb_dbg {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!($fmt $($arg)*))
    };
}

#[cfg(any(test, feature = "log_debug"))]
#[macro_export]
macro_rules! logc_dbg {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!($fmt $($arg)*))
    };
}

#[cfg(any(test, feature = "log_debug"))]
#[macro_export]
macro_rules! loge_dbg {
    ($fmt:literal $($arg:tt)*) => {
        $crate::print(::core::format_args!(
            ::core::concat!($fmt, $crate::__sevlog_eol!())
            $($arg)*
        ))
    };
}

#[cfg(not(any(test, feature = "log_debug")))]
#[macro_export]
macro_rules! log_dbg {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_debug")))]
#[macro_export]
macro_rules! logb_dbg {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_debug")))]
#[macro_export]
macro_rules! logc_dbg {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(not(any(test, feature = "log_debug")))]
#[macro_export]
macro_rules! loge_dbg {
    ($($t:tt)*) => {{ $crate::Emitted::ELIDED }};
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use crate::core::redirect;
    use crate::drivers::BufferSink;
    use crate::LogError;

    crate::log_globals!(static CAPTURE: BufferSink<1024> = BufferSink::new());

    /// Executa `f` com CAPTURE vinculado e devolve os bytes emitidos.
    fn capture(f: impl FnOnce()) -> Vec<u8> {
        let _guard = crate::TEST_LOCK.lock();
        log_init!(CAPTURE, 115_200);
        CAPTURE.lock().clear();
        f();
        let out = CAPTURE.lock().as_bytes().to_vec();
        redirect::release();
        out
    }

    macro_rules! assert_concat_law {
        ($whole:ident, $begin:ident, $cont:ident, $end:ident) => {{
            let split = capture(|| {
                $begin!("A={}", 1);
                $cont!(", B={}", 2);
                $end!(", C={}", 3);
            });
            let whole = capture(|| {
                $whole!("A={}, B={}, C={}", 1, 2, 3);
            });
            assert_eq!(split, whole, "{}", stringify!($whole));
        }};
    }

    #[test]
    fn error_decoration_is_exact() {
        let out = capture(|| {
            log_err!("x={}", 5);
        });
        assert_eq!(
            out,
            b"\r\n********** ERROR **********\r\nx=5\r\n***************************\r\n\r\n"
        );
    }

    #[test]
    fn warning_has_prefix_only() {
        let out = capture(|| {
            log_warn!("disk {}%", 91);
        });
        assert_eq!(out, b"*** WARNING: disk 91%\r\n");
    }

    #[test]
    fn undecorated_tiers_append_terminator_only() {
        let out = capture(|| {
            log!("info {}", 1);
            log_verb!("verb {}", 2);
            log_dbg!("dbg {}", 3);
        });
        assert_eq!(out, b"info 1\r\nverb 2\r\ndbg 3\r\n");
    }

    #[test]
    fn concatenation_law_holds_for_every_tier() {
        assert_concat_law!(log_err, logb_err, logc_err, loge_err);
        assert_concat_law!(log_warn, logb_warn, logc_warn, loge_warn);
        assert_concat_law!(log, logb, logc, loge);
        assert_concat_law!(log_verb, logb_verb, logc_verb, loge_verb);
        assert_concat_law!(log_dbg, logb_dbg, logc_dbg, loge_dbg);
    }

    #[test]
    fn only_whole_and_end_terminate_the_line() {
        let begin = capture(|| {
            logb_err!("b");
        });
        let cont = capture(|| {
            logc_err!("c");
        });
        let end = capture(|| {
            loge_err!("e");
        });
        let whole = capture(|| {
            log_warn!("w");
        });

        assert!(!begin.ends_with(b"\r\n"));
        assert!(!cont.ends_with(b"\r\n"));
        assert!(end.ends_with(b"\r\n"));
        assert!(whole.ends_with(b"\r\n"));
        assert_eq!(cont, b"c");
    }

    #[test]
    fn begin_carries_header_and_end_carries_footer() {
        let out = capture(|| {
            logb_warn!("fan ");
            logc_warn!("{}", 3);
            loge_warn!(" stalled");
        });
        assert_eq!(out, b"*** WARNING: fan 3 stalled\r\n");
    }

    #[test]
    fn returns_number_of_bytes_written() {
        let mut emitted = None;
        capture(|| {
            emitted = Some(log!("abc"));
        });
        assert_eq!(emitted.map(|e| e.result()), Some(Ok(5)));
    }

    #[test]
    fn named_arguments_are_forwarded() {
        let out = capture(|| {
            log_dbg!("{a}-{b}", a = 1, b = "z");
        });
        assert_eq!(out, b"1-z\r\n");
    }

    #[test]
    fn log_init_configures_the_sink() {
        capture(|| {});
        assert_eq!(CAPTURE.lock().baud(), Some(115_200));
    }

    #[test]
    fn unbound_output_is_reported() {
        let _guard = crate::TEST_LOCK.lock();
        let previous = redirect::release();
        assert_eq!(log!("nobody").result(), Err(LogError::Unbound));
        if let Some(prev) = previous {
            redirect::bind(prev);
        }
    }
}
