//! Macros de log con control de verbosidad (salida a stderr).
//!
//! Niveles:
//! - 0: SILENT (solo errores, que siempre se imprimen con `eprintln!`)
//! - 1: CHANGES (semestres armados, avance del puntero)
//! - 2: CHECKS (candidatos descartados y motivos)
//! - 3: DEBUG (pesos y puntajes completos)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Interpreta el valor de `COURSEPATH_VERBOSITY`; valores inválidos caen a CHANGES.
pub fn parse_verbosity(raw: Option<&str>) -> u8 {
    raw.and_then(|s| s.trim().parse::<u8>().ok())
        .map(|v| v.min(VERBOSITY_DEBUG))
        .unwrap_or(VERBOSITY_CHANGES)
}

#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHANGES {
            eprintln!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            eprintln!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}
