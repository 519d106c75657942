//! # Logging
//! src/logging.rs
//!
//! Se inicializa una sola vez desde `main`. El resto del crate solo usa
//! las macros de `log`.

use log::LevelFilter;
use std::io::Write;

/// Nivel de log según el flag `--verbose`
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Instala el logger global con formato `LEVEL:mensaje`
///
/// `RUST_LOG` tiene prioridad sobre el nivel elegido por `--verbose`.
pub fn init(verbose: bool) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}:{}", record.level(), record.args()))
        .try_init()
}
