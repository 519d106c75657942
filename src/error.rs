//! # Errores del Servidor
//! src/error.rs
//!
//! Un solo tipo de error para todo lo que puede fallar mientras se atiende
//! una conexión. El servidor lo registra y cierra la conexión; nunca llega
//! a detener el loop de accept.

use crate::http::request::ParseError;
use std::io;
use std::path::PathBuf;

/// Errores que pueden ocurrir al atender una conexión
#[derive(Debug)]
pub enum ServeError {
    /// Error de socket o de sistema de archivos
    Io(io::Error),

    /// El request no se pudo parsear
    Parse(ParseError),

    /// No existe el archivo de fallback (`404.html`)
    FallbackMissing(PathBuf),
}

impl std::fmt::Display for ServeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServeError::Io(e) => write!(f, "I/O error: {}", e),
            ServeError::Parse(e) => write!(f, "Malformed request: {}", e),
            ServeError::FallbackMissing(path) => {
                write!(f, "Fallback file not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for ServeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServeError::Io(e) => Some(e),
            ServeError::Parse(e) => Some(e),
            ServeError::FallbackMissing(_) => None,
        }
    }
}

impl From<io::Error> for ServeError {
    fn from(e: io::Error) -> Self {
        ServeError::Io(e)
    }
}

impl From<ParseError> for ServeError {
    fn from(e: ParseError) -> Self {
        ServeError::Parse(e)
    }
}
