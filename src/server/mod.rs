//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta una conexión a la vez
//! 3. Lee el request hasta el terminador de headers
//! 4. Despacha y envía la respuesta
//! 5. Cierra la conexión

pub mod reader;
pub mod responder;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{ConnectionHandler, ConnectionStrategy, Sequential, Server};
