//! # HTTP File Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo que sirve archivos estáticos desde un
//! directorio raíz (GET) y escribe el body de los POST a disco. Atiende
//! una conexión a la vez y cierra cada conexión después de un request.
//!
//! ## Arquitectura
//!
//! ```text
//! Listener → Request Reader → Dispatcher → Responder
//! ```
//!
//! - `config`: Argumentos CLI y variables de entorno
//! - `http`: Parsing de requests, cabeceras de respuesta, status codes
//! - `files`: Resolución segura de paths dentro del directorio raíz
//! - `dispatch`: Tabla de decisión (200 / 403 / 404 / 405 / upload)
//! - `server`: Listener, lector de requests y responder
//! - `logging`: Inicialización del logger
//! - `shutdown`: Salida limpia con Ctrl-C
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use http_file_server::config::Config;
//! use http_file_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::bind(config).unwrap();
//! server.run();
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod files;
pub mod http;
pub mod logging;
pub mod server;
pub mod shutdown;

pub use error::ServeError;
