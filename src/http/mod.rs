//! # Módulo HTTP
//! src/http/mod.rs
//!
//! Subconjunto de HTTP/1.1 que habla el servidor de archivos:
//!
//! - Parsing de la request line, headers y body crudo
//! - Cabeceras de respuesta con `Content-Length`
//! - Status lines fijas (200, 201, 403, 404, 405)
//!
//! No hay chunked transfer encoding, ni `Content-Type`, ni conexiones
//! persistentes.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /page.html HTTP/1.1\r\n
//! Host: localhost:8084\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Length: 13\r\n
//! \r\n
//! <h1>hola</h1>
//! ```

pub mod request;   // Parsing de HTTP requests
pub mod response;  // Cabeceras de respuesta y envío por bloques
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{Method, Request};
pub use response::Response;
pub use status::StatusCode;
