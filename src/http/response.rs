//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! El servidor nunca arma la respuesta completa en memoria cuando envía un
//! archivo: primero escribe la cabecera (status line + headers) y después
//! el contenido del archivo en bloques de 1024 bytes.
//!
//! ## Formato
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Length: 13\r\n
//! \r\n
//! <bytes del archivo>
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use http_file_server::http::{Response, StatusCode};
//!
//! let head = Response::new(StatusCode::Ok).with_content_length(13);
//! assert_eq!(head.to_bytes(), b"HTTP/1.1 200 OK\r\nContent-Length: 13\r\n\r\n");
//! ```

use super::StatusCode;
use log::info;
use std::io::{self, Read, Write};

/// Tamaño de cada bloque enviado al cliente
pub const CHUNK_SIZE: usize = 1024;

/// Cabecera de una respuesta HTTP
///
/// Los headers se guardan en orden de inserción; el servidor solo emite
/// `Content-Length`, nunca `Content-Type`.
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP
    status: StatusCode,

    /// Headers HTTP en orden de inserción
    headers: Vec<(String, String)>,
}

impl Response {
    /// Crea una respuesta sin headers
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    /// Respuesta a un POST exitoso: `201 Created` sin headers ni body
    pub fn created() -> Self {
        Self::new(StatusCode::Created)
    }

    /// Respuesta sin body, con `Content-Length: 0`
    pub fn empty(status: StatusCode) -> Self {
        Self::new(status).with_content_length(0)
    }

    /// Agrega un header a la respuesta
    ///
    /// Si el header ya existe, se sobrescribe.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        match self.headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Declara el tamaño del body que sigue a la cabecera
    pub fn with_content_length(self, length: u64) -> Self {
        self.with_header("Content-Length", &length.to_string())
    }

    /// Convierte la cabecera a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        result.extend_from_slice(self.status.status_line().as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");

        result
    }

    /// Escribe la cabecera en el stream
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.to_bytes())
    }
}

/// Copia un body al stream en bloques de `CHUNK_SIZE` bytes
///
/// Cada bloque enviado se registra con un contador. Retorna la cantidad de
/// bytes copiados.
pub fn stream_body<R: Read, W: Write>(body: &mut R, out: &mut W) -> io::Result<u64> {
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut sent = 0u64;
    let mut send_num = 0u64;

    loop {
        let n = match body.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        out.write_all(&chunk[..n])?;
        sent += n as u64;
        send_num += 1;
        info!("Send {}", send_num);
    }

    Ok(sent)
}
