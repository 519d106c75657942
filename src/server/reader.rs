//! # Lector de Requests
//! src/server/reader.rs
//!
//! Acumula bytes de la conexión hasta tener un request completo:
//!
//! 1. Lee bloques de 1024 bytes hasta encontrar `\r\n\r\n`
//! 2. Si los headers declaran `Content-Length`, sigue leyendo hasta tener
//!    el body completo (o hasta que el cliente cierre)
//!
//! El terminador se busca sobre los bytes crudos en cada iteración.

use crate::http::request::{find_header_terminator, HEADER_TERMINATOR};
use crate::http::Request;
use log::debug;
use std::io::{self, Read};

/// Tamaño de cada lectura del socket
pub const READ_CHUNK_SIZE: usize = 1024;

/// Lee un request de cualquier fuente `Read` (normalmente un `TcpStream`)
pub struct RequestReader<R> {
    inner: R,
    buffer: Vec<u8>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::with_capacity(READ_CHUNK_SIZE),
        }
    }

    /// Lee hasta tener un request completo
    ///
    /// Retorna `Ok(None)` si el cliente cierra la conexión antes de enviar
    /// el terminador de headers; no es un error.
    pub fn read_request(&mut self) -> io::Result<Option<Vec<u8>>> {
        let head_end = loop {
            if let Some(pos) = find_header_terminator(&self.buffer) {
                break pos;
            }

            if self.fill()? == 0 {
                debug!("Peer closed before end of headers ({} bytes)", self.buffer.len());
                return Ok(None);
            }
        };

        let body_start = head_end + HEADER_TERMINATOR.len();

        if let Some((length, expected)) = self.expected_len(body_start) {
            while self.buffer.len() < expected {
                if self.fill()? == 0 {
                    debug!(
                        "Peer closed with {} of {} body bytes",
                        self.buffer.len() - body_start,
                        length
                    );
                    break;
                }
            }

            // Cualquier byte extra pertenece a un request que no vamos a atender
            self.buffer.truncate(expected);
        }

        Ok(Some(std::mem::take(&mut self.buffer)))
    }

    /// Largo declarado del body y largo total esperado del buffer
    ///
    /// Un `Content-Length` que no cabe en `usize` se trata como ausente.
    fn expected_len(&self, body_start: usize) -> Option<(usize, usize)> {
        let length = Request::parse(&self.buffer[..body_start]).ok()?.content_length()?;

        match body_start.checked_add(length) {
            Some(expected) => Some((length, expected)),
            None => {
                debug!("Ignoring Content-Length {}: too large", length);
                None
            }
        }
    }

    /// Una lectura de hasta `READ_CHUNK_SIZE` bytes; retorna cuántos llegaron
    fn fill(&mut self) -> io::Result<usize> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];

        loop {
            match self.inner.read(&mut chunk) {
                Ok(n) => {
                    self.buffer.extend_from_slice(&chunk[..n]);
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
