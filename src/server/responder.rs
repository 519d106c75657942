//! # Responder
//! src/server/responder.rs
//!
//! Ejecuta la `Action` que decidió el dispatcher sobre el stream:
//!
//! - `Serve`: cabecera con `Content-Length` + archivo en bloques de 1024
//! - `Upload`: escribe el body a disco y responde `201 Created`
//! - `Reject`: solo la status line y `Content-Length: 0`
//!
//! El archivo se abre antes de escribir la cabecera. Si desapareció entre
//! la decisión y el envío, el status pasa a 404 y se envía `404.html`.

use crate::dispatch::Action;
use crate::error::ServeError;
use crate::files::{FileRoot, Resolved};
use crate::http::response::stream_body;
use crate::http::{Request, Response, StatusCode};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Envía respuestas para un directorio raíz
#[derive(Debug, Clone)]
pub struct Responder {
    root: FileRoot,
}

impl Responder {
    pub fn new(root: FileRoot) -> Self {
        Self { root }
    }

    /// Ejecuta una acción y retorna el status que realmente se envió
    pub fn respond<W: Write>(
        &self,
        out: &mut W,
        action: Action,
        request: &Request,
    ) -> Result<StatusCode, ServeError> {
        let status = match action {
            Action::Serve { status, path } => self.send_file(out, status, &path)?,
            Action::Upload { target } => self.store_upload(out, &target, request.body())?,
            Action::Reject(status) => {
                Response::empty(status).write_to(out)?;
                status
            }
        };

        out.flush()?;
        Ok(status)
    }

    /// Envía un archivo con el status indicado
    ///
    /// Si el archivo ya no existe se fuerza el 404 con `404.html`; si
    /// tampoco existe el fallback, el error sube al handler de la conexión.
    pub fn send_file<W: Write>(
        &self,
        out: &mut W,
        status: StatusCode,
        path: &Path,
    ) -> Result<StatusCode, ServeError> {
        let (status, mut file) = match File::open(path) {
            Ok(file) => (status, file),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if status != StatusCode::NotFound {
                    warn!("{} disappeared before sending, falling back to 404", path.display());
                }
                (StatusCode::NotFound, self.open_fallback()?)
            }
            Err(e) => return Err(e.into()),
        };

        let size = file.metadata()?.len();

        Response::new(status).with_content_length(size).write_to(out)?;
        let sent = stream_body(&mut file, out)?;

        debug!("Sent {} of {} bytes", sent, size);
        Ok(status)
    }

    /// Escribe el body de un POST en la raíz y responde `201 Created`
    pub fn store_upload<W: Write>(
        &self,
        out: &mut W,
        target: &str,
        body: &[u8],
    ) -> Result<StatusCode, ServeError> {
        match self.root.resolve_upload(target) {
            Resolved::File(path) => {
                self.root.write_upload(&path, body)?;
                info!("Wrote {} bytes to {}", body.len(), path.display());

                Response::created().write_to(out)?;
                Ok(StatusCode::Created)
            }
            Resolved::Missing => {
                warn!("Upload target {} has no parent directory", target);
                self.send_file(out, StatusCode::NotFound, &self.root.fallback_path())
            }
            Resolved::Forbidden => {
                warn!("Upload target {} rejected", target);
                Response::empty(StatusCode::Forbidden).write_to(out)?;
                Ok(StatusCode::Forbidden)
            }
        }
    }

    fn open_fallback(&self) -> Result<File, ServeError> {
        let fallback = self.root.fallback_path();

        File::open(&fallback).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ServeError::FallbackMissing(fallback),
            _ => ServeError::Io(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::{INDEX_FILE, NOT_FOUND_FILE};
    use std::fs;
    use tempfile::tempdir;

    fn responder() -> (tempfile::TempDir, Responder) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "welcome").unwrap();
        fs::write(dir.path().join(NOT_FOUND_FILE), "missing").unwrap();
        let root = FileRoot::new(dir.path()).unwrap();
        (dir, Responder::new(root))
    }

    fn request(raw: &[u8]) -> Request {
        Request::parse(raw).unwrap()
    }

    #[test]
    fn test_send_file() {
        let (_dir, r) = responder();
        let mut out = Vec::new();

        let status = r.send_file(&mut out, StatusCode::Ok, &r.root.index_path()).unwrap();

        assert_eq!(status, StatusCode::Ok);
        assert_eq!(out, b"HTTP/1.1 200 OK\r\nContent-Length: 7\r\n\r\nwelcome");
    }

    #[test]
    fn test_vanished_file_forces_404() {
        let (_dir, r) = responder();
        let mut out = Vec::new();
        let gone = r.root.path().join("gone.html");

        let status = r.send_file(&mut out, StatusCode::Ok, &gone).unwrap();

        assert_eq!(status, StatusCode::NotFound);
        assert_eq!(out, b"HTTP/1.1 404 Not Found\r\nContent-Length: 7\r\n\r\nmissing");
    }

    #[test]
    fn test_missing_fallback_is_an_error() {
        let (dir, r) = responder();
        fs::remove_file(dir.path().join(NOT_FOUND_FILE)).unwrap();
        let mut out = Vec::new();

        let result = r.send_file(&mut out, StatusCode::NotFound, &r.root.fallback_path());

        assert!(matches!(result, Err(ServeError::FallbackMissing(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_reject_has_no_body() {
        let (_dir, r) = responder();
        let mut out = Vec::new();
        let req = request(b"PUT / HTTP/1.1\r\n\r\n");

        let status = r
            .respond(&mut out, Action::Reject(StatusCode::MethodNotAllowed), &req)
            .unwrap();

        assert_eq!(status, StatusCode::MethodNotAllowed);
        assert_eq!(out, b"HTTP/1.1 405 Method Not Allowed \r\nContent-Length: 0\r\n\r\n");
    }

    #[test]
    fn test_upload_writes_body() {
        let (dir, r) = responder();
        let mut out = Vec::new();
        let req = request(b"POST /upload.txt HTTP/1.1\r\n\r\nhello world");
        let action = Action::Upload { target: "/upload.txt".to_string() };

        let status = r.respond(&mut out, action, &req).unwrap();

        assert_eq!(status, StatusCode::Created);
        assert_eq!(out, b"HTTP/1.1 201 Created\r\n\r\n");
        assert_eq!(fs::read(dir.path().join("upload.txt")).unwrap(), b"hello world");
    }

    #[test]
    fn test_upload_forbidden() {
        let (_dir, r) = responder();
        let mut out = Vec::new();

        let status = r.store_upload(&mut out, "/../evil.txt", b"x").unwrap();

        assert_eq!(status, StatusCode::Forbidden);
        assert_eq!(out, b"HTTP/1.1 403 Forbidden\r\nContent-Length: 0\r\n\r\n");
    }

    #[test]
    fn test_upload_missing_parent() {
        let (_dir, r) = responder();
        let mut out = Vec::new();

        let status = r.store_upload(&mut out, "/no/such/dir.txt", b"x").unwrap();

        assert_eq!(status, StatusCode::NotFound);
        assert!(out.starts_with(b"HTTP/1.1 404 Not Found\r\n"));
        assert!(out.ends_with(b"missing"));
    }
}
