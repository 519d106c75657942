//! # Dispatcher
//! src/dispatch/mod.rs
//!
//! Decide qué hacer con un request ya parseado. No toca el socket: solo
//! produce una `Action` que luego ejecuta el responder.
//!
//! ## Tabla de decisión (se evalúa en orden)
//!
//! ```text
//! POST                         → Upload
//! método ≠ GET                 → 405
//! target == "/"                → 200 + page.html
//! target fuera de la raíz      → 403
//! target no es archivo regular → 404 + 404.html
//! resto                        → 200 + archivo pedido
//! ```

use crate::files::{FileRoot, Resolved};
use crate::http::request::Method;
use crate::http::{Request, StatusCode};
use std::path::PathBuf;

/// Acción que resulta de despachar un request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Enviar un archivo con el status indicado
    Serve { status: StatusCode, path: PathBuf },

    /// Escribir el body del request en `target`
    Upload { target: String },

    /// Responder solo con el status, sin body
    Reject(StatusCode),
}

/// Aplica la tabla de decisión sobre un directorio raíz
#[derive(Debug, Clone)]
pub struct Dispatcher {
    root: FileRoot,
}

impl Dispatcher {
    /// Crea un dispatcher para el directorio raíz dado
    pub fn new(root: FileRoot) -> Self {
        Self { root }
    }

    /// Directorio raíz con el que trabaja el dispatcher
    pub fn root(&self) -> &FileRoot {
        &self.root
    }

    /// Decide la acción para un request
    pub fn decide(&self, request: &Request) -> Action {
        match request.method() {
            Method::POST => {
                return Action::Upload {
                    target: request.target().to_string(),
                }
            }
            Method::GET => {}
            Method::Other(_) => return Action::Reject(StatusCode::MethodNotAllowed),
        }

        if request.target() == "/" {
            return Action::Serve {
                status: StatusCode::Ok,
                path: self.root.index_path(),
            };
        }

        match self.root.resolve(request.target()) {
            Resolved::File(path) => Action::Serve {
                status: StatusCode::Ok,
                path,
            },
            Resolved::Missing => Action::Serve {
                status: StatusCode::NotFound,
                path: self.root.fallback_path(),
            },
            Resolved::Forbidden => Action::Reject(StatusCode::Forbidden),
        }
    }
}
