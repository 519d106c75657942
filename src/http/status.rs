//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Este módulo define los códigos de estado que emite el servidor de archivos.
//! Son pocos y cada uno tiene una status line fija:
//!
//! - **2xx**: Éxito (200 OK, 201 Created)
//! - **4xx**: Error del cliente (403, 404, 405)
//!
//! Las status lines se escriben tal cual, incluyendo el espacio extra
//! que lleva la línea del 405 (los clientes existentes dependen de ella).

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - Archivo encontrado y enviado
    Ok = 200,

    /// 201 Created - Body de un POST escrito a disco
    Created = 201,

    /// 403 Forbidden - El path resuelto escapa del directorio raíz
    Forbidden = 403,

    /// 404 Not Found - El archivo no existe (se sirve `404.html`)
    NotFound = 404,

    /// 405 Method Not Allowed - Método distinto de GET y POST
    MethodNotAllowed = 405,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use http_file_server::http::StatusCode;
    /// assert_eq!(StatusCode::Created.as_u16(), 201);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }

    /// Status line completa, con el `\r\n` final
    ///
    /// # Ejemplo
    /// ```
    /// use http_file_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.status_line(), "HTTP/1.1 200 OK\r\n");
    /// assert_eq!(
    ///     StatusCode::MethodNotAllowed.status_line(),
    ///     "HTTP/1.1 405 Method Not Allowed \r\n"
    /// );
    /// ```
    pub fn status_line(&self) -> &'static str {
        match self {
            StatusCode::Ok => "HTTP/1.1 200 OK\r\n",
            StatusCode::Created => "HTTP/1.1 201 Created\r\n",
            StatusCode::Forbidden => "HTTP/1.1 403 Forbidden\r\n",
            StatusCode::NotFound => "HTTP/1.1 404 Not Found\r\n",
            // El espacio antes de \r\n es parte del protocolo observado
            StatusCode::MethodNotAllowed => "HTTP/1.1 405 Method Not Allowed \r\n",
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
