//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Este módulo implementa el parser mínimo que necesita el servidor de
//! archivos. Trabaja sobre los bytes crudos acumulados por el lector de
//! la conexión.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /upload.txt HTTP/1.1\r\n
//! Host: localhost:8084\r\n
//! Content-Length: 11\r\n
//! \r\n
//! hello world
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path HTTP/1.1` (la versión se acepta pero no se usa)
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Terminador**: `\r\n\r\n` que separa headers del body
//! 4. **Body**: bytes crudos, solo relevantes para POST
//!
//! El target no se decodifica: query string y fragmento quedan dentro del path.

use std::collections::HashMap;

/// Secuencia que marca el fin del bloque de headers
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Busca el terminador de headers directamente sobre los bytes
///
/// Retorna la posición donde empieza `\r\n\r\n`. No decodifica nada, así
/// que un carácter multibyte partido entre dos lecturas no es un problema.
///
/// # Ejemplo
/// ```
/// use http_file_server::http::request::find_header_terminator;
///
/// assert_eq!(find_header_terminator(b"GET / HTTP/1.1\r\n\r\n"), Some(14));
/// assert_eq!(find_header_terminator(b"GET / HTTP/1.1\r\n"), None);
/// ```
pub fn find_header_terminator(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(HEADER_TERMINATOR.len())
        .position(|window| window == HEADER_TERMINATOR)
}

/// Método HTTP del request
///
/// Solo GET y POST tienen semántica en el servidor; cualquier otro token
/// se conserva tal cual para poder responder 405.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un archivo
    GET,

    /// POST - Escribir el body en un archivo
    POST,

    /// Cualquier otro método (HEAD, PUT, DELETE, ...)
    Other(String),
}

impl Method {
    /// Parsea un método HTTP desde un string
    ///
    /// Nunca falla: los métodos desconocidos terminan en `Method::Other`.
    fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(name) => name,
        }
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP
    method: Method,

    /// Target del request, sin decodificar (ej: "/index.html?x=1")
    target: String,

    /// Headers HTTP (ej: {"Host": "localhost:8084"})
    headers: HashMap<String, String>,

    /// Bytes que siguen al terminador de headers
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request vacío
    EmptyRequest,

    /// No se encontró el terminador de headers
    IncompleteRequest,

    /// Request line con menos de dos tokens o que no es UTF-8
    InvalidRequestLine,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "Empty request"),
            ParseError::IncompleteRequest => write!(f, "Incomplete HTTP request"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request desde los bytes acumulados de la conexión
    ///
    /// El buffer debe contener el terminador de headers. Todo lo que venga
    /// después del primer `\r\n\r\n` es el body, copiado sin tocar.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use http_file_server::http::Request;
    ///
    /// let raw = b"POST /upload.txt HTTP/1.1\r\n\r\nhello world";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.target(), "/upload.txt");
    /// assert_eq!(request.body(), b"hello world");
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(ParseError::EmptyRequest);
        }

        let head_end = find_header_terminator(buffer).ok_or(ParseError::IncompleteRequest)?;

        let head = std::str::from_utf8(&buffer[..head_end])
            .map_err(|_| ParseError::InvalidRequestLine)?;
        let body = buffer[head_end + HEADER_TERMINATOR.len()..].to_vec();

        let mut lines = head.split("\r\n");

        // 1. Request line (split siempre produce al menos un elemento)
        let (method, target) = Self::parse_request_line(lines.next().unwrap_or(""))?;

        // 2. Headers
        let headers = Self::parse_headers(lines);

        Ok(Request {
            method,
            target,
            headers,
            body,
        })
    }

    /// Parsea la request line
    ///
    /// Formato: `METHOD /path HTTP/1.1`. Se requieren al menos método y
    /// path; la versión, si viene, no se usa.
    fn parse_request_line(line: &str) -> Result<(Method, String), ParseError> {
        let mut parts = line.split_whitespace();

        let method = parts.next().ok_or(ParseError::InvalidRequestLine)?;
        let target = parts.next().ok_or(ParseError::InvalidRequestLine)?;

        Ok((Method::from_token(method), target.to_string()))
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header tiene formato: "Name: Value". Las líneas sin `:` se
    /// ignoran; el dispatcher solo necesita la request line.
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> HashMap<String, String> {
        lines
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
            .collect()
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Obtiene el target tal como vino en la request line
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene un header específico, sin distinguir mayúsculas
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Valor de `Content-Length`, si el header existe y es un entero válido
    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length")?.parse().ok()
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
