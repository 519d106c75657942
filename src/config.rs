//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor de archivos con soporte
//! para argumentos CLI y variables de entorno. Se parsea una sola vez al
//! arrancar y no cambia durante la vida del proceso.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./http_file_server --port 8084 --folder ./www --verbose
//! ./http_file_server -p 9000 -f /srv/site -d
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8084 SERVE_DIR=./www ./http_file_server
//! ```

use crate::files::{INDEX_FILE, NOT_FOUND_FILE};
use clap::Parser;
use log::info;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Configuración del servidor de archivos
#[derive(Debug, Clone, Parser, Serialize)]
#[command(name = "http_file_server")]
#[command(about = "Servidor HTTP/1.1 de archivos estáticos, una conexión a la vez")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "8084", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha (0.0.0.0 = todas las interfaces)
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio desde el que se sirven y escriben archivos
    #[arg(short, long, default_value = "www", env = "SERVE_DIR")]
    pub folder: PathBuf,

    /// Agrega una pausa después de cada accept (para depurar latencia)
    #[arg(short, long)]
    pub delay: bool,

    /// Duración de la pausa en milisegundos
    #[arg(long = "delay-ms", default_value = "5000", env = "DELAY_MS")]
    pub delay_ms: u64,

    /// Activa el logging de depuración
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use http_file_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:8084");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pausa que se aplica después de cada accept, si está activada
    pub fn delay_duration(&self) -> Option<Duration> {
        if self.delay {
            Some(Duration::from_millis(self.delay_ms))
        } else {
            None
        }
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if !self.folder.is_dir() {
            return Err(format!(
                "Root folder {} does not exist or is not a directory",
                self.folder.display()
            ));
        }

        if self.delay && self.delay_ms == 0 {
            return Err("Delay must be > 0 ms when --delay is set".to_string());
        }

        Ok(())
    }

    /// Archivos del sitio que faltan en el directorio raíz
    ///
    /// El servidor arranca igual, pero `/` o los 404 no podrán responderse.
    pub fn missing_site_files(&self) -> Vec<&'static str> {
        [INDEX_FILE, NOT_FOUND_FILE]
            .into_iter()
            .filter(|name| !self.folder.join(name).is_file())
            .collect()
    }

    /// Configuración serializada como JSON (para el log de depuración)
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Registra un resumen de la configuración
    pub fn log_summary(&self) {
        info!("Address:  {}", self.address());
        info!("Folder:   {}", self.folder.display());
        match self.delay_duration() {
            Some(delay) => info!("Delay:    {} ms after each accept", delay.as_millis()),
            None => info!("Delay:    disabled"),
        }
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 8084,
            host: "0.0.0.0".to_string(),
            folder: PathBuf::from("www"),
            delay: false,
            delay_ms: 5_000,
            verbose: false,
        }
    }
}
