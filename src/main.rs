//! # HTTP File Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada: parsea la configuración, inicializa el logging,
//! instala el handler de Ctrl-C y corre el loop de accept.

use http_file_server::config::Config;
use http_file_server::server::Server;
use http_file_server::{logging, shutdown};
use log::{debug, warn};

fn main() {
    let config = Config::new();

    if let Err(e) = logging::init(config.verbose) {
        eprintln!("Could not initialize logging: {}", e);
    }

    debug!("{}", config.to_json());
    config.log_summary();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    for missing in config.missing_site_files() {
        warn!("{} not found in {}", missing, config.folder.display());
    }

    shutdown::install();

    let server = match Server::bind(config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("💥 Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    server.run()
}
