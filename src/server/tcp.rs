//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Implementación del listener: acepta una conexión, la atiende completa
//! (leer → despachar → responder) y recién entonces vuelve a `accept`.
//! Cada conexión atiende un único request y se cierra.
//!
//! La forma de atender cada conexión aceptada pasa por `ConnectionStrategy`;
//! la única estrategia es `Sequential`.

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::ServeError;
use crate::files::FileRoot;
use crate::http::{Request, StatusCode};
use crate::server::reader::RequestReader;
use crate::server::responder::Responder;
use log::{debug, error, info};
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;

/// Atiende una conexión: lee un request, lo despacha y responde
#[derive(Debug, Clone)]
pub struct ConnectionHandler {
    dispatcher: Dispatcher,
    responder: Responder,
}

impl ConnectionHandler {
    pub fn new(root: FileRoot) -> Self {
        Self {
            dispatcher: Dispatcher::new(root.clone()),
            responder: Responder::new(root),
        }
    }

    /// Procesa un único request del stream
    ///
    /// Retorna `Ok(None)` si el cliente cerró sin enviar un request completo.
    pub fn handle<S: Read + Write>(&self, stream: &mut S) -> Result<Option<StatusCode>, ServeError> {
        let raw = match RequestReader::new(&mut *stream).read_request()? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let request = Request::parse(&raw)?;
        info!("{} {}", request.method().as_str(), request.target());

        let action = self.dispatcher.decide(&request);
        debug!("Action: {:?}", action);

        let status = self.responder.respond(stream, action, &request)?;
        Ok(Some(status))
    }

    /// Atiende una conexión aceptada y la cierra
    ///
    /// Cualquier error se registra aquí; nunca llega al loop de accept.
    pub fn serve(&self, mut stream: TcpStream) {
        match self.handle(&mut stream) {
            Ok(Some(status)) => info!("Response: {}", status),
            Ok(None) => debug!("No request received"),
            Err(e) => error!("Error handling client request: {}", e),
        }

        // El drop del stream cierra la conexión
        drop(stream);
        info!("Connection closed");
    }
}

/// Cómo se atiende cada conexión aceptada
pub trait ConnectionStrategy {
    fn dispatch(&self, stream: TcpStream, handler: &ConnectionHandler);
}

/// Atiende la conexión en el mismo thread del accept
///
/// El siguiente cliente espera en el backlog del sistema operativo.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl ConnectionStrategy for Sequential {
    fn dispatch(&self, stream: TcpStream, handler: &ConnectionHandler) {
        handler.serve(stream);
    }
}

/// Servidor HTTP/1.1 de archivos
pub struct Server<S = Sequential> {
    config: Config,
    listener: TcpListener,
    handler: ConnectionHandler,
    strategy: S,
}

impl Server<Sequential> {
    /// Abre el directorio raíz y hace bind del socket
    ///
    /// En Unix `TcpListener::bind` activa `SO_REUSEADDR`.
    pub fn bind(config: Config) -> io::Result<Self> {
        let root = FileRoot::new(&config.folder)?;
        let listener = TcpListener::bind(config.address())?;

        info!("Listening on port {}", listener.local_addr()?.port());
        debug!("Serving from {}", root.path().display());

        Ok(Self {
            config,
            listener,
            handler: ConnectionHandler::new(root),
            strategy: Sequential,
        })
    }
}

impl<S: ConnectionStrategy> Server<S> {
    /// Reemplaza la estrategia con la que se atienden las conexiones
    pub fn with_strategy<T: ConnectionStrategy>(self, strategy: T) -> Server<T> {
        Server {
            config: self.config,
            listener: self.listener,
            handler: self.handler,
            strategy,
        }
    }

    /// Dirección real en la que escucha (útil con puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Loop de accept; solo termina con una señal
    pub fn run(&self) -> ! {
        loop {
            if let Err(e) = self.accept_one() {
                error!("Error accepting connection: {}", e);
            }
        }
    }

    /// Acepta y atiende una sola conexión
    pub fn accept_one(&self) -> io::Result<()> {
        let (stream, peer) = self.listener.accept()?;
        info!("Connection from: {}", peer);

        if let Some(delay) = self.config.delay_duration() {
            debug!("Sleeping {} ms", delay.as_millis());
            thread::sleep(delay);
        }

        self.strategy.dispatch(stream, &self.handler);
        Ok(())
    }
}
