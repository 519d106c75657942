//! # Apagado por Señal
//! src/shutdown.rs
//!
//! El loop de accept bloquea indefinidamente, así que SIGINT/SIGTERM no se
//! pueden atender desde él. El handler imprime el aviso y termina el
//! proceso con código 0; solo usa funciones async-signal-safe.

const SHUTDOWN_NOTICE: &[u8] = b"Shutting down server\n";

extern "C" fn handle_interrupt(_sig: libc::c_int) {
    unsafe {
        libc::write(
            libc::STDOUT_FILENO,
            SHUTDOWN_NOTICE.as_ptr() as *const libc::c_void,
            SHUTDOWN_NOTICE.len(),
        );
        libc::_exit(0);
    }
}

/// Instala el handler de SIGINT (Ctrl-C) y SIGTERM
pub fn install() {
    unsafe {
        libc::signal(libc::SIGINT, handle_interrupt as libc::sighandler_t);
        libc::signal(libc::SIGTERM, handle_interrupt as libc::sighandler_t);
    }
}
