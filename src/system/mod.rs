//! System-level modules
//!
//! - Logging initialisation
//! - HTTP server startup

pub mod logging;
#[cfg(feature = "server")]
pub mod server;

pub use logging::init_logging;
#[cfg(feature = "server")]
pub use server::run_server;
