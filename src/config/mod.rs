//! Configuration
//!
//! Static configuration is loaded once at startup from an optional TOML file
//! and `UK__`-prefixed environment variables, then passed explicitly to the
//! store factory and the HTTP server.

mod structs;

pub use structs::*;
