//! urlkeep - a small URL shortener service
//!
//! Maps randomly generated 6-character codes to target URLs, redirects
//! visitors and counts their visits.
//!
//! # Features
//! - **server**: HTTP server and JSON API (default)
//!
//! # Architecture
//! - `utils`: short-code generation and validation
//! - `storage`: the record store and its memory / SQL backends
//! - `api`: HTTP handlers and routing
//! - `config`: TOML + environment configuration
//! - `system`: logging and server startup

#[cfg(feature = "server")]
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod storage;
pub mod system;
pub mod utils;
