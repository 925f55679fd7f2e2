//! httpfs - HTTP/1.0 file server
//!
//! Serves and accepts files under a configured root directory.

pub mod config;
pub mod files;
pub mod http;
pub mod logging;
pub mod server;
