//! Sandboxed file storage behind the HTTP layer.
//!
//! `FileServer` implements `RequestHandler`: GET reads a file or lists a
//! directory, POST creates or replaces a file. Targets are resolved inside
//! the configured root and anything escaping it is refused.

pub mod error;
pub mod sandbox;
pub mod server;

pub use error::FileError;
pub use server::FileServer;
