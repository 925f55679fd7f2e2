//! HTTP/1.0 protocol implementation.
//!
//! One request per connection: no keep-alive, no chunked transfer.
//!
//! # Architecture
//!
//! - **`codec`**: CRLF header framing and body reading from a byte stream
//! - **`parser`**: Request validation and the response round-trip parser
//! - **`request`**: Parsed request value
//! - **`response`**: Status codes and the response value with its builder
//! - **`writer`**: Serializes and writes responses to the client
//! - **`mime`**: Content type lookup by file extension
//! - **`handler`**: The pluggable `RequestHandler` capability
//! - **`connection`**: Per-connection state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Header block + body
//!        └──────┬──────┘
//!               ├─ Parse error → Writing (error response)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← RequestHandler::handle
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, shut down the stream
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```

pub mod codec;
pub mod connection;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

pub use handler::RequestHandler;
pub use request::{Method, Request};
pub use response::{Response, StatusCode};
