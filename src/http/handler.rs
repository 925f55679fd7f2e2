use std::future::Future;

use crate::http::request::Request;
use crate::http::response::Response;

/// Turns a parsed request into a response.
///
/// The connection layer is generic over this trait, so the file server can be
/// swapped for another implementation (for instance an echo handler in
/// tests). Implementations are shared between connection tasks.
pub trait RequestHandler: Send + Sync + 'static {
    fn handle(&self, request: Request) -> impl Future<Output = Response> + Send;
}
