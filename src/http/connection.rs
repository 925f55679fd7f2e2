use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::handler::RequestHandler;
use crate::http::parser::read_request;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::{ResponseWriter, serialize_head};

/// One client connection: a single request, a single response, then close.
pub struct Connection<S, H> {
    stream: BufReader<S>,
    handler: Arc<H>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S, H> Connection<S, H>
where
    S: AsyncRead + AsyncWrite + Unpin,
    H: RequestHandler,
{
    pub fn new(stream: S, handler: Arc<H>) -> Self {
        Self {
            stream: BufReader::new(stream),
            handler,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection to completion.
    ///
    /// Parse failures are answered with their mapped status; only a failure
    /// to write the response back surfaces as an error.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match read_request(&mut self.stream).await {
                        Ok(request) => {
                            tracing::debug!(request = %request, "Request received");
                            ConnectionState::Processing(request)
                        }
                        Err(e) => {
                            tracing::debug!(error = %e, status = e.status().as_u16(), "Rejected request");
                            let response = Response::error(e.status(), &e.to_string());
                            ConnectionState::Writing(ResponseWriter::new(&response))
                        }
                    };
                }

                ConnectionState::Processing(request) => {
                    let response = self.handler.handle(request).await;
                    tracing::debug!(
                        status = %response.status(),
                        content_length = response.content_length(),
                        "Response ready:\n{}",
                        serialize_head(&response).trim_end()
                    );
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}
