use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

/// Serializes a response in the fixed HTTP/1.0 header order.
///
/// Status line, then `Date` (optional), `Content-Length` (always),
/// `Content-Type` and `Content-Disposition` (optional), a blank line, and the
/// body only when the content length is positive. Nothing follows the body.
pub fn serialize_response(resp: &Response) -> String {
    let mut out = serialize_head(resp);

    if resp.content_length() > 0 {
        if let Some(body) = resp.body() {
            out.push_str(body);
        }
    }

    out
}

/// Status line and headers, up to and including the blank line.
pub fn serialize_head(resp: &Response) -> String {
    let mut out = format!("{} {}\r\n", resp.version(), resp.status());

    if let Some(date) = resp.date() {
        out.push_str(&format!("Date: {}\r\n", date));
    }
    out.push_str(&format!("Content-Length: {}\r\n", resp.content_length()));
    if let Some(content_type) = resp.content_type() {
        out.push_str(&format!("Content-Type: {}\r\n", content_type.as_str()));
    }
    if let Some(disposition) = resp.content_disposition() {
        out.push_str(&format!("Content-Disposition: {}\r\n", disposition));
    }

    out.push_str("\r\n");
    out
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response).into_bytes(),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
