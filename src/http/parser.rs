use thiserror::Error;
use tokio::io::AsyncBufRead;

use crate::http::codec::{read_body, read_header_lines};
use crate::http::mime::ContentType;
use crate::http::request::{HTTP_VERSION, Method, Request, RequestBuilder};
use crate::http::response::{Response, ResponseBuilder, StatusCode};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("request header is ill-formed")]
    MalformedHeader,
    #[error("request line is ill-formed (three tokens are needed): {0}")]
    MalformedRequestLine(String),
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),
    #[error("wrong format for target path: {0}")]
    MalformedTarget(String),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(String),
    #[error("no content length for a POST request")]
    MissingContentLength,
    #[error("problem reading the request: {0}")]
    IoFailure(#[from] std::io::Error),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ParseError {
    /// Status used to answer a request that failed with this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ParseError::UnsupportedVersion(_) => StatusCode::VersionNotSupported,
            ParseError::IoFailure(_) => StatusCode::InternalServerError,
            _ => StatusCode::BadRequest,
        }
    }
}

/// Reads one request from the stream: header block, validation, then body.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let lines = read_header_lines(reader).await?;
    parse_request(&lines, reader).await
}

/// Validates header lines and reads the body they announce.
///
/// Only `Content-Length` is interpreted among the header fields; every other
/// line is ignored. When it appears more than once the last value wins.
pub async fn parse_request<R>(lines: &[String], reader: &mut R) -> Result<Request, ParseError>
where
    R: AsyncBufRead + Unpin,
{
    let request_line = lines.first().ok_or(ParseError::MalformedHeader)?;

    // Leading whitespace counts as an empty first token; trailing is dropped.
    if request_line.starts_with(char::is_whitespace) {
        return Err(ParseError::MalformedRequestLine(request_line.clone()));
    }

    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let &[method, target, version] = parts.as_slice() else {
        return Err(ParseError::MalformedRequestLine(request_line.clone()));
    };

    let method = Method::from_token(method)
        .ok_or_else(|| ParseError::UnsupportedMethod(method.to_string()))?;

    if !target.starts_with('/') {
        return Err(ParseError::MalformedTarget(target.to_string()));
    }

    if !version.eq_ignore_ascii_case(HTTP_VERSION) {
        return Err(ParseError::UnsupportedVersion(version.to_string()));
    }

    let mut content_length = None;
    for line in &lines[1..] {
        if let Some(n) = parse_content_length(line)? {
            content_length = Some(n);
        }
    }

    if method == Method::POST && content_length.is_none() {
        return Err(ParseError::MissingContentLength);
    }

    let mut builder = RequestBuilder::new(method)
        .target(target)
        .version(version);

    if let Some(n) = content_length {
        builder = builder.content_length(n);
        if n > 0 {
            let body = read_body(reader, n).await?;
            builder = builder.body(body);
        }
    }

    Ok(builder.build())
}

/// Matches `content-length: <digits>` case-insensitively, exactly one space
/// after the colon.
fn parse_content_length(line: &str) -> Result<Option<u64>, ParseError> {
    let line = line.trim().to_ascii_lowercase();
    let Some(digits) = line.strip_prefix("content-length: ") else {
        return Ok(None);
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }

    digits
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ParseError::MalformedHeader)
}

/// Parses a serialized response back into a [`Response`].
///
/// Accepts exactly what [`serialize_response`](crate::http::writer::serialize_response)
/// produces. Unknown header names are rejected.
pub fn parse_response(raw: &str) -> Result<Response, ParseError> {
    let (head, body) = raw
        .split_once("\r\n\r\n")
        .ok_or_else(|| ParseError::MalformedResponse("missing blank line".into()))?;

    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap_or_default();

    let mut parts = status_line.splitn(3, ' ');
    let version = parts.next().unwrap_or_default();
    let code = parts.next().unwrap_or_default();
    let reason = parts.next().unwrap_or_default();

    if version != HTTP_VERSION {
        return Err(ParseError::UnsupportedVersion(version.to_string()));
    }

    let status = code
        .parse::<u16>()
        .ok()
        .and_then(StatusCode::from_u16)
        .filter(|s| s.reason_phrase() == reason)
        .ok_or_else(|| ParseError::MalformedResponse(status_line.to_string()))?;

    let mut builder = ResponseBuilder::new(status);
    let mut content_length = None;

    for line in lines {
        let (name, value) = line
            .split_once(": ")
            .ok_or_else(|| ParseError::MalformedResponse(line.to_string()))?;

        match name {
            "Date" => builder = builder.date(value),
            "Content-Length" => {
                let n = value
                    .parse::<usize>()
                    .map_err(|_| ParseError::MalformedResponse(line.to_string()))?;
                content_length = Some(n);
            }
            "Content-Type" => {
                let ct = ContentType::from_mime(value)
                    .ok_or_else(|| ParseError::MalformedResponse(line.to_string()))?;
                builder = builder.content_type(ct);
            }
            "Content-Disposition" => builder = builder.content_disposition(value),
            _ => return Err(ParseError::MalformedResponse(line.to_string())),
        }
    }

    let content_length = content_length
        .ok_or_else(|| ParseError::MalformedResponse("missing Content-Length".into()))?;

    if body.len() != content_length {
        return Err(ParseError::MalformedResponse(format!(
            "body is {} bytes, Content-Length says {}",
            body.len(),
            content_length
        )));
    }

    Ok(builder.body(body).build())
}
