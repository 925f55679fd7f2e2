use std::fmt;
use std::time::SystemTime;

use crate::http::mime::ContentType;
use crate::http::request::HTTP_VERSION;

/// HTTP status codes supported by the server.
///
/// - `Ok` (200): File or directory listing returned
/// - `Created` (201): File written by POST
/// - `BadRequest` (400): Malformed request
/// - `Forbidden` (403): Sandbox escape or permission denial
/// - `NotFound` (404): No such file
/// - `InternalServerError` (500): I/O failure on the server side
/// - `VersionNotSupported` (505): Anything but HTTP/1.0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 505 Version Not Supported
    VersionNotSupported,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpfs::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::VersionNotSupported.as_u16(), 505);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::VersionNotSupported => 505,
        }
    }

    /// Returns the reason phrase written after the numeric code.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpfs::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::VersionNotSupported => "Version Not Supported",
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Ok),
            201 => Some(StatusCode::Created),
            400 => Some(StatusCode::BadRequest),
            403 => Some(StatusCode::Forbidden),
            404 => Some(StatusCode::NotFound),
            500 => Some(StatusCode::InternalServerError),
            505 => Some(StatusCode::VersionNotSupported),
            _ => None,
        }
    }
}

impl fmt::Display for StatusCode {
    /// Formats as the status line fragment, e.g. `404 Not Found`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// Current time as an RFC 1123 date, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub fn http_date_now() -> String {
    httpdate::fmt_http_date(SystemTime::now())
}

/// An HTTP/1.0 response ready to be serialized.
///
/// Immutable once built. `content_length` always equals the UTF-8 byte
/// length of the body, or 0 when there is none; the builder computes it so
/// the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    version: String,
    status: StatusCode,
    date: Option<String>,
    content_length: usize,
    content_type: Option<ContentType>,
    content_disposition: Option<String>,
    body: Option<String>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use httpfs::http::response::{ResponseBuilder, StatusCode};
/// # use httpfs::http::mime::ContentType;
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type(ContentType::Json)
///     .body("{}")
///     .build();
/// assert_eq!(response.content_length(), 2);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    date: Option<String>,
    content_type: Option<ContentType>,
    content_disposition: Option<String>,
    body: Option<String>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            date: None,
            content_type: None,
            content_disposition: None,
            body: None,
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Stamps the response with the current time.
    pub fn date_now(self) -> Self {
        self.date(http_date_now())
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn content_disposition(mut self, disposition: impl Into<String>) -> Self {
        self.content_disposition = Some(disposition.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the final Response.
    ///
    /// Content-Length is derived from the body. An empty body is stored as
    /// no body at all, since it never reaches the wire.
    pub fn build(self) -> Response {
        let body = self.body.filter(|b| !b.is_empty());
        let content_length = body.as_ref().map_or(0, |b| b.len());

        Response {
            version: HTTP_VERSION.to_string(),
            status: self.status,
            date: self.date,
            content_length,
            content_type: self.content_type,
            content_disposition: self.content_disposition,
            body,
        }
    }
}

impl Response {
    /// Shorthand for `ResponseBuilder::new(status)`.
    pub fn builder(status: StatusCode) -> ResponseBuilder {
        ResponseBuilder::new(status)
    }

    /// Minimal response used for every classified failure.
    ///
    /// Carries the current date and the message as body; an empty message
    /// yields `Content-Length: 0`.
    pub fn error(status: StatusCode, message: &str) -> Self {
        ResponseBuilder::new(status)
            .date_now()
            .body(message)
            .build()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn content_length(&self) -> usize {
        self.content_length
    }

    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type
    }

    pub fn content_disposition(&self) -> Option<&str> {
        self.content_disposition.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
