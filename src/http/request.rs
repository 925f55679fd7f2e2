use std::fmt;

/// The only protocol version the server speaks.
pub const HTTP_VERSION: &str = "HTTP/1.0";

/// HTTP request methods.
///
/// Only GET and POST are accepted. Matching on the wire is case-insensitive;
/// the parsed value is always normalized to one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Read a file or list a directory
    GET,
    /// POST - Create or replace a file
    POST,
}

impl Method {
    /// Parses an HTTP method from a request-line token.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpfs::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_token("post"), Some(Method::POST));
    /// assert_eq!(Method::from_token("PUT"), None);
    /// ```
    pub fn from_token(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("GET") {
            Some(Method::GET)
        } else if s.eq_ignore_ascii_case("POST") {
            Some(Method::POST)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed HTTP/1.0 request.
///
/// Built once per connection and never mutated afterwards. The body is
/// present only when the declared content length was greater than zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    target: String,
    version: String,
    content_length: Option<u64>,
    body: Option<String>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Method,
    target: Option<String>,
    version: Option<String>,
    content_length: Option<u64>,
    body: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            target: None,
            version: None,
            content_length: None,
            body: None,
        }
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn content_length(mut self, length: u64) -> Self {
        self.content_length = Some(length);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the final Request.
    ///
    /// The target defaults to `/` and the version to `HTTP/1.0`. A body is
    /// dropped unless the content length is greater than zero.
    pub fn build(self) -> Request {
        let body = match self.content_length {
            Some(n) if n > 0 => self.body,
            _ => None,
        };

        Request {
            method: self.method,
            target: self.target.unwrap_or_else(|| "/".to_string()),
            version: self.version.unwrap_or_else(|| HTTP_VERSION.to_string()),
            content_length: self.content_length,
            body,
        }
    }
}

impl Request {
    pub fn method(&self) -> Method {
        self.method
    }

    /// The request target, always starting with `/`.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Declared Content-Length, if the request carried one.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.method, self.target, self.version)?;
        if let Some(n) = self.content_length {
            write!(f, " (content-length {})", n)?;
        }
        Ok(())
    }
}
