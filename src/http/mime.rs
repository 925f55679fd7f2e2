//! MIME type detection based on file extensions.
//!
//! The table is closed: anything it does not name leaves the response
//! without a Content-Type, which clients read as plain text.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Html,
    Xml,
    Png,
    PlainText,
}

impl ContentType {
    /// The MIME string written in the Content-Type header.
    ///
    /// # Example
    ///
    /// ```
    /// # use httpfs::http::mime::ContentType;
    /// assert_eq!(ContentType::Json.as_str(), "application/json");
    /// assert_eq!(ContentType::PlainText.as_str(), "text/plain");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Html => "text/html",
            ContentType::Xml => "application/xml",
            ContentType::Png => "image/png",
            ContentType::PlainText => "text/plain",
        }
    }

    /// Looks up a file extension (without the dot), case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(ContentType::Json),
            "html" | "htm" => Some(ContentType::Html),
            "xml" => Some(ContentType::Xml),
            "png" => Some(ContentType::Png),
            "txt" => Some(ContentType::PlainText),
            _ => None,
        }
    }

    /// Resolves the content type of a path from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Reverse lookup used when parsing a serialized response.
    pub fn from_mime(mime: &str) -> Option<Self> {
        [
            ContentType::Json,
            ContentType::Html,
            ContentType::Xml,
            ContentType::Png,
            ContentType::PlainText,
        ]
        .into_iter()
        .find(|ct| ct.as_str().eq_ignore_ascii_case(mime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_extensions() {
        assert_eq!(
            ContentType::from_path(Path::new("/a/b/data.json")),
            Some(ContentType::Json)
        );
        assert_eq!(
            ContentType::from_path(Path::new("index.HTML")),
            Some(ContentType::Html)
        );
        assert_eq!(
            ContentType::from_path(Path::new("logo.png")),
            Some(ContentType::Png)
        );
    }

    #[test]
    fn unknown_or_missing_extension_is_unset() {
        assert_eq!(ContentType::from_path(Path::new("archive.tar.gz")), None);
        assert_eq!(ContentType::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn mime_reverse_lookup() {
        assert_eq!(ContentType::from_mime("application/xml"), Some(ContentType::Xml));
        assert_eq!(ContentType::from_mime("text/css"), None);
    }
}
