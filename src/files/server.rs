//! File resource handler
//!
//! Serves GET and POST against a single root directory. All operations go
//! through one readers-writer lock: any number of reads run together, a
//! write excludes everything else.

use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use crate::files::error::FileError;
use crate::files::sandbox;
use crate::http::handler::RequestHandler;
use crate::http::mime::ContentType;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Body returned when listing a directory that has no entries.
pub const EMPTY_DIRECTORY: &str = "Empty directory";

pub struct FileServer {
    root: PathBuf,
    lock: RwLock<()>,
}

impl FileServer {
    /// Creates a handler serving `root`, which must exist.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = std::fs::canonicalize(root.as_ref())?;
        Ok(Self {
            root,
            lock: RwLock::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads a file or lists a directory under the shared lock.
    pub async fn get(&self, target: &str) -> Response {
        let _guard = self.lock.read().await;

        match self.read_resource(target).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(uri = target, error = %e, "GET failed");
                Response::error(e.status(), &e.to_string())
            }
        }
    }

    /// Creates or replaces a file under the exclusive lock.
    pub async fn post(&self, target: &str, body: Option<&str>, declared_length: u64) -> Response {
        let _guard = self.lock.write().await;

        match self.write_resource(target, body, declared_length).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(uri = target, error = %e, "POST failed");
                Response::error(e.status(), &e.to_string())
            }
        }
    }

    fn resolve(&self, target: &str) -> Result<PathBuf, FileError> {
        sandbox::resolve(&self.root, target).ok_or_else(|| {
            tracing::warn!(uri = target, "Rejected path outside of root");
            FileError::Forbidden(target.to_string())
        })
    }

    async fn read_resource(&self, target: &str) -> Result<Response, FileError> {
        let path = self.resolve(target)?;

        let metadata = fs::metadata(&path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::PermissionDenied {
                FileError::Forbidden(target.to_string())
            } else {
                FileError::NotFound(target.to_string())
            }
        })?;

        if metadata.is_dir() {
            let listing = list_directory(&path)
                .await
                .map_err(|e| FileError::from_io(target, e, FileError::read))?;

            return Ok(ResponseBuilder::new(StatusCode::Ok)
                .date_now()
                .content_disposition("inline")
                .body(listing)
                .build());
        }

        if !metadata.is_file() {
            return Err(FileError::NotFound(target.to_string()));
        }

        if !is_readable(&metadata) {
            return Err(FileError::Forbidden(target.to_string()));
        }

        // The file may vanish between the metadata call and here; that
        // surfaces as a read failure.
        let bytes = fs::read(&path)
            .await
            .map_err(|e| FileError::from_io(target, e, FileError::read))?;
        let content = String::from_utf8_lossy(&bytes).into_owned();

        let mut builder = ResponseBuilder::new(StatusCode::Ok)
            .date_now()
            .content_disposition("inline")
            .body(content);
        if let Some(content_type) = ContentType::from_path(&path) {
            builder = builder.content_type(content_type);
        }

        Ok(builder.build())
    }

    async fn write_resource(
        &self,
        target: &str,
        body: Option<&str>,
        declared_length: u64,
    ) -> Result<Response, FileError> {
        let path = self.resolve(target)?;

        let existing = match fs::metadata(&path).await {
            Ok(m) if m.is_dir() => return Err(FileError::Forbidden(target.to_string())),
            Ok(m) => Some(m),
            Err(_) => None,
        };

        let parent = path
            .parent()
            .ok_or_else(|| FileError::Forbidden(target.to_string()))?;
        ensure_parent(parent, target).await?;

        let mut options = fs::OpenOptions::new();
        options.write(true).truncate(true);

        let mut file = match existing {
            Some(m) => {
                if m.permissions().readonly() {
                    return Err(FileError::Forbidden(target.to_string()));
                }
                options
                    .open(&path)
                    .await
                    .map_err(|e| FileError::from_io(target, e, FileError::write))?
            }
            None => options
                .create(true)
                .open(&path)
                .await
                .map_err(|e| FileError::from_io(target, e, FileError::creation))?,
        };

        let contents = body.unwrap_or_default();
        file.write_all(contents.as_bytes())
            .await
            .map_err(|e| FileError::from_io(target, e, FileError::write))?;
        file.flush()
            .await
            .map_err(|e| FileError::from_io(target, e, FileError::write))?;

        tracing::info!(uri = target, bytes = contents.len(), "File written");

        Ok(ResponseBuilder::new(StatusCode::Created)
            .date_now()
            .body(format!(
                "File {} created with content length {}",
                target, declared_length
            ))
            .build())
    }
}

/// Makes sure the parent directory exists and can be written to.
async fn ensure_parent(parent: &Path, target: &str) -> Result<(), FileError> {
    match fs::metadata(parent).await {
        Ok(m) if !m.is_dir() => Err(FileError::CreationFailure {
            target: target.to_string(),
            source: io::Error::other("parent is not a directory"),
        }),
        Ok(m) if m.permissions().readonly() => Err(FileError::Forbidden(target.to_string())),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => fs::create_dir_all(parent)
            .await
            .map_err(|e| FileError::creation(target.to_string(), e)),
        Err(e) => Err(FileError::from_io(target, e, FileError::creation)),
    }
}

/// Whether any read permission bit is set.
#[cfg(unix)]
fn is_readable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & 0o444 != 0
}

#[cfg(not(unix))]
fn is_readable(_metadata: &std::fs::Metadata) -> bool {
    true
}

/// One entry name per line, sorted, directories marked with a separator.
async fn list_directory(path: &Path) -> io::Result<String> {
    let mut entries = fs::read_dir(path).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push(MAIN_SEPARATOR);
        }
        names.push(name);
    }

    if names.is_empty() {
        return Ok(EMPTY_DIRECTORY.to_string());
    }

    names.sort();
    Ok(names.iter().map(|n| format!("{}\n", n)).collect())
}

impl RequestHandler for FileServer {
    async fn handle(&self, request: Request) -> Response {
        match request.method() {
            Method::GET => self.get(request.target()).await,
            Method::POST => {
                self.post(
                    request.target(),
                    request.body(),
                    request.content_length().unwrap_or(0),
                )
                .await
            }
        }
    }
}
