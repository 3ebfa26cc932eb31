//! Source validation before a statement file is read
//!
//! Rejects sources up front, without touching their contents:
//! - Size above [`MAX_FILE_SIZE`]
//! - Unsupported extension and MIME type
//! - Missing paths and directories

use std::fs;
use std::path::Path;

use crate::csv::IngestError;

/// Maximum file size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Extensions accepted for statement exports (lowercase, without dot)
const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "txt"];

/// MIME types accepted for statement exports
const ACCEPTED_MIME_TYPES: &[&str] = &["text/csv", "text/plain", "application/vnd.ms-excel"];

/// What is known about a source before reading it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    /// File name as shown to the user
    pub name: String,
    /// Declared size in bytes
    pub size: u64,
    /// Declared MIME type, when the host provides one
    pub mime: Option<String>,
}

impl SourceInfo {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Build source info from file system metadata
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let metadata = fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                IngestError::ReadFailure(format!("file not found: {}", path.display()))
            }
            std::io::ErrorKind::PermissionDenied => {
                IngestError::ReadFailure(format!("permission denied: {}", path.display()))
            }
            _ => IngestError::ReadFailure(e.to_string()),
        })?;

        if metadata.is_dir() {
            return Err(IngestError::ReadFailure(format!(
                "cannot open directory: {}",
                path.display()
            )));
        }

        Ok(Self::new(filename_for_display(path), metadata.len()))
    }
}

/// Validate a source before reading it
///
/// The size check runs first. The type check accepts the source when either
/// its extension or its declared MIME type is recognized.
pub fn validate_source(source: &SourceInfo) -> Result<(), IngestError> {
    if source.size > MAX_FILE_SIZE {
        return Err(IngestError::FileTooLarge {
            size: source.size,
            limit: MAX_FILE_SIZE,
        });
    }

    let mime_ok = source
        .mime
        .as_deref()
        .map(|m| ACCEPTED_MIME_TYPES.contains(&m.to_ascii_lowercase().as_str()))
        .unwrap_or(false);

    if !mime_ok && !has_accepted_extension(&source.name) {
        return Err(IngestError::UnsupportedFileType {
            name: source.name.clone(),
        });
    }

    Ok(())
}

/// Check if a file name carries an accepted extension
pub fn has_accepted_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Get the filename from a path for display in messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
