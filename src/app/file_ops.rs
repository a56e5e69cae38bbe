//! Persistence gateway: whole-file transfer between documents and disk.
//!
//! Failures are reported as structured [`FileOpError`] codes, never partial
//! success. The display strings are the user-visible error text that the
//! controller forwards through its error hook.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use thiserror::Error;

use super::document::Document;

/// Structured failure reasons of the persistence gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileOpError {
    #[error("Failed to open file")]
    OpenFailed,

    #[error("Failed to read file")]
    ReadFailed,

    #[error("Failed to write file")]
    WriteFailed,

    #[error("Memory allocation failed")]
    OutOfMemory,

    #[error("Invalid file path")]
    InvalidPath,

    #[error("Permission denied")]
    PermissionDenied,
}

fn open_error(err: io::Error) -> FileOpError {
    match err.kind() {
        ErrorKind::PermissionDenied => FileOpError::PermissionDenied,
        ErrorKind::OutOfMemory => FileOpError::OutOfMemory,
        _ => FileOpError::OpenFailed,
    }
}

fn read_error(err: io::Error) -> FileOpError {
    match err.kind() {
        ErrorKind::OutOfMemory => FileOpError::OutOfMemory,
        _ => FileOpError::ReadFailed,
    }
}

fn write_error(err: io::Error) -> FileOpError {
    match err.kind() {
        ErrorKind::OutOfMemory => FileOpError::OutOfMemory,
        _ => FileOpError::WriteFailed,
    }
}

/// Load the file at `path` into `document`.
///
/// The content is fully materialized before the document is touched, so a
/// failed read leaves the document exactly as it was. On success the
/// document's content and path are replaced and the modified flag is
/// cleared in one step: a freshly loaded document is never dirty. An empty
/// file is valid content; bytes that are not UTF-8 are a read failure.
pub fn read(path: &str, document: &mut Document) -> Result<(), FileOpError> {
    if path.is_empty() {
        return Err(FileOpError::InvalidPath);
    }

    let mut file = File::open(path).map_err(open_error)?;
    let size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);

    let mut content = String::with_capacity(size);
    file.read_to_string(&mut content).map_err(read_error)?;

    document.set_content(content);
    document.set_file_path(path);
    document.mark_saved();

    Ok(())
}

/// Write `document`'s content to `path`, replacing whatever was there.
///
/// The document's modified flag is never touched here; clearing it after a
/// successful write is the controller's responsibility, since the gateway
/// holds no mutable access to the document.
pub fn write(path: &str, document: &Document) -> Result<(), FileOpError> {
    if path.is_empty() {
        return Err(FileOpError::InvalidPath);
    }

    let mut file = File::create(path).map_err(open_error)?;
    file.write_all(document.content().as_bytes())
        .map_err(write_error)?;
    file.flush().map_err(write_error)?;

    Ok(())
}

pub fn exists(path: &str) -> bool {
    !path.is_empty() && Path::new(path).exists()
}

pub fn is_readable(path: &str) -> bool {
    !path.is_empty() && File::open(path).is_ok()
}

/// Whether `path` could be written.
///
/// For an existing file this tries a write-mode open; for a missing one it
/// tests the parent directory, falling back to the current directory when
/// the path has no parent component.
pub fn is_writable(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    let p = Path::new(path);
    if p.exists() {
        return OpenOptions::new().write(true).open(p).is_ok();
    }

    let parent = match p.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::metadata(parent)
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false)
}
