//! Directory listing for the file system check

use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryListing {
    /// Entry names, sorted
    Entries(Vec<String>),
    PermissionDenied,
}

/// List `path`. Permission denial is a result; any other failure is an error.
pub fn list_directory(path: &Path) -> Result<DirectoryListing> {
    let read_dir = match std::fs::read_dir(path) {
        Ok(rd) => rd,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Ok(DirectoryListing::PermissionDenied)
        }
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => names.push(entry.file_name().to_string_lossy().into_owned()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Ok(DirectoryListing::PermissionDenied)
            }
            Err(e) => return Err(e.into()),
        }
    }
    names.sort();

    Ok(DirectoryListing::Entries(names))
}
