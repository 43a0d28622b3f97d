use super::error::FileSystemError;
use log::{error, warn};
use std::fs::{File, metadata, read};
use std::io::Read;
use std::path::Path;

/// Check if path is a file
pub(crate) fn is_file(path: &str) -> bool {
    let file = Path::new(path);
    if file.is_file() {
        return true;
    }
    false
}

/// Read a file that is less than 2GB in size
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, FileSystemError> {
    if file_too_large(path) {
        return Err(FileSystemError::LargeFile);
    }

    // Verify provided path is a file
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }

    let read_result = read(path);
    match read_result {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[filesystem] Failed to read file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}

/// Read the first bytes of a file into the provided buffer. Fails on short reads
pub(crate) fn read_file_header(path: &str, buffer: &mut [u8]) -> Result<(), FileSystemError> {
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }

    let open_result = File::open(path);
    let mut reader = match open_result {
        Ok(result) => result,
        Err(err) => {
            error!("[filesystem] Failed to open file {path}: {err:?}");
            return Err(FileSystemError::OpenFile);
        }
    };

    if let Err(err) = reader.read_exact(buffer) {
        error!("[filesystem] Failed to read file header {path}: {err:?}");
        return Err(FileSystemError::ReadFile);
    }
    Ok(())
}

/// Get the file size
pub(crate) fn get_file_size(path: &str) -> u64 {
    if !is_file(path) {
        return 0;
    }

    let meta = metadata(path);
    match meta {
        Ok(result) => result.len(),
        Err(err) => {
            error!("[filesystem] Failed to get file size: {err:?}");
            0
        }
    }
}

/// Check if a provided file is larger than 2GB
fn file_too_large(path: &str) -> bool {
    let size = get_file_size(path);
    let max_size = 2147483648;
    if size < max_size {
        return false;
    }
    true
}

/// Get last component of provided path. Will be filename or directory or empty string if final component cannot be determined
pub(crate) fn get_filename(path: &str) -> String {
    if !path.contains(['/', '\\']) {
        return path.to_string();
    }

    let entry_opt = if path.contains('/') {
        path.rsplit_once('/')
    } else {
        path.rsplit_once('\\')
    };

    if entry_opt.is_none() {
        warn!("[filesystem] Failed to get filename from: {path}");
        return path.to_string();
    }

    let (_, name) = entry_opt.unwrap_or_default();
    name.to_string()
}
