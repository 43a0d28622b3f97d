use super::error::JumpListError;
use crate::{
    filesystem::files::{get_file_size, is_file, read_file_header},
    ole::header::OLE_SIGNATURE,
};
use common::jumplists::JumpListType;
use log::error;

/// Determine the jump list flavor from the first eight (8) bytes of the file.
/// The OLE compound file signature means an automatic destination, anything else is custom.
/// Files shorter than eight (8) bytes fail and the caller records a per file failure
pub fn classify(path: &str) -> Result<JumpListType, JumpListError> {
    let mut buffer = [0; 8];
    if is_file(path) && get_file_size(path) < buffer.len() as u64 {
        error!("[jumplists] {path} is smaller than the signature size");
        return Err(JumpListError::ShortData);
    }
    if let Err(err) = read_file_header(path, &mut buffer) {
        error!("[jumplists] Could not read signature from {path}: {err:?}");
        return Err(JumpListError::ReadFile);
    }

    if u64::from_le_bytes(buffer) == OLE_SIGNATURE {
        return Ok(JumpListType::Automatic);
    }
    Ok(JumpListType::Custom)
}
