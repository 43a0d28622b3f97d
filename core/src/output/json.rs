use super::error::ExportError;
use crate::filesystem::files::get_filename;
use chrono::Local;
use common::jumplists::JumpListFile;
use log::error;
use std::fs::{create_dir_all, write};
use std::path::Path;

/// Write one decoded artifact as JSON under the output directory. The file name is the
/// source file name prefixed with the export time. Returns the written path
pub fn export_json(
    jumplist: &JumpListFile,
    directory: &str,
    pretty: bool,
) -> Result<String, ExportError> {
    if let Err(err) = create_dir_all(directory) {
        error!("[output] Could not create json directory {directory}: {err:?}");
        return Err(ExportError::CreateDirectory);
    }

    let serialize_result = if pretty {
        serde_json::to_vec_pretty(jumplist)
    } else {
        serde_json::to_vec(jumplist)
    };
    let data = match serialize_result {
        Ok(result) => result,
        Err(err) => {
            error!("[output] Could not serialize artifact: {err:?}");
            return Err(ExportError::Serialize);
        }
    };

    let timestamp = Local::now().format("%Y%m%d%H%M%S");
    let filename = format!("{timestamp}_{}.json", get_filename(jumplist.source_path()));
    let path = Path::new(directory).join(filename).display().to_string();

    if let Err(err) = write(&path, data) {
        error!("[output] Could not write json file {path}: {err:?}");
        return Err(ExportError::CreateFile);
    }
    Ok(path)
}
