use super::error::ExportError;
use crate::filesystem::files::get_filename;
use common::jumplists::JumpListFile;
use log::error;
use std::fs::{create_dir_all, write};
use std::path::Path;

/// Write the raw bytes of every embedded shortcut under a directory named after the
/// originating artifact. A bad write is logged and the remaining shortcuts still dump.
/// Returns the written paths
pub fn export_dump(jumplist: &JumpListFile, dump_dir: &str) -> Result<Vec<String>, ExportError> {
    let target = Path::new(dump_dir).join(get_filename(jumplist.source_path()));
    if let Err(err) = create_dir_all(&target) {
        error!(
            "[output] Could not create dump directory {}: {err:?}",
            target.display()
        );
        return Err(ExportError::CreateDirectory);
    }

    let mut written = Vec::new();
    match jumplist {
        JumpListFile::Automatic(auto_dest) => {
            for entry in &auto_dest.entries {
                let path = target.join(format!("{}.lnk", entry.entry_number));
                dump_file(&path.display().to_string(), &entry.raw_shortcut, &mut written);
            }
        }
        JumpListFile::Custom(custom) => {
            for entry in &custom.entries {
                for (index, embedded) in entry.shortcuts.iter().enumerate() {
                    let path = target.join(format!("{}_{index}.lnk", entry.rank));
                    dump_file(&path.display().to_string(), &embedded.raw, &mut written);
                }
            }
        }
    }
    Ok(written)
}

fn dump_file(path: &str, data: &[u8], written: &mut Vec<String>) {
    if let Err(err) = write(path, data) {
        error!("[output] Could not dump shortcut to {path}: {err:?}");
        return;
    }
    written.push(path.to_string());
}
