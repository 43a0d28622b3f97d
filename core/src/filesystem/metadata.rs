use crate::utils::time::unixepoch_to_iso;
use log::warn;
use std::fs::metadata;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug)]
pub(crate) struct StandardTimestamps {
    pub(crate) created: String,
    pub(crate) modified: String,
    pub(crate) accessed: String,
}

/// Get standard timestamps (created, modified, accessed) for a path. Unsupported values are empty
pub(crate) fn get_timestamps(path: &str) -> StandardTimestamps {
    let mut timestamps = StandardTimestamps {
        created: String::new(),
        modified: String::new(),
        accessed: String::new(),
    };

    let meta = match metadata(path) {
        Ok(result) => result,
        Err(err) => {
            warn!("[filesystem] Failed to get metadata for {path}: {err:?}");
            return timestamps;
        }
    };

    if let Ok(value) = meta.created() {
        timestamps.created = systemtime_to_iso(&value);
    }
    if let Ok(value) = meta.modified() {
        timestamps.modified = systemtime_to_iso(&value);
    }
    if let Ok(value) = meta.accessed() {
        timestamps.accessed = systemtime_to_iso(&value);
    }

    timestamps
}

fn systemtime_to_iso(value: &SystemTime) -> String {
    match value.duration_since(UNIX_EPOCH) {
        Ok(duration) => unixepoch_to_iso(duration.as_secs() as i64),
        Err(_err) => String::new(),
    }
}
