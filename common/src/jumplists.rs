use crate::shortcuts::ShortcutInfo;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub enum JumpListType {
    Automatic,
    Custom,
}

/**  Decoded automatic destination file containing
 * version: DestList stream format version
 * expected_entries: Entry count recorded in the DestList header
 * entries: Observed entries, each paired with its decoded `Shortcut` stream
 */
#[derive(Debug, Serialize)]
pub struct AutomaticDestination {
    pub source_path: String,
    pub app_id: String,
    pub version: DestVersion,
    pub expected_entries: u32,
    pub pinned_entries: u32,
    pub entries: Vec<DestEntry>,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum DestVersion {
    Win7,
    Win10,
    Unknown,
}

#[derive(Debug, Serialize)]
pub struct DestEntry {
    pub entry_number: u32,
    pub path: String,
    pub modified: Option<i64>,
    pub hostname: String,
    pub droid_volume_id: String,
    pub droid_file_id: String,
    pub birth_droid_volume_id: String,
    pub birth_droid_file_id: String,
    pub pin_status: PinStatus,
    pub shortcut: ShortcutInfo,
    #[serde(skip)]
    pub raw_shortcut: Vec<u8>,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum PinStatus {
    Pinned(i32),
    NotPinned,
    None,
}

/// Decoded custom destination file. Entries are ranked by category order
#[derive(Debug, Serialize)]
pub struct CustomDestination {
    pub source_path: String,
    pub app_id: String,
    pub entries: Vec<CustomEntry>,
}

/// One custom destination category. May bundle multiple target shortcuts
#[derive(Debug, Serialize)]
pub struct CustomEntry {
    pub rank: u32,
    pub display_name: Option<String>,
    pub shortcuts: Vec<EmbeddedShortcut>,
}

#[derive(Debug, Serialize)]
pub struct EmbeddedShortcut {
    pub shortcut: ShortcutInfo,
    #[serde(skip)]
    pub raw: Vec<u8>,
}

/// Either decoded jump list variant, as returned per source file
#[derive(Debug, Serialize)]
pub enum JumpListFile {
    Automatic(AutomaticDestination),
    Custom(CustomDestination),
}

impl JumpListFile {
    pub fn source_path(&self) -> &str {
        match self {
            JumpListFile::Automatic(auto) => &auto.source_path,
            JumpListFile::Custom(custom) => &custom.source_path,
        }
    }

    pub fn shortcut_count(&self) -> usize {
        match self {
            JumpListFile::Automatic(auto) => auto.entries.len(),
            JumpListFile::Custom(custom) => {
                custom.entries.iter().map(|entry| entry.shortcuts.len()).sum()
            }
        }
    }
}
