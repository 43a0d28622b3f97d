use crate::filesystem::metadata::get_timestamps;
use crate::utils::time::optional_iso;
use common::jumplists::JumpListFile;
use common::records::NormalizedRecord;
use common::shortcuts::{DriveType, ExtraBlock, LocationFlag, ShortcutInfo};

pub(crate) mod vendor;

use vendor::resolve_vendor;

/// Flatten every decoded shortcut in a jump list file into `NormalizedRecord` values.
/// Automatic destinations yield one record per DestList entry, custom destinations one
/// per embedded shortcut
pub fn normalize_jumplist(jumplist: &JumpListFile) -> Vec<NormalizedRecord> {
    let source_times = get_timestamps(jumplist.source_path());

    let mut records = Vec::new();
    match jumplist {
        JumpListFile::Automatic(auto_dest) => {
            for entry in &auto_dest.entries {
                records.push(normalize_shortcut(
                    &entry.shortcut,
                    &auto_dest.source_path,
                    &source_times.created,
                    &source_times.modified,
                    &source_times.accessed,
                ));
            }
        }
        JumpListFile::Custom(custom) => {
            for entry in &custom.entries {
                for embedded in &entry.shortcuts {
                    records.push(normalize_shortcut(
                        &embedded.shortcut,
                        &custom.source_path,
                        &source_times.created,
                        &source_times.modified,
                        &source_times.accessed,
                    ));
                }
            }
        }
    }
    records
}

/// Flatten one decoded `Shortcut` into the exporter facing record.
/// Missing optional structures always yield empty fields
pub(crate) fn normalize_shortcut(
    shortcut: &ShortcutInfo,
    source_file: &str,
    source_created: &str,
    source_modified: &str,
    source_accessed: &str,
) -> NormalizedRecord {
    let mut record = NormalizedRecord {
        source_file: source_file.to_string(),
        source_created: source_created.to_string(),
        source_modified: source_modified.to_string(),
        source_accessed: source_accessed.to_string(),
        target_created: optional_iso(&shortcut.created),
        target_modified: optional_iso(&shortcut.modified),
        target_accessed: optional_iso(&shortcut.accessed),
        file_size: shortcut.file_size,
        relative_path: shortcut.relative_path.clone(),
        working_directory: shortcut.working_directory.clone(),
        file_attributes: join_debug(&shortcut.attribute_flags),
        header_flags: join_debug(&shortcut.data_flags),
        drive_type: drive_type_description(shortcut),
        drive_serial_number: shortcut.drive_serial.clone(),
        drive_label: shortcut.volume_label.clone(),
        local_path: shortcut.local_path.clone(),
        common_path: shortcut.common_path.clone(),
        target_id_absolute_path: absolute_path(shortcut),
        target_mft_entry_number: String::new(),
        target_mft_sequence_number: String::new(),
        machine_id: String::new(),
        machine_mac_address: String::new(),
        mac_vendor: String::new(),
        tracker_created_on: String::new(),
        extra_blocks_present: extra_block_names(&shortcut.extras),
    };

    // Step one: the MFT reference lives on the last node of the identifier chain
    if let Some(last_item) = shortcut.shellitems.last() {
        // Step two: each value renders independently, one may be present without the other
        if let Some(entry) = last_item.mft_entry {
            record.target_mft_entry_number = format!("0x{entry:X}");
        }
        if let Some(sequence) = last_item.mft_sequence {
            record.target_mft_sequence_number = format!("0x{sequence:X}");
        }
    }

    if let Some(tracker) = shortcut.tracker() {
        record.machine_id = tracker.machine_id.clone();
        record.machine_mac_address = tracker.mac_address.clone();
        record.mac_vendor = resolve_vendor(&tracker.mac_address).to_string();
        record.tracker_created_on = optional_iso(&tracker.created);
    }

    record
}

/// Join the identifier chain display values with exactly one trailing separator removed
fn absolute_path(shortcut: &ShortcutInfo) -> String {
    let mut path = String::new();
    for item in &shortcut.shellitems {
        path.push_str(&item.value);
        path.push('\\');
    }
    if path.ends_with('\\') {
        path.pop();
    }
    path
}

/// Friendly description for the volume drive type. Shortcuts without volume info
/// always render the `(None)` marker
fn drive_type_description(shortcut: &ShortcutInfo) -> String {
    if shortcut.location_flags != LocationFlag::VolumeIDAndLocalBasePath {
        return String::from("(None)");
    }

    let description = match shortcut.drive_type {
        DriveType::DriveUnknown => "Unknown",
        DriveType::DriveNotRootDir => "Invalid root path (No root directory)",
        DriveType::DriveRemovable => "Removable storage media (Floppy, USB)",
        DriveType::DriveFixed => "Fixed storage media (Hard drive)",
        DriveType::DriveRemote => "Remote storage (Network drive)",
        DriveType::DriveCdrom => "Optical disc (CD-ROM, DVD, BD)",
        DriveType::DriveRamdisk => "RAM drive",
        DriveType::None => "None",
    };
    description.to_string()
}

fn join_debug<T: std::fmt::Debug>(values: &[T]) -> String {
    values
        .iter()
        .map(|value| format!("{value:?}"))
        .collect::<Vec<String>>()
        .join(", ")
}

fn extra_block_names(extras: &[ExtraBlock]) -> String {
    extras
        .iter()
        .map(|block| block.kind_name().to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::{absolute_path, drive_type_description, normalize_shortcut};
    use common::shortcuts::{
        DriveType, ExtraBlock, LocationFlag, ShellItem, ShellType, ShortcutInfo, TrackerBlock,
    };

    fn build_test_shortcut() -> ShortcutInfo {
        ShortcutInfo {
            source_path: String::new(),
            data_flags: Vec::new(),
            attribute_flags: Vec::new(),
            created: Some(1670260800),
            modified: None,
            accessed: None,
            file_size: 4096,
            location_flags: LocationFlag::None,
            local_path: String::new(),
            common_path: String::new(),
            drive_serial: String::new(),
            drive_type: DriveType::None,
            volume_label: String::new(),
            network_share_name: String::new(),
            network_device_name: String::new(),
            description: String::new(),
            relative_path: String::new(),
            working_directory: String::new(),
            command_line_args: String::new(),
            icon_location: String::new(),
            shellitems: Vec::new(),
            extras: Vec::new(),
        }
    }

    fn build_test_item(value: &str, entry: Option<u64>, sequence: Option<u16>) -> ShellItem {
        ShellItem {
            value: value.to_string(),
            shell_type: ShellType::Directory,
            created: None,
            modified: None,
            accessed: None,
            mft_entry: entry,
            mft_sequence: sequence,
        }
    }

    #[test]
    fn test_normalize_shortcut_sentinel_dates() {
        let shortcut = build_test_shortcut();
        let record = normalize_shortcut(&shortcut, "/tmp/test.customDestinations-ms", "", "", "");

        assert_eq!(record.target_created, "2022-12-05T17:20:00.000Z");
        assert_eq!(record.target_modified, "");
        assert_eq!(record.target_accessed, "");
        assert_eq!(record.drive_type, "(None)");
        assert_eq!(record.target_id_absolute_path, "");
        assert_eq!(record.extra_blocks_present, "");
    }

    #[test]
    fn test_absolute_path_separator_count() {
        let mut shortcut = build_test_shortcut();
        shortcut.shellitems = vec![
            build_test_item("C:\\", None, None),
            build_test_item("Users", None, None),
            build_test_item("bob", None, None),
        ];

        let path = absolute_path(&shortcut);
        assert_eq!(path, "C:\\\\Users\\bob");
        assert_eq!(path.matches('\\').count() - 1, shortcut.shellitems.len() - 1);
    }

    #[test]
    fn test_mft_fields_independent() {
        let mut shortcut = build_test_shortcut();
        shortcut.shellitems = vec![build_test_item("Projects", Some(226573), None)];
        let record = normalize_shortcut(&shortcut, "", "", "", "");
        assert_eq!(record.target_mft_entry_number, "0x3750D");
        assert_eq!(record.target_mft_sequence_number, "");

        shortcut.shellitems = vec![build_test_item("Projects", None, Some(7))];
        let record = normalize_shortcut(&shortcut, "", "", "", "");
        assert_eq!(record.target_mft_entry_number, "");
        assert_eq!(record.target_mft_sequence_number, "0x7");
    }

    #[test]
    fn test_mft_chain_without_extension_data() {
        let mut shortcut = build_test_shortcut();
        shortcut.shellitems = vec![build_test_item("Projects", None, None)];
        let record = normalize_shortcut(&shortcut, "", "", "", "");
        assert_eq!(record.target_mft_entry_number, "");
        assert_eq!(record.target_mft_sequence_number, "");
    }

    #[test]
    fn test_normalize_shortcut_tracker() {
        let mut shortcut = build_test_shortcut();
        shortcut.extras = vec![
            ExtraBlock::PropertyStore,
            ExtraBlock::Tracker(TrackerBlock {
                machine_id: String::from("desktop-eis938n"),
                mac_address: String::from("08:00:27:6e:b4:5e"),
                created: Some(1667364699),
                droid_volume_id: String::new(),
                droid_file_id: String::new(),
                birth_droid_volume_id: String::new(),
                birth_droid_file_id: String::new(),
            }),
        ];

        let record = normalize_shortcut(&shortcut, "", "", "", "");
        assert_eq!(record.machine_id, "desktop-eis938n");
        assert_eq!(record.machine_mac_address, "08:00:27:6e:b4:5e");
        assert_eq!(record.mac_vendor, "PCS Systemtechnik GmbH");
        assert_eq!(record.tracker_created_on, "2022-11-02T04:51:39.000Z");
        assert_eq!(record.extra_blocks_present, "PropertyStore, Tracker");
    }

    #[test]
    fn test_drive_type_description() {
        let mut shortcut = build_test_shortcut();
        shortcut.location_flags = LocationFlag::VolumeIDAndLocalBasePath;
        shortcut.drive_type = DriveType::DriveFixed;
        assert_eq!(
            drive_type_description(&shortcut),
            "Fixed storage media (Hard drive)"
        );
    }
}
