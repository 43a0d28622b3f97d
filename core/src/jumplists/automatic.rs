use super::destlist::parse_destlist;
use crate::{
    filesystem::files::get_filename,
    ole::{directory::EntryType, olecf::OleStream},
    shortcuts::shortcut::get_shortcut_data,
};
use common::jumplists::{AutomaticDestination, DestEntry, DestVersion};
use log::error;
use nom::error::ErrorKind;

/// Parse an automatic destination file. An OLE container with a DestList stream
/// describing hex named `Shortcut` streams
pub(crate) fn parse_automatic<'a>(
    data: &'a [u8],
    path: &str,
) -> nom::IResult<&'a [u8], AutomaticDestination> {
    let (_, jump_ole) = OleStream::parse_ole(data)?;

    let mut dest_info = None;
    for entry in jump_ole.iter() {
        if entry.name != "DestList" || entry.entry_type == EntryType::Root {
            continue;
        }

        // The DestList stream carries the metadata needed to interpret the other streams
        match parse_destlist(&entry.data) {
            Ok((_, result)) => dest_info = Some(result),
            Err(_err) => {
                error!("[jumplists] Could not parse DestList stream in {path}");
                return Err(nom::Err::Failure(nom::error::Error::new(
                    &[],
                    ErrorKind::Fail,
                )));
            }
        }
    }

    let Some(dest_info) = dest_info else {
        error!("[jumplists] No DestList stream in {path}");
        return Err(nom::Err::Failure(nom::error::Error::new(
            &[],
            ErrorKind::Fail,
        )));
    };

    let mut auto_dest = AutomaticDestination {
        source_path: path.to_string(),
        app_id: get_filename(path)
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string(),
        version: dest_info.version,
        expected_entries: dest_info.number_entries,
        pinned_entries: dest_info.number_pinned_entries,
        entries: Vec::new(),
    };
    if auto_dest.version == DestVersion::Unknown {
        error!(
            "[jumplists] Unknown DestList version in {path}. Entry layout may be misinterpreted"
        );
    }

    // Streams are named with the hex form of the DestList entry number
    for info in dest_info.entries {
        let stream_name = format!("{:x}", info.entry);
        let Some(stream) = jump_ole.iter().find(|entry| entry.name == stream_name) else {
            continue;
        };

        let lnk_info = match get_shortcut_data(&stream.data) {
            Ok((_, result)) => result,
            Err(_err) => {
                error!("[jumplists] Could not parse Shortcut stream {stream_name} in {path}");
                continue;
            }
        };

        auto_dest.entries.push(DestEntry {
            entry_number: info.entry,
            path: info.path,
            modified: info.modified,
            hostname: info.hostname,
            droid_volume_id: info.droid_volume_id,
            droid_file_id: info.droid_file_id,
            birth_droid_volume_id: info.birth_droid_volume_id,
            birth_droid_file_id: info.birth_droid_file_id,
            pin_status: info.pin_status,
            shortcut: lnk_info,
            raw_shortcut: stream.data.clone(),
        });
    }

    Ok((data, auto_dest))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::parse_automatic;
    use crate::jumplists::destlist::tests::{build_test_destlist, build_test_entry};
    use crate::ole::directory::tests::build_test_entry as build_test_dir_entry;
    use crate::ole::header::tests::build_test_header;
    use crate::shortcuts::shortcut::tests::build_test_lnk;
    use common::jumplists::{DestVersion, PinStatus};

    /// Build an automatic destination container with a DestList stream and one LNK stream
    pub(crate) fn build_test_automatic() -> Vec<u8> {
        let destlist = build_test_destlist(
            1,
            &[build_test_entry(1, 1, -1, "C:\\Users\\bob\\report.txt")],
        );
        let lnk = build_test_lnk(133147344000000000, 1024);

        let mut data = build_test_header();
        // Streams in the test container always use regular sectors
        data[56..60].copy_from_slice(&0u32.to_le_bytes());

        // Sector zero (0) holds the SAT
        let mut sat = Vec::new();
        for slot in [-3i32, -2, -2, -2] {
            sat.extend_from_slice(&slot.to_le_bytes());
        }
        while sat.len() < 512 {
            sat.extend_from_slice(&(-1i32).to_le_bytes());
        }
        data.append(&mut sat);

        // Sector one (1) holds the directory
        let mut dir = build_test_dir_entry("Root Entry", 5, -2, 0);
        dir.append(&mut build_test_dir_entry("DestList", 2, 2, destlist.len() as u32));
        dir.append(&mut build_test_dir_entry("1", 2, 3, lnk.len() as u32));
        dir.append(&mut build_test_dir_entry("", 0, -1, 0));
        data.append(&mut dir);

        // Sector two (2) holds the DestList stream, sector three (3) the LNK stream
        let mut destlist_sector = destlist;
        destlist_sector.resize(512, 0);
        data.append(&mut destlist_sector);

        let mut lnk_sector = lnk;
        lnk_sector.resize(512, 0);
        data.append(&mut lnk_sector);
        data
    }

    #[test]
    fn test_parse_automatic() {
        let data = build_test_automatic();
        let path = "/tmp/1b4dd67f29cb1962.automaticDestinations-ms";

        let (_, result) = parse_automatic(&data, path).unwrap();
        assert_eq!(result.app_id, "1b4dd67f29cb1962");
        assert_eq!(result.version, DestVersion::Win7);
        assert_eq!(result.expected_entries, 1);
        assert_eq!(result.entries.len(), 1);

        let entry = &result.entries[0];
        assert_eq!(entry.entry_number, 1);
        assert_eq!(entry.path, "C:\\Users\\bob\\report.txt");
        assert_eq!(entry.modified, Some(1670260800));
        assert_eq!(entry.hostname, "desktop-eis938n");
        assert_eq!(entry.pin_status, PinStatus::NotPinned);
        assert_eq!(entry.shortcut.created, Some(1670260800));
        assert_eq!(entry.shortcut.file_size, 1024);
        assert_eq!(entry.raw_shortcut.len(), 512);
    }
}
