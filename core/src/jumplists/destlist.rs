use crate::utils::{
    nom_helper::{
        Endian, nom_signed_four_bytes, nom_unsigned_eight_bytes, nom_unsigned_four_bytes,
        nom_unsigned_two_bytes,
    },
    strings::{extract_utf8_string, extract_utf16_string},
    time::filetime_to_option,
    uuid::format_guid_le_bytes,
};
use common::jumplists::{DestVersion, PinStatus};
use nom::bytes::complete::take;
use std::mem::size_of;

#[derive(Debug)]
pub(crate) struct DestList {
    pub(crate) version: DestVersion,
    pub(crate) number_entries: u32,
    pub(crate) number_pinned_entries: u32,
    pub(crate) _last_entry: u32,
    pub(crate) _last_revision: u32,
    pub(crate) entries: Vec<DestListEntry>,
}

#[derive(Debug)]
pub(crate) struct DestListEntry {
    pub(crate) droid_volume_id: String,
    pub(crate) droid_file_id: String,
    pub(crate) birth_droid_volume_id: String,
    pub(crate) birth_droid_file_id: String,
    pub(crate) hostname: String,
    pub(crate) entry: u32,
    pub(crate) modified: Option<i64>,
    pub(crate) pin_status: PinStatus,
    pub(crate) path: String,
}

/// Parse the DestList stream. Contains metadata about each `Shortcut` stream in the container
pub(crate) fn parse_destlist(data: &[u8]) -> nom::IResult<&[u8], DestList> {
    let (input, version_data) = nom_unsigned_four_bytes(data, Endian::Le)?;
    let (input, number_entries) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, number_pinned_entries) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let (input, _unknown) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, last_entry) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, _unknown) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, last_revision) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (mut input, _unknown) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let win7 = 1;
    let win10 = 3;
    let version = if version_data == win7 {
        DestVersion::Win7
    } else if version_data >= win10 {
        DestVersion::Win10
    } else {
        DestVersion::Unknown
    };

    let mut dest_data = DestList {
        version,
        number_entries,
        number_pinned_entries,
        _last_entry: last_entry,
        _last_revision: last_revision,
        entries: Vec::new(),
    };

    // Stream data may carry sector slack after the last entry. The header count bounds the loop
    while !input.is_empty() && (dest_data.entries.len() as u32) < number_entries {
        let (remaining_data, _checksum) = nom_unsigned_eight_bytes(input, Endian::Le)?;
        let (remaining_data, droid_volume) = take(size_of::<u128>())(remaining_data)?;
        let (remaining_data, droid_file) = take(size_of::<u128>())(remaining_data)?;
        let (remaining_data, birth_volume) = take(size_of::<u128>())(remaining_data)?;
        let (remaining_data, birth_file) = take(size_of::<u128>())(remaining_data)?;

        let (remaining_data, hostname_data) = take(size_of::<u128>())(remaining_data)?;
        let (remaining_data, entry) = nom_unsigned_four_bytes(remaining_data, Endian::Le)?;
        let (remaining_data, _unknown) = nom_unsigned_four_bytes(remaining_data, Endian::Le)?;
        let (remaining_data, _unknown) = nom_unsigned_four_bytes(remaining_data, Endian::Le)?;

        let (remaining_data, modified) = nom_unsigned_eight_bytes(remaining_data, Endian::Le)?;
        let (mut remaining_data, pin_data) = nom_signed_four_bytes(remaining_data, Endian::Le)?;

        let not_pin = -1;
        // Anything that is not -1 is pinned
        let pin_status = if pin_data == not_pin {
            PinStatus::NotPinned
        } else {
            PinStatus::Pinned(pin_data)
        };

        // Windows 10 introduced three (3) additional values
        if dest_data.version == DestVersion::Win10 {
            let (remaining, _unknown) = nom_unsigned_four_bytes(remaining_data, Endian::Le)?;
            let (remaining, _access_count) = nom_unsigned_four_bytes(remaining, Endian::Le)?;
            let (remaining, _unknown) = nom_unsigned_eight_bytes(remaining, Endian::Le)?;
            remaining_data = remaining;
        }

        let (remaining_data, path_size) = nom_unsigned_two_bytes(remaining_data, Endian::Le)?;
        let utf_adjust: u32 = 2;
        let (remaining_data, path_data) = take(path_size as u32 * utf_adjust)(remaining_data)?;

        // Check for end of string character. Sometimes the path has it
        if !remaining_data.is_empty() {
            let (next_data, end_of_string) = nom_unsigned_four_bytes(remaining_data, Endian::Le)?;
            if end_of_string == 0 {
                input = next_data;
            } else {
                input = remaining_data;
            }
        } else {
            input = remaining_data;
        }

        let entry = DestListEntry {
            droid_volume_id: format_guid_le_bytes(droid_volume),
            droid_file_id: format_guid_le_bytes(droid_file),
            birth_droid_volume_id: format_guid_le_bytes(birth_volume),
            birth_droid_file_id: format_guid_le_bytes(birth_file),
            hostname: extract_utf8_string(hostname_data),
            entry,
            modified: filetime_to_option(&modified),
            pin_status,
            path: extract_utf16_string(path_data),
        };

        dest_data.entries.push(entry);
    }

    Ok((data, dest_data))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::parse_destlist;
    use common::jumplists::{DestVersion, PinStatus};

    const DROID_VOLUME: [u8; 16] = [
        104, 69, 141, 62, 17, 228, 24, 73, 143, 120, 151, 205, 108, 179, 64, 197,
    ];
    const DROID_FILE: [u8; 16] = [
        192, 88, 241, 9, 106, 90, 237, 17, 161, 13, 8, 0, 39, 110, 180, 94,
    ];

    /// Build one DestList entry for tests. Layout matches the on-disk stream
    pub(crate) fn build_test_entry(version: u32, entry: u32, pin: i32, path: &str) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&0u64.to_le_bytes());
        data.extend_from_slice(&DROID_VOLUME);
        data.extend_from_slice(&DROID_FILE);
        data.extend_from_slice(&DROID_VOLUME);
        data.extend_from_slice(&DROID_FILE);

        let mut hostname = b"desktop-eis938n".to_vec();
        hostname.resize(16, 0);
        data.append(&mut hostname);

        data.extend_from_slice(&entry.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        // FILETIME for 2022-12-05 17:20:00 UTC
        data.extend_from_slice(&133147344000000000u64.to_le_bytes());
        data.extend_from_slice(&pin.to_le_bytes());

        let win10 = 3;
        if version >= win10 {
            data.extend_from_slice(&0u32.to_le_bytes());
            data.extend_from_slice(&1u32.to_le_bytes());
            data.extend_from_slice(&0u64.to_le_bytes());
        }

        let chars: Vec<u16> = path.encode_utf16().collect();
        data.extend_from_slice(&(chars.len() as u16).to_le_bytes());
        for value in chars {
            data.extend_from_slice(&value.to_le_bytes());
        }
        data.extend_from_slice(&0u32.to_le_bytes());
        data
    }

    /// Build a DestList stream with the provided entries appended after the header
    pub(crate) fn build_test_destlist(version: u32, entries: &[Vec<u8>]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&version.to_le_bytes());
        data.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());

        for entry in entries {
            data.extend_from_slice(entry);
        }
        data
    }

    #[test]
    fn test_parse_destlist_win7() {
        let entries = [
            build_test_entry(1, 1, -1, "C:\\Users\\bob\\report.txt"),
            build_test_entry(1, 2, 0, "C:\\Users\\bob\\notes.txt"),
        ];
        let data = build_test_destlist(1, &entries);

        let (_, result) = parse_destlist(&data).unwrap();
        assert_eq!(result.version, DestVersion::Win7);
        assert_eq!(result.number_entries, 2);
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[0].entry, 1);
        assert_eq!(result.entries[0].hostname, "desktop-eis938n");
        assert_eq!(result.entries[0].modified, Some(1670260800));
        assert_eq!(result.entries[0].pin_status, PinStatus::NotPinned);
        assert_eq!(result.entries[0].path, "C:\\Users\\bob\\report.txt");
        assert_eq!(
            result.entries[0].droid_file_id,
            "09f158c0-5a6a-11ed-a10d-0800276eb45e"
        );
        assert_eq!(
            result.entries[0].droid_volume_id,
            "3e8d4568-e411-4918-8f78-97cd6cb340c5"
        );
        assert_eq!(result.entries[1].pin_status, PinStatus::Pinned(0));
    }

    #[test]
    fn test_parse_destlist_win10() {
        let entries = [build_test_entry(4, 7, -1, "D:\\evidence\\triage.csv")];
        let data = build_test_destlist(4, &entries);

        let (_, result) = parse_destlist(&data).unwrap();
        assert_eq!(result.version, DestVersion::Win10);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.entries[0].entry, 7);
        assert_eq!(result.entries[0].path, "D:\\evidence\\triage.csv");
    }
}
