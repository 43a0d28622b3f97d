use super::sectors::seek_sector;
use crate::utils::{
    nom_helper::{
        Endian, nom_signed_four_bytes, nom_unsigned_eight_bytes, nom_unsigned_four_bytes,
        nom_unsigned_one_byte, nom_unsigned_two_bytes,
    },
    strings::extract_utf16_string,
    time::filetime_to_unixepoch,
    uuid::format_guid_le_bytes,
};
use nom::bytes::complete::take;

/// Using the SAT or SSAT slot values, assemble a stream chain
pub(crate) fn assemble_chain<'a>(
    data: &'a [u8],
    slots: &[i32],
    start: u32,
    size: u32,
) -> nom::IResult<&'a [u8], Vec<u8>> {
    let mut stream_data = Vec::new();

    // Go to start of first sector
    let (sector_start, _) = seek_sector(data, start, size)?;
    if sector_start.len() < size as usize {
        stream_data.append(&mut sector_start.to_vec());
        return Ok((data, stream_data));
    }

    let (_, value) = take(size)(sector_start)?;
    stream_data.append(&mut value.to_vec());
    let mut slot_value = start;

    // The start sector index doubles as the first slot index
    while slots.len() > slot_value as usize {
        let slot = slots[slot_value as usize];
        // Any negative value means we have reached the end
        if slot < 0 {
            break;
        }

        // Use the slot value to jump to the next sector
        let (sector_start, _) = seek_sector(data, slot as u32, size)?;

        if sector_start.len() < size as usize {
            // Get rest of the stream data
            let (_, value) = take(sector_start.len())(sector_start)?;
            stream_data.append(&mut value.to_vec());
            break;
        }

        let (_, value) = take(size)(sector_start)?;
        slot_value = slot as u32;

        stream_data.append(&mut value.to_vec());
    }

    Ok((data, stream_data))
}

#[derive(Debug)]
pub(crate) struct OleEntry {
    pub(crate) name: String,
    _name_size: u16,
    pub(crate) entry_type: EntryType,
    _color: u8,
    _previous_id: i32,
    _next_id: i32,
    _id: i32,
    _class_id: String,
    _flags: u32,
    _created: i64,
    _modified: i64,
    pub(crate) sector_id: i32,
    pub(crate) entry_size: u32,
}

#[derive(Debug, PartialEq)]
pub(crate) enum EntryType {
    Empty,
    Storage,
    Stream,
    LockBytes,
    Property,
    Root,
    Unknown,
}

/// Parse the OLE directory stream. Each entry is 128 bytes
pub(crate) fn parse_directory(data: &[u8]) -> nom::IResult<&[u8], Vec<OleEntry>> {
    let min_size = 128;

    let mut input = data;
    let mut entries = Vec::new();
    while input.len() >= min_size {
        let string_size: u8 = 64;
        let (remaining_input, string_data) = take(string_size)(input)?;
        let (remaining_input, name_size) = nom_unsigned_two_bytes(remaining_input, Endian::Le)?;
        let (remaining_input, type_data) = nom_unsigned_one_byte(remaining_input, Endian::Le)?;
        let (remaining_input, color) = nom_unsigned_one_byte(remaining_input, Endian::Le)?;

        let (remaining_input, previous_id) = nom_signed_four_bytes(remaining_input, Endian::Le)?;
        let (remaining_input, next_id) = nom_signed_four_bytes(remaining_input, Endian::Le)?;
        let (remaining_input, id) = nom_signed_four_bytes(remaining_input, Endian::Le)?;

        let class_size: u8 = 16;
        let (remaining_input, class_data) = take(class_size)(remaining_input)?;
        let (remaining_input, flags) = nom_unsigned_four_bytes(remaining_input, Endian::Le)?;

        let (remaining_input, created) = nom_unsigned_eight_bytes(remaining_input, Endian::Le)?;
        let (remaining_input, modified) = nom_unsigned_eight_bytes(remaining_input, Endian::Le)?;
        let (remaining_input, sector_id) = nom_signed_four_bytes(remaining_input, Endian::Le)?;

        let (remaining_input, entry_size) = nom_unsigned_four_bytes(remaining_input, Endian::Le)?;
        let (remaining_input, _reserved) = nom_unsigned_four_bytes(remaining_input, Endian::Le)?;

        input = remaining_input;

        let entry = OleEntry {
            name: extract_utf16_string(string_data),
            _name_size: name_size,
            entry_type: get_entry_type(&type_data),
            _color: color,
            _previous_id: previous_id,
            _next_id: next_id,
            _id: id,
            _class_id: format_guid_le_bytes(class_data),
            _flags: flags,
            _created: filetime_to_unixepoch(&created),
            _modified: filetime_to_unixepoch(&modified),
            sector_id,
            entry_size,
        };

        entries.push(entry);
    }
    Ok((input, entries))
}

/// Determine OLE directory entry type
fn get_entry_type(entry_type: &u8) -> EntryType {
    match entry_type {
        0 => EntryType::Empty,
        1 => EntryType::Storage,
        2 => EntryType::Stream,
        3 => EntryType::LockBytes,
        4 => EntryType::Property,
        5 => EntryType::Root,
        _ => EntryType::Unknown,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{EntryType, assemble_chain, get_entry_type, parse_directory};

    /// Build one 128 byte directory entry for tests
    pub(crate) fn build_test_entry(name: &str, entry_type: u8, sector_id: i32, size: u32) -> Vec<u8> {
        let mut entry = Vec::new();
        for wide_char in name.encode_utf16() {
            entry.extend_from_slice(&wide_char.to_le_bytes());
        }
        entry.resize(64, 0);
        entry.extend_from_slice(&(((name.len() + 1) * 2) as u16).to_le_bytes());
        entry.push(entry_type);
        entry.push(1);
        entry.extend_from_slice(&(-1i32).to_le_bytes());
        entry.extend_from_slice(&(-1i32).to_le_bytes());
        entry.extend_from_slice(&(-1i32).to_le_bytes());
        entry.extend_from_slice(&[0; 16]);
        entry.extend_from_slice(&0u32.to_le_bytes());
        entry.extend_from_slice(&0u64.to_le_bytes());
        entry.extend_from_slice(&0u64.to_le_bytes());
        entry.extend_from_slice(&sector_id.to_le_bytes());
        entry.extend_from_slice(&size.to_le_bytes());
        entry.extend_from_slice(&0u32.to_le_bytes());
        entry
    }

    #[test]
    fn test_parse_directory() {
        let mut data = build_test_entry("Root Entry", 5, 2, 128);
        data.append(&mut build_test_entry("DestList", 2, 0, 64));

        let (_, result) = parse_directory(&data).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Root Entry");
        assert_eq!(result[0].entry_type, EntryType::Root);
        assert_eq!(result[1].name, "DestList");
        assert_eq!(result[1].entry_type, EntryType::Stream);
        assert_eq!(result[1].sector_id, 0);
        assert_eq!(result[1].entry_size, 64);
    }

    #[test]
    fn test_assemble_chain() {
        // Sector zero (0) chains to sector one (1)
        let mut data = vec![1; 64];
        data.extend_from_slice(&[2; 64]);

        let (_, result) = assemble_chain(&data, &[1, -2], 0, 64).unwrap();
        assert_eq!(result.len(), 128);
        assert_eq!(result[0], 1);
        assert_eq!(result[127], 2);
    }

    #[test]
    fn test_get_entry_type() {
        assert_eq!(get_entry_type(&1), EntryType::Storage);
        assert_eq!(get_entry_type(&9), EntryType::Unknown);
    }
}
