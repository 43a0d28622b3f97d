use crate::utils::{
    nom_helper::{Endian, nom_unsigned_four_bytes},
    strings::{extract_utf8_string, extract_utf16_string},
};
use common::shortcuts::DriveType;
use nom::{
    Needed,
    bytes::complete::{take, take_while},
};

#[derive(Debug)]
pub(crate) struct LnkVolume {
    size: u32,
    pub(crate) drive_type: DriveType,
    pub(crate) drive_serial: String,
    label_offset: u32,
    unicode_volume_label_offset: u32,
    pub(crate) volume_label: String,
    pub(crate) unicode_volume_label: String,
}

impl LnkVolume {
    /// Parse volume metadata from `shortcut` data
    pub(crate) fn parse_volume(data: &[u8]) -> nom::IResult<&[u8], LnkVolume> {
        let (input, size) = nom_unsigned_four_bytes(data, Endian::Le)?;

        // Size includes the size itself (4 bytes)
        let adjust_size = 4;
        if size < adjust_size {
            return Err(nom::Err::Incomplete(Needed::Unknown));
        }
        let (remaining_input, input) = take(size - adjust_size)(input)?;

        let (input, drive_type) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, drive_serial) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, label_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let mut volume_info = LnkVolume {
            size,
            drive_type: LnkVolume::get_drive_type(drive_type),
            drive_serial: format!("{drive_serial:X}"),
            label_offset,
            unicode_volume_label_offset: 0,
            volume_label: String::new(),
            unicode_volume_label: String::new(),
        };

        // The offset should never be greater than the size
        // https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-shllink/16cb4ca1-9339-4d0c-a68d-bf1d6cc0f943
        if label_offset > volume_info.size {
            return Ok((remaining_input, volume_info));
        }
        let has_unicode_offset = 16;
        if label_offset > has_unicode_offset {
            let (_, offset) = nom_unsigned_four_bytes(input, Endian::Le)?;

            volume_info.unicode_volume_label_offset = offset;
        }

        let (volume_label_start, _) = take(volume_info.label_offset)(data)?;
        let (_, volume_data) = take_while(|b| b != 0)(volume_label_start)?;
        volume_info.volume_label = extract_utf8_string(volume_data);

        if volume_info.unicode_volume_label_offset > volume_info.size {
            return Ok((remaining_input, volume_info));
        }
        let no_unicode = 0;
        if volume_info.unicode_volume_label_offset != no_unicode {
            let (volume_label_start, _) = take(volume_info.unicode_volume_label_offset)(data)?;

            volume_info.unicode_volume_label = extract_utf16_string(volume_label_start);
        }
        Ok((remaining_input, volume_info))
    }

    /// Get drive types from `shortcut` data
    fn get_drive_type(drive_type: u32) -> DriveType {
        match drive_type {
            0 => DriveType::DriveUnknown,
            1 => DriveType::DriveNotRootDir,
            2 => DriveType::DriveRemovable,
            3 => DriveType::DriveFixed,
            4 => DriveType::DriveRemote,
            5 => DriveType::DriveCdrom,
            6 => DriveType::DriveRamdisk,
            _ => DriveType::None,
        }
    }
}
