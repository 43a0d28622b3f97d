use crate::utils::{
    nom_helper::{Endian, nom_unsigned_four_bytes},
    strings::{extract_utf8_string, extract_utf16_string},
    uuid::{format_guid_le_bytes, guid_node_mac, guid_v1_timestamp},
};
use common::shortcuts::{ExtraBlock, TrackerBlock};
use log::warn;
use nom::bytes::complete::{take, take_while};
use std::mem::size_of;

const ENVIRONMENT_SIG: u32 = 0xa0000001;
const CONSOLE_SIG: u32 = 0xa0000002;
const TRACKER_SIG: u32 = 0xa0000003;
const CODEPAGE_SIG: u32 = 0xa0000004;
const SPECIAL_FOLDER_SIG: u32 = 0xa0000005;
const DARWIN_SIG: u32 = 0xa0000006;
const ICON_ENVIRONMENT_SIG: u32 = 0xa0000007;
const SHIM_SIG: u32 = 0xa0000008;
const PROPERTY_STORE_SIG: u32 = 0xa0000009;
const KNOWN_FOLDER_SIG: u32 = 0xa000000b;
const VISTA_ID_LIST_SIG: u32 = 0xa000000c;

/// Parse the extension blocks that follow the `shortcut` data strings.
/// Each block carries its total size and a signature. A size below the minimum ends the list
pub(crate) fn parse_extras(data: &[u8]) -> nom::IResult<&[u8], Vec<ExtraBlock>> {
    let mut input = data;
    let mut blocks = Vec::new();

    let min_block_size = 8;
    while input.len() >= min_block_size {
        let (remaining, size) = nom_unsigned_four_bytes(input, Endian::Le)?;
        if (size as usize) < min_block_size {
            break;
        }

        // Size includes the size itself (4 bytes)
        let adjust_size = 4;
        let block_result: nom::IResult<&[u8], &[u8]> = take(size - adjust_size)(remaining);
        let (rest, block_data) = match block_result {
            Ok(result) => result,
            Err(_err) => {
                warn!("[shortcuts] Extra block size {size} larger than remaining data");
                break;
            }
        };
        let (block_input, sig) = nom_unsigned_four_bytes(block_data, Endian::Le)?;

        match sig {
            ENVIRONMENT_SIG => match parse_target_path(block_input) {
                Ok((_, path)) => blocks.push(ExtraBlock::Environment(path)),
                Err(_err) => warn!("[shortcuts] Could not parse environment block"),
            },
            CONSOLE_SIG => blocks.push(ExtraBlock::Console),
            TRACKER_SIG => match parse_tracker(block_input) {
                Ok((_, tracker)) => blocks.push(ExtraBlock::Tracker(tracker)),
                Err(_err) => warn!("[shortcuts] Could not parse tracker block"),
            },
            CODEPAGE_SIG => match nom_unsigned_four_bytes(block_input, Endian::Le) {
                Ok((_, codepage)) => blocks.push(ExtraBlock::Codepage(codepage)),
                Err(_err) => warn!("[shortcuts] Could not parse codepage block"),
            },
            SPECIAL_FOLDER_SIG => match nom_unsigned_four_bytes(block_input, Endian::Le) {
                Ok((_, folder_id)) => blocks.push(ExtraBlock::SpecialFolder(folder_id)),
                Err(_err) => warn!("[shortcuts] Could not parse special folder block"),
            },
            DARWIN_SIG => match parse_target_path(block_input) {
                Ok((_, darwin_id)) => blocks.push(ExtraBlock::Darwin(darwin_id)),
                Err(_err) => warn!("[shortcuts] Could not parse darwin block"),
            },
            ICON_ENVIRONMENT_SIG => match parse_target_path(block_input) {
                Ok((_, path)) => blocks.push(ExtraBlock::IconEnvironment(path)),
                Err(_err) => warn!("[shortcuts] Could not parse icon environment block"),
            },
            SHIM_SIG => blocks.push(ExtraBlock::Shim(extract_utf16_string(block_input))),
            PROPERTY_STORE_SIG => blocks.push(ExtraBlock::PropertyStore),
            KNOWN_FOLDER_SIG => {
                let guid_result: nom::IResult<&[u8], &[u8]> =
                    take(size_of::<u128>())(block_input);
                match guid_result {
                    Ok((_, guid_data)) => {
                        blocks.push(ExtraBlock::KnownFolder(format_guid_le_bytes(guid_data)));
                    }
                    Err(_err) => warn!("[shortcuts] Could not parse known folder block"),
                }
            }
            VISTA_ID_LIST_SIG => blocks.push(ExtraBlock::VistaIdList),
            _ => warn!("[shortcuts] Unknown extra block signature: {sig:#x}"),
        }

        input = rest;
    }

    Ok((input, blocks))
}

/// Extract the target path from an environment style block. An ANSI path is followed by an optional UTF16 path
fn parse_target_path(data: &[u8]) -> nom::IResult<&[u8], String> {
    let ansi_size: u16 = 260;
    let (input, ansi_data) = take(ansi_size)(data)?;
    let (_, ansi_path) = take_while(|b| b != 0)(ansi_data)?;

    let unicode_path = extract_utf16_string(input);
    if unicode_path.is_empty() {
        return Ok((input, extract_utf8_string(ansi_path)));
    }
    Ok((input, unicode_path))
}

/// Parse distributed link tracking data. The MAC address and creation timestamp come from the
/// version one (1) file droid UUID
fn parse_tracker(data: &[u8]) -> nom::IResult<&[u8], TrackerBlock> {
    let (input, _tracker_size) = nom_unsigned_four_bytes(data, Endian::Le)?;
    let (input, _tracker_version) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let machine_size: u8 = 16;
    let (input, machine_data) = take(machine_size)(input)?;
    let (input, droid_volume) = take(size_of::<u128>())(input)?;
    let (input, droid_file) = take(size_of::<u128>())(input)?;
    let (input, birth_volume) = take(size_of::<u128>())(input)?;
    let (input, birth_file) = take(size_of::<u128>())(input)?;

    let tracker = TrackerBlock {
        machine_id: extract_utf8_string(machine_data),
        mac_address: guid_node_mac(droid_file),
        created: guid_v1_timestamp(droid_file),
        droid_volume_id: format_guid_le_bytes(droid_volume),
        droid_file_id: format_guid_le_bytes(droid_file),
        birth_droid_volume_id: format_guid_le_bytes(birth_volume),
        birth_droid_file_id: format_guid_le_bytes(birth_file),
    };

    Ok((input, tracker))
}
