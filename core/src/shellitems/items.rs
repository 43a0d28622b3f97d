/**
 * `ShellItems` contain metadata about the Windows Shell. Inside Jump List shortcut data they
 * describe the path through the shell namespace to the target file
 *
 * References:
 *   `https://github.com/libyal/libfwsi/blob/main/documentation/Windows%20Shell%20Item%20format.asciidoc`
 */
use super::{
    delegate::parse_delegate, directory::parse_directory, root::parse_root,
    variable::{check_beef, parse_variable}, volume::parse_drive,
};
use crate::utils::nom_helper::{Endian, nom_unsigned_one_byte};
use common::shortcuts::ShellItem;

/// Based on the provided bytes determine the `ShellItem` type and parse it
pub(crate) fn detect_shellitem(data: &[u8]) -> nom::IResult<&[u8], ShellItem> {
    let (input, item_type) = nom_unsigned_one_byte(data, Endian::Le)?;
    // Determine `ShellItem` using known IDs, signatures, and expected `ShellItem` size
    let directory_items = [0x31, 0x30, 0x32, 0x35, 0xb2];
    let drive_items = [0x2f, 0x23, 0x25, 0x29, 0x2a, 0x2e];
    let delegate = 0x74;
    let root_folder = 0x1f;

    let beef0004 = [4, 0, 239, 190];
    let beef00 = [0, 239, 190];

    if directory_items.contains(&item_type) && check_beef(input, &beef0004) {
        return parse_directory(input);
    }

    if drive_items.contains(&item_type) {
        let drive_size = 23;
        if data.len() == drive_size {
            return parse_drive(input);
        }
        if check_beef(data, &beef00) || data.len() < drive_size {
            return parse_root(input);
        }
        return parse_variable(data);
    }

    if item_type == delegate {
        return parse_delegate(input);
    }

    if item_type == root_folder {
        return parse_root(input);
    }

    parse_variable(data)
}
