use crate::utils::uuid::format_guid_le_bytes;
use common::shortcuts::{ShellItem, ShellType};
use nom::bytes::complete::take;
use std::mem::size_of;

/// Parse a `Root` `ShellItem` type. Contains a GUID and optional extension data. Currently only the GUID is returned
pub(crate) fn parse_root(data: &[u8]) -> nom::IResult<&[u8], ShellItem> {
    let (input, _sort_index) = take(size_of::<u8>())(data)?;

    let (input, guid) = take(size_of::<u128>())(input)?;
    let root_item = ShellItem {
        value: format_guid_le_bytes(guid),
        shell_type: ShellType::RootFolder,
        created: None,
        modified: None,
        accessed: None,
        mft_entry: None,
        mft_sequence: None,
    };

    Ok((input, root_item))
}
