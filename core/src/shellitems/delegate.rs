use super::beef0004;
use crate::utils::time::fattime_utc_to_option;
use common::shortcuts::{ShellItem, ShellType};
use nom::{
    Needed, Parser,
    bytes::complete::{take, take_until},
    combinator::peek,
};
use std::mem::size_of;

/// Parse a `Delegate` `ShellItem` type. Contains two GUIDs followed by 0xbeef0004 metadata
pub(crate) fn parse_delegate(data: &[u8]) -> nom::IResult<&[u8], ShellItem> {
    let (input, _unknown) = take(size_of::<u8>())(data)?;
    let (input, _unknown_size) = take(size_of::<u16>())(input)?;
    let (input, _sig) = take(size_of::<u32>())(input)?;

    let (input, _shell_item_size) = take(size_of::<u16>())(input)?;
    let (input, _indicator) = take(size_of::<u8>())(input)?;
    let (input, _unknown2) = take(size_of::<u8>())(input)?;

    let (input, _file_size) = take(size_of::<u32>())(input)?;
    let (input, modified_data) = take(size_of::<u32>())(input)?;
    let (input, _attribute_flags) = take(size_of::<u16>())(input)?;

    // Primary name is either ASCII or UTF16. No size is given for the name. But the next shellitem data is the signature 0xBEEF0004
    // We peek until we find the signature without nomming the input
    let (input, primary_name_start) = peek(take_until([4, 0, 239, 190].as_slice())).parse(input)?;

    // Next 38 bytes after the primary name is unknown data, two GUIDs, and the signature metadata
    let adjust_size = 38;
    if primary_name_start.len() < adjust_size {
        return Err(nom::Err::Incomplete(Needed::Unknown));
    }
    let primary_name_size = primary_name_start.len() - adjust_size;

    let (input, _primary_name_data) = take(primary_name_size)(input)?;
    let (input, _unknown3) = take(size_of::<u16>())(input)?;

    let (input, _delegate_guid) = take(size_of::<u128>())(input)?;
    let (input, _class_id) = take(size_of::<u128>())(input)?;

    let (input, mut item) = beef0004::parse_beef(input, ShellType::Delegate)?;
    item.modified = fattime_utc_to_option(modified_data);

    Ok((input, item))
}

#[cfg(test)]
mod tests {
    use super::parse_delegate;
    use common::shortcuts::ShellType;

    #[test]
    fn test_parse_delegate() {
        let test_data = [
            0, 28, 0, 67, 70, 83, 70, 22, 0, 49, 0, 0, 0, 0, 0, 85, 79, 20, 189, 16, 0, 115, 111,
            117, 114, 99, 101, 0, 0, 0, 0, 116, 26, 89, 94, 150, 223, 211, 72, 141, 103, 23, 51,
            188, 238, 40, 186, 197, 205, 250, 223, 159, 103, 86, 65, 137, 71, 197, 199, 107, 192,
            182, 127, 62, 0, 9, 0, 4, 0, 239, 190, 85, 79, 20, 189, 85, 79, 20, 189, 46, 0, 0, 0,
            58, 63, 4, 0, 0, 0, 12, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 137, 188, 35, 0,
            115, 0, 111, 0, 117, 0, 114, 0, 99, 0, 101, 0, 0, 0, 66, 0, 0, 0,
        ];

        let (remaining, result) = parse_delegate(&test_data).unwrap();
        assert_eq!(result.value, "source");
        assert_eq!(result.shell_type, ShellType::Delegate);
        assert_eq!(result.mft_sequence, Some(12));
        assert_eq!(result.mft_entry, Some(278330));
        assert_eq!(result.created, Some(1571701240));
        assert_eq!(result.modified, Some(1571701240));
        assert_eq!(result.accessed, Some(1571701240));
        assert_eq!(remaining, [0, 0]);
    }
}
