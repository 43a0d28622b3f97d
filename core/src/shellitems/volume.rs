use crate::utils::strings::extract_utf8_string;
use common::shortcuts::{ShellItem, ShellType};
use nom::bytes::complete::take;

/// Grab the Volume Drive
pub(crate) fn parse_drive(data: &[u8]) -> nom::IResult<&[u8], ShellItem> {
    // Drive shellitem just contains a drive letter
    let drive = extract_utf8_string(data);
    let shellitem = ShellItem {
        value: drive,
        shell_type: ShellType::Volume,
        created: None,
        modified: None,
        accessed: None,
        mft_entry: None,
        mft_sequence: None,
    };

    let (input, _) = take(data.len())(data)?;
    Ok((input, shellitem))
}

#[cfg(test)]
mod tests {
    use super::parse_drive;
    use common::shortcuts::ShellType;

    #[test]
    fn test_parse_drive() {
        let test_data = [
            67, 58, 92, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ];

        let (_, result) = parse_drive(&test_data).unwrap();
        assert_eq!(result.value, "C:\\");
        assert_eq!(result.shell_type, ShellType::Volume);
        assert_eq!(result.mft_entry, None);
        assert_eq!(result.created, None);
    }
}
