use super::beef0004;
use common::shortcuts::{ShellItem, ShellType};
use nom::bytes::complete::{take, take_until};

/// Check if the item data contains a byte signature anywhere
pub(crate) fn check_beef(data: &[u8], sig: &[u8]) -> bool {
    scan_bytes(data, sig).is_ok()
}

/// Scan for a target byte signature. The output is the data before the signature
fn scan_bytes<'a>(data: &'a [u8], target: &[u8]) -> nom::IResult<&'a [u8], &'a [u8]> {
    take_until(target)(data)
}

/// Parse a `variable` `ShellItem`. May contain a 0xbeef0004 extension with name and timestamps
pub(crate) fn parse_variable(data: &[u8]) -> nom::IResult<&[u8], ShellItem> {
    let beef0004_sig = [4, 0, 239, 190];
    if let Ok((_, prefix)) = scan_bytes(data, &beef0004_sig) {
        // The extension block starts 4 bytes before the signature
        let beef_adjust = 4;
        if prefix.len() >= beef_adjust {
            let (input, _) = take(prefix.len() - beef_adjust)(data)?;
            return beef0004::parse_beef(input, ShellType::Variable);
        }
    }

    let variable_item = ShellItem {
        value: String::new(),
        shell_type: ShellType::Variable,
        created: None,
        modified: None,
        accessed: None,
        mft_entry: None,
        mft_sequence: None,
    };
    let (input, _) = take(data.len())(data)?;
    Ok((input, variable_item))
}
