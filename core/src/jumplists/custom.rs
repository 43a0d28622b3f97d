use crate::{
    filesystem::files::get_filename,
    shortcuts::shortcut::get_shortcut_data,
    utils::{
        nom_helper::{Endian, nom_unsigned_four_bytes, nom_unsigned_two_bytes},
        strings::extract_utf16_string,
    },
};
use common::jumplists::{CustomDestination, CustomEntry, EmbeddedShortcut};
use log::warn;
use nom::bytes::complete::{take, take_until};

/// Start of an embedded `Shortcut` structure. Header size plus the LNK class id
const LNK_START: [u8; 20] = [
    76, 0, 0, 0, 1, 20, 2, 0, 0, 0, 0, 0, 192, 0, 0, 0, 0, 0, 0, 70,
];
/// Value at the end of a custom destination file
const FOOTER: [u8; 4] = [171, 251, 191, 186];

/// Parse a custom destination file. A flat sequence of categories, each bundling
/// zero or more embedded `Shortcut` structures. The category index is the entry rank
pub(crate) fn parse_custom<'a>(
    data: &'a [u8],
    path: &str,
) -> nom::IResult<&'a [u8], CustomDestination> {
    let mut custom = CustomDestination {
        source_path: path.to_string(),
        app_id: get_filename(path)
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string(),
        entries: Vec::new(),
    };

    let min_size = 50;
    if data.len() < min_size {
        warn!("[jumplists] Custom destination file {path} too small. Likely empty");
        return Ok((data, custom));
    }

    let (input, _version) = nom_unsigned_four_bytes(data, Endian::Le)?;
    let (mut input, category_count) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let custom_category = 0;
    let known_category = 1;

    for rank in 0..category_count {
        let (remaining, category_type) = nom_unsigned_four_bytes(input, Endian::Le)?;
        input = remaining;

        if category_type == known_category {
            let (remaining, _known_id) = nom_unsigned_four_bytes(input, Endian::Le)?;
            input = remaining;

            // Known categories carry no embedded shortcuts
            custom.entries.push(CustomEntry {
                rank,
                display_name: None,
                shortcuts: Vec::new(),
            });
            continue;
        } else if category_type != custom_category {
            warn!("[jumplists] Unknown category type {category_type} in {path}");
            break;
        }

        let (remaining, name_chars) = nom_unsigned_two_bytes(input, Endian::Le)?;
        let utf_adjust: u32 = 2;
        let (remaining, name_data) = take(name_chars as u32 * utf_adjust)(remaining)?;
        let (remaining, entry_count) = nom_unsigned_four_bytes(remaining, Endian::Le)?;
        input = remaining;

        let name = extract_utf16_string(name_data);
        let mut entry = CustomEntry {
            rank,
            display_name: if name.is_empty() { None } else { Some(name) },
            shortcuts: Vec::new(),
        };

        for _ in 0..entry_count {
            // Each shortcut is preceded by its class id GUID. Scan to the LNK header
            let scan_result: nom::IResult<&[u8], &[u8]> = take_until(LNK_START.as_slice())(input);
            let (lnk_start, _skipped) = match scan_result {
                Ok(result) => result,
                Err(_err) => {
                    warn!("[jumplists] Missing embedded shortcut in {path}");
                    break;
                }
            };

            let (remaining, lnk_info) = match get_shortcut_data(lnk_start) {
                Ok(result) => result,
                Err(_err) => {
                    warn!("[jumplists] Could not parse embedded shortcut in {path}");
                    break;
                }
            };

            let raw_size = lnk_start.len() - remaining.len();
            entry.shortcuts.push(EmbeddedShortcut {
                shortcut: lnk_info,
                raw: lnk_start[..raw_size].to_vec(),
            });
            input = remaining;

            // Skip the terminal extension block of the shortcut
            if input.len() >= 4 {
                let (remaining, terminal) = nom_unsigned_four_bytes(input, Endian::Le)?;
                if terminal == 0 {
                    input = remaining;
                }
            }
        }

        custom.entries.push(entry);
    }

    if !input.starts_with(&FOOTER) {
        warn!("[jumplists] Custom destination file {path} missing footer");
    }

    Ok((data, custom))
}
