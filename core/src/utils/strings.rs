use log::warn;
use std::string::{FromUtf8Error, FromUtf16Error};

/// Get a UTF16 string from provided bytes data. Will attempt to fix malformed UTF16. Such as UTF16 missing zeros
pub(crate) fn extract_utf16_string(data: &[u8]) -> String {
    let result = bytes_to_utf16_string(data, &false);
    match result {
        Ok(result) => result,
        Err(_err) => {
            // If we fail, try again with adjustment. Just incase it works.
            let result = bytes_to_utf16_string(data, &true);
            match result {
                Ok(result) => result,
                Err(err) => {
                    warn!("[strings] Failed to get UTF16 string: {err:?}");
                    String::from_utf8_lossy(data).to_string()
                }
            }
        }
    }
}

/// Get a UTF16 string from provided bytes data
fn bytes_to_utf16_string(data: &[u8], adjust: &bool) -> Result<String, FromUtf16Error> {
    let mut utf16_data: Vec<u16> = Vec::new();
    // Convert data to UTF16 (&[u16])
    let min_byte_size = 2;
    for wide_char in data.chunks(min_byte_size) {
        if wide_char == vec![0, 0] || wide_char.len() < min_byte_size {
            // Check for last character
            if !wide_char.is_empty() && !wide_char.contains(&0) {
                utf16_data.push(wide_char[0] as u16);
            }
            break;
        }

        // Sometimes we have to encode to UTF16 for some strings
        if !wide_char.contains(&0) && *adjust {
            utf16_data.push(wide_char[0] as u16);
            utf16_data.push(wide_char[1] as u16);
            continue;
        }
        if wide_char[0] == 0 {
            utf16_data.push(u16::from_ne_bytes([wide_char[1], wide_char[0]]));
            continue;
        }

        utf16_data.push(u16::from_ne_bytes([wide_char[0], wide_char[1]]));
    }

    // Windows uses UTF16
    let utf16_result = String::from_utf16(&utf16_data)?;

    Ok(utf16_result)
}

/// Get a UTF8 string from provided bytes data
fn bytes_to_utf8_string(data: &[u8]) -> Result<String, FromUtf8Error> {
    let result = String::from_utf8(data.to_vec())?;
    let value = result.trim_end_matches('\0').to_string();
    Ok(value)
}

/// Get a UTF8 string from provided bytes data. Invalid UTF8 is replaced
pub(crate) fn extract_utf8_string(data: &[u8]) -> String {
    let utf8_result = bytes_to_utf8_string(data);
    match utf8_result {
        Ok(result) => result,
        Err(err) => {
            warn!("[strings] Failed to get UTF8 string: {err:?}");
            String::from_utf8_lossy(data)
                .trim_end_matches('\0')
                .to_string()
        }
    }
}

/// Try to detect UTF8 or UTF16 byte string
pub(crate) fn extract_ascii_utf16_string(data: &[u8]) -> String {
    if data.iter().filter(|&c| *c == 0).count() <= 1 {
        match bytes_to_utf8_string(data) {
            Ok(value) => value,
            Err(_err) => extract_utf16_string(data),
        }
    } else {
        extract_utf16_string(data)
    }
}
