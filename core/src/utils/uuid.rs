use crate::utils::nom_helper::{Endian, nom_unsigned_four_bytes, nom_unsigned_two_bytes};
use log::warn;
use uuid::Uuid;

/// Convert little endian bytes to a UUID/GUID string
pub(crate) fn format_guid_le_bytes(data: &[u8]) -> String {
    let guid_size = 16;
    if data.len() != guid_size {
        warn!(
            "[uuid] Provided little endian data does not meet GUID size of 16 bytes, got: {}",
            data.len()
        );
        return format!("Not a GUID/UUID: {data:?}");
    }

    let guid_data = data.try_into();
    match guid_data {
        Ok(result) => Uuid::from_bytes_le(result).hyphenated().to_string(),
        Err(_err) => {
            warn!("[uuid] Could not convert little endian bytes to a GUID/UUID format: {data:?}");
            format!("Could not convert data: {data:?}")
        }
    }
}

/// Get the node (MAC address) portion from raw little endian GUID bytes
pub(crate) fn guid_node_mac(data: &[u8]) -> String {
    let guid_size = 16;
    let node_start = 10;
    if data.len() != guid_size {
        warn!(
            "[uuid] Provided GUID data does not meet GUID size of 16 bytes, got: {}",
            data.len()
        );
        return String::new();
    }

    // The node bytes are not byte swapped
    data[node_start..]
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<String>>()
        .join(":")
}

/// Get the embedded timestamp from raw little endian bytes of a version one (1) UUID
pub(crate) fn guid_v1_timestamp(data: &[u8]) -> Option<i64> {
    let guid_size = 16;
    if data.len() != guid_size {
        return None;
    }

    let result = get_time_bits(data);
    let (_, (time_low, time_mid, time_hi)) = match result {
        Ok(result) => result,
        Err(_err) => {
            warn!("[uuid] Could not get UUID time bits");
            return None;
        }
    };

    let version = time_hi >> 12;
    let v1 = 1;
    if version != v1 {
        return None;
    }

    // 100 nanosecond intervals since 1582-10-15
    let ticks = (((time_hi & 0xfff) as u64) << 48) | ((time_mid as u64) << 32) | time_low as u64;
    let windows_nano = 10000000;
    let gregorian_to_unix: i64 = 12219292800;

    Some((ticks / windows_nano) as i64 - gregorian_to_unix)
}

/// Parse the time portions of a little endian UUID
fn get_time_bits(data: &[u8]) -> nom::IResult<&[u8], (u32, u16, u16)> {
    let (input, time_low) = nom_unsigned_four_bytes(data, Endian::Le)?;
    let (input, time_mid) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, time_hi) = nom_unsigned_two_bytes(input, Endian::Le)?;

    Ok((input, (time_low, time_mid, time_hi)))
}
