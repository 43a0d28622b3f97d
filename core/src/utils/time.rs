use crate::utils::nom_helper::{Endian, nom_unsigned_two_bytes};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};
use log::error;

/// Convert Windows filetime values to unixepoch
pub(crate) fn filetime_to_unixepoch(filetime: &u64) -> i64 {
    let windows_nano = 10000000;
    let seconds_to_unix: i64 = 11644473600;

    // We should not overflow because of the division.
    (filetime / windows_nano) as i64 - seconds_to_unix
}

/// Convert Windows filetime to unixepoch. Unset values (zero or the year 1601) return `None`
pub(crate) fn filetime_to_option(filetime: &u64) -> Option<i64> {
    let not_set = 0;
    if *filetime == not_set {
        return None;
    }

    let epoch = filetime_to_unixepoch(filetime);
    let sentinel_year = 1601;
    match DateTime::from_timestamp(epoch, 0) {
        Some(value) if value.year() != sentinel_year => Some(epoch),
        _ => None,
    }
}

/// Convert Windows FAT time (UTC) values to unixepoch
pub(crate) fn fattime_utc_to_unixepoch(fattime: &[u8]) -> i64 {
    let result = get_fat_bits(fattime);
    let (_, (date, time)) = match result {
        Ok(result) => result,
        Err(_err) => {
            error!("[time] Could not get FAT time");
            return 0;
        }
    };

    let day_sec_adjust = 0x1f;
    let month_adjust = 0x1e0;
    let month_min_shift = 5;
    let year_hour_adjust = 0xfe00;
    let year_shift = 9;
    let year_start = 1980;

    let year = ((date & year_hour_adjust) >> year_shift) + year_start;
    let month = (date & month_adjust) >> month_min_shift;
    let day = date & day_sec_adjust;

    let sec_multi = 2;
    let min_adjust = 0x7e0;
    let hour_shift = 11;

    let hour = (time & year_hour_adjust) >> hour_shift;
    let min = (time & min_adjust) >> month_min_shift;
    let second = (time & day_sec_adjust) * sec_multi;

    let ymd_opt = NaiveDate::from_ymd_opt(year as i32, month, day);
    let ymd = if let Some(result) = ymd_opt {
        result
    } else {
        error!("[time] Could not get FAT time year month day");
        return 0;
    };

    let hms_opt = NaiveTime::from_hms_opt(hour, min, second);
    let hms = if let Some(result) = hms_opt {
        result
    } else {
        error!("[time] Could not get FAT time hour min sec");
        return 0;
    };

    // The FAT time is already in UTC format
    NaiveDateTime::new(ymd, hms).and_utc().timestamp()
}

/// Convert Windows FAT time to unixepoch. Unset values return `None`
pub(crate) fn fattime_utc_to_option(fattime: &[u8]) -> Option<i64> {
    let not_set = [0, 0, 0, 0];
    if fattime == not_set {
        return None;
    }

    let epoch = fattime_utc_to_unixepoch(fattime);
    if epoch == 0 { None } else { Some(epoch) }
}

/// Parse the bits in FAT timestamp
fn get_fat_bits(fattime: &[u8]) -> nom::IResult<&[u8], (u32, u32)> {
    let (input, date) = nom_unsigned_two_bytes(fattime, Endian::Le)?;
    let (input, time) = nom_unsigned_two_bytes(input, Endian::Le)?;

    Ok((input, (date as u32, time as u32)))
}

/// Convert `UnixEpoch` to ISO8601 format
pub(crate) fn unixepoch_to_iso(timestamp: i64) -> String {
    let iso_opt = DateTime::from_timestamp(timestamp, 0);
    match iso_opt {
        Some(result) => result.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => String::from("1970-01-01T00:00:00.000Z"),
    }
}

/// Render an optional timestamp. Unset values render as an empty string
pub(crate) fn optional_iso(timestamp: &Option<i64>) -> String {
    match timestamp {
        Some(value) => unixepoch_to_iso(*value),
        None => String::new(),
    }
}
