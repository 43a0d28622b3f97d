use log::warn;
use nom::bytes::complete::take;
use nom::error::ErrorKind;

/// Advance to the start of the provided sector. The offset math is done in 64 bits,
/// a sector id pointing past the end of the file is a parse failure instead of a panic
pub(crate) fn seek_sector(
    data: &[u8],
    sector_id: u32,
    sector_size: u32,
) -> nom::IResult<&[u8], &[u8]> {
    let offset = u64::from(sector_id) * u64::from(sector_size);
    if offset > data.len() as u64 {
        warn!("[ole] Sector id {sector_id} points beyond the end of the file");
        return Err(nom::Err::Failure(nom::error::Error::new(
            data,
            ErrorKind::TooLarge,
        )));
    }

    take(offset as usize)(data)
}
