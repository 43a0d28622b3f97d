use super::sectors::seek_sector;
use crate::utils::nom_helper::{Endian, nom_signed_four_bytes};
use nom::bytes::complete::take;

/// Using the MSAT sector list from the header, assemble the Sector Allocation Table (SAT) slots
pub(crate) fn collect_sat_slots<'a>(
    data: &'a [u8],
    msat_sectors: &[u32],
    sector_size: u32,
) -> nom::IResult<&'a [u8], Vec<i32>> {
    let mut sat_slots = Vec::new();

    let unused = -11;
    for entry in msat_sectors {
        let (sat_start, _) = seek_sector(data, *entry, sector_size)?;

        let (_, mut remaining_data) = take(sector_size)(sat_start)?;
        // Go through SAT data and extract the slot values
        // These values are used to assemble the stream chains
        while !remaining_data.is_empty() {
            let (sat_remaining, sat_slot) = nom_signed_four_bytes(remaining_data, Endian::Le)?;
            if sat_slot == unused {
                break;
            }
            sat_slots.push(sat_slot);
            remaining_data = sat_remaining;
        }
    }

    Ok((data, sat_slots))
}

#[cfg(test)]
mod tests {
    use super::collect_sat_slots;

    #[test]
    fn test_collect_sat_slots() {
        // One 64 byte sector holding slot values, terminated by the unused marker
        let mut sector = Vec::new();
        for slot in [-3i32, 6, -2, 4, 5, 7, -2] {
            sector.extend_from_slice(&slot.to_le_bytes());
        }
        sector.extend_from_slice(&(-11i32).to_le_bytes());
        sector.resize(64, 0);

        let (_, result) = collect_sat_slots(&sector, &[0], 64).unwrap();
        assert_eq!(result, vec![-3, 6, -2, 4, 5, 7, -2]);
    }

    #[test]
    fn test_collect_sat_slots_oversized_msat_entry() {
        // Offset math for this MSAT entry does not fit in a u32
        let data = [0; 1024];
        assert!(collect_sat_slots(&data, &[0x0080_0000], 512).is_err());
    }
}
