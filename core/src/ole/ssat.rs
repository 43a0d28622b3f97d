use super::sectors::seek_sector;
use crate::utils::nom_helper::{Endian, nom_signed_four_bytes};
use nom::bytes::complete::take;

/// Using data from the header, find the slots associated with the Short Sector Allocation Table (SSAT)
pub(crate) fn collect_ssat_slots(
    data: &[u8],
    start_sector: i32,
    sector_size: u32,
) -> nom::IResult<&[u8], Vec<i32>> {
    let no_ssat = 0;
    if start_sector < no_ssat {
        return Ok((data, Vec::new()));
    }

    let (input, _) = seek_sector(data, start_sector as u32, sector_size)?;
    let (_, mut input) = take(sector_size)(input)?;

    let mut ssat_slots = Vec::new();
    let unused = -11;

    while !input.is_empty() {
        let (ssat_remaining, ssat_slot) = nom_signed_four_bytes(input, Endian::Le)?;
        if ssat_slot == unused {
            break;
        }
        ssat_slots.push(ssat_slot);
        input = ssat_remaining;
    }

    Ok((data, ssat_slots))
}

/// The SSAT may span multiple sectors. Follow the SAT chain to collect the rest
pub(crate) fn follow_ssat_chain<'a>(
    data: &'a [u8],
    sat_slots: &[i32],
    start: u32,
    sector_size: u32,
) -> nom::IResult<&'a [u8], Vec<i32>> {
    let mut ssat_slots = Vec::new();
    let mut slot_value = start;

    // The start sector index doubles as the first slot index
    while sat_slots.len() > slot_value as usize {
        let slot = sat_slots[slot_value as usize];
        // Any negative value means we have reached the end
        if slot < 0 {
            break;
        }

        // Use the slot value to jump to the next sector
        let (sector_start, _) = seek_sector(data, slot as u32, sector_size)?;
        let (_, mut value) = take(sector_size)(sector_start)?;

        let unused = -11;
        while !value.is_empty() {
            let (ssat_remaining, sat_slot) = nom_signed_four_bytes(value, Endian::Le)?;
            if sat_slot == unused {
                break;
            }
            ssat_slots.push(sat_slot);
            value = ssat_remaining;
        }

        slot_value = slot as u32;
    }

    Ok((data, ssat_slots))
}
