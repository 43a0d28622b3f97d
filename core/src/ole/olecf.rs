use super::{
    directory::{EntryType, assemble_chain, parse_directory},
    header::OleHeader,
    sat::collect_sat_slots,
    ssat::{collect_ssat_slots, follow_ssat_chain},
};
use log::error;

#[derive(Debug)]
pub(crate) struct OleStream {
    pub(crate) name: String,
    /**Raw bytes associated with the stream, includes slack space */
    pub(crate) data: Vec<u8>,
    pub(crate) entry_type: EntryType,
}

impl OleStream {
    /// Parse an OLE compound file and return all of its streams
    pub(crate) fn parse_ole(data: &[u8]) -> nom::IResult<&[u8], Vec<OleStream>> {
        let (input, header) = OleHeader::parse_header(data)?;

        // All sector sizes are exponents to apply to two (2)
        let size: u32 = 2;
        let sector_size = size.pow(header.sector_size as u32);
        let small_size = size.pow(header.short_sector_size as u32);
        let (_, sat_slots) = collect_sat_slots(input, &header.msat_sectors, sector_size)?;

        let no_ssat = -2;
        let ssat_slots = if header.sector_id_ssat != no_ssat {
            let (_, mut ssat_slots) = collect_ssat_slots(input, header.sector_id_ssat, sector_size)?;
            let (_, mut additional_ssat) = follow_ssat_chain(
                input,
                &sat_slots,
                header.sector_id_ssat as u32,
                sector_size,
            )?;
            ssat_slots.append(&mut additional_ssat);
            ssat_slots
        } else {
            Vec::new()
        };

        let (_, directory_data) =
            assemble_chain(input, &sat_slots, header.sector_id_chain, sector_size)?;
        let dir_result = parse_directory(&directory_data);
        let entries = match dir_result {
            Ok((_, result)) => result,
            Err(_err) => {
                error!("[ole] Failed to get OLE directory entries");
                Vec::new()
            }
        };

        let mut root_data = Vec::new();

        // Root entry data backs streams smaller than the min stream size
        for entry in entries.iter() {
            if entry.entry_type != EntryType::Root || entry.sector_id < 0 {
                continue;
            }

            let (_, results) =
                assemble_chain(input, &sat_slots, entry.sector_id as u32, sector_size)?;
            root_data = results;
        }

        let mut streams = Vec::new();
        for entry in entries {
            // Cannot get data if sector_id is negative
            if entry.sector_id < 0 {
                continue;
            }

            if entry.entry_type == EntryType::Root {
                streams.push(OleStream {
                    name: entry.name,
                    data: root_data.clone(),
                    entry_type: entry.entry_type,
                });
                continue;
            }

            let empty = 0;
            if entry.entry_size == empty {
                streams.push(OleStream {
                    name: entry.name,
                    data: Vec::new(),
                    entry_type: entry.entry_type,
                });
                continue;
            }

            // Streams smaller than the min stream size live in the short sectors of the root data
            let results = if entry.entry_size < header.min_stream_size {
                match assemble_chain(&root_data, &ssat_slots, entry.sector_id as u32, small_size) {
                    Ok((_, results)) => results,
                    Err(_err) => {
                        error!(
                            "[ole] Could not assemble SSAT data associated with stream: {}",
                            entry.name
                        );
                        continue;
                    }
                }
            } else {
                match assemble_chain(input, &sat_slots, entry.sector_id as u32, sector_size) {
                    Ok((_, results)) => results,
                    Err(_err) => {
                        error!(
                            "[ole] Could not assemble SAT data associated with stream: {}",
                            entry.name
                        );
                        continue;
                    }
                }
            };

            streams.push(OleStream {
                name: entry.name,
                data: results,
                entry_type: entry.entry_type,
            });
        }

        Ok((data, streams))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::OleStream;
    use crate::ole::directory::EntryType;
    use crate::ole::directory::tests::build_test_entry;
    use crate::ole::header::tests::build_test_header;

    /// Build a minimal compound file with one stream for tests
    pub(crate) fn build_test_ole(stream_name: &str, stream_data: &[u8]) -> Vec<u8> {
        let mut data = build_test_header();
        // Streams in the test container always use regular sectors
        data[56..60].copy_from_slice(&0u32.to_le_bytes());

        // Sector zero (0) holds the SAT
        let mut sat = Vec::new();
        for slot in [-3i32, -2, -2] {
            sat.extend_from_slice(&slot.to_le_bytes());
        }
        while sat.len() < 512 {
            sat.extend_from_slice(&(-1i32).to_le_bytes());
        }
        data.append(&mut sat);

        // Sector one (1) holds the directory
        let mut dir = build_test_entry("Root Entry", 5, -2, 0);
        dir.append(&mut build_test_entry(stream_name, 2, 2, stream_data.len() as u32));
        dir.append(&mut build_test_entry("", 0, -1, 0));
        dir.append(&mut build_test_entry("", 0, -1, 0));
        data.append(&mut dir);

        // Sector two (2) holds the stream
        let mut stream = stream_data.to_vec();
        stream.resize(512, 0);
        data.append(&mut stream);
        data
    }

    #[test]
    fn test_parse_ole() {
        let payload = [9; 64];
        let data = build_test_ole("DestList", &payload);

        let (_, results) = OleStream::parse_ole(&data).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "DestList");
        assert_eq!(results[0].entry_type, EntryType::Stream);
        assert_eq!(results[0].data.len(), 512);
        assert_eq!(&results[0].data[0..64], &payload);
    }
}
