use crate::utils::{
    nom_helper::{
        Endian, nom_signed_four_bytes, nom_unsigned_eight_bytes, nom_unsigned_four_bytes,
        nom_unsigned_two_bytes,
    },
    uuid::format_guid_le_bytes,
};
use nom::bytes::complete::take;

/// Signature of an OLE compound file as a little endian u64
pub(crate) const OLE_SIGNATURE: u64 = 0xe11ab1a1e011cfd0;

#[derive(Debug)]
pub(crate) struct OleHeader {
    _sig: u64,
    _class_id: String,
    _minor_version: u16,
    _major_version: u16,
    _byte_order: u16,
    /**Raised to power of two (2) */
    pub(crate) sector_size: u16,
    /**Raised to power of two (2) */
    pub(crate) short_sector_size: u16,
    _total_sectors: u32,
    /**Sector ID (SID) of directory stream (chain) */
    pub(crate) sector_id_chain: u32,
    /**Typically 4096 bytes. Smaller sizes stored in short-streams */
    pub(crate) min_stream_size: u32,
    /**Sector ID (SID) of short-sector allocation table (SSAT) */
    pub(crate) sector_id_ssat: i32,
    _total_ssat_sectors: u32,
    _sector_id_msat: u32,
    _total_msat_sectors: u32,
    /**First part of the MSAT. Contains up to 109 SIDs */
    pub(crate) msat_sectors: Vec<u32>,
}

impl OleHeader {
    /// Parse the header of an OLE compound file
    pub(crate) fn parse_header(data: &[u8]) -> nom::IResult<&[u8], OleHeader> {
        let (input, sig) = nom_unsigned_eight_bytes(data, Endian::Le)?;
        let guid_size: u8 = 16;
        let (input, class_id_data) = take(guid_size)(input)?;

        let (input, minor_version) = nom_unsigned_two_bytes(input, Endian::Le)?;
        let (input, major_version) = nom_unsigned_two_bytes(input, Endian::Le)?;
        let (input, byte_order) = nom_unsigned_two_bytes(input, Endian::Le)?;
        let (input, sector_size) = nom_unsigned_two_bytes(input, Endian::Le)?;
        let (input, short_sector_size) = nom_unsigned_two_bytes(input, Endian::Le)?;
        let (input, _reserved) = nom_unsigned_two_bytes(input, Endian::Le)?;
        let (input, _reserved2) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, _reserved3) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let (input, total_sectors) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, sector_id_chain) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, _reserved4) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, min_stream_size) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, sector_id_ssat) = nom_signed_four_bytes(input, Endian::Le)?;
        let (input, total_ssat_sectors) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, sector_id_msat) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, total_msat_sectors) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let msat_size: u16 = 436;
        let (input, mut msat) = take(msat_size)(input)?;

        let mut msat_sectors = Vec::new();

        let unused = 0xffffffff;
        while !msat.is_empty() {
            let (msat_data, value) = nom_unsigned_four_bytes(msat, Endian::Le)?;
            if value == unused {
                break;
            }

            msat_sectors.push(value);
            msat = msat_data;
        }

        let header = OleHeader {
            _sig: sig,
            _class_id: format_guid_le_bytes(class_id_data),
            _minor_version: minor_version,
            _major_version: major_version,
            _byte_order: byte_order,
            sector_size,
            short_sector_size,
            _total_sectors: total_sectors,
            sector_id_chain,
            min_stream_size,
            sector_id_ssat,
            _total_ssat_sectors: total_ssat_sectors,
            _sector_id_msat: sector_id_msat,
            _total_msat_sectors: total_msat_sectors,
            msat_sectors,
        };
        Ok((input, header))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{OLE_SIGNATURE, OleHeader};

    /// Build a minimal 512 byte OLE header for tests
    pub(crate) fn build_test_header() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&OLE_SIGNATURE.to_le_bytes());
        data.extend_from_slice(&[0; 16]);
        data.extend_from_slice(&62u16.to_le_bytes()); // minor version
        data.extend_from_slice(&3u16.to_le_bytes()); // major version
        data.extend_from_slice(&0xfeffu16.to_le_bytes()); // little endian marker
        data.extend_from_slice(&9u16.to_le_bytes()); // 512 byte sectors
        data.extend_from_slice(&6u16.to_le_bytes()); // 64 byte short sectors
        data.extend_from_slice(&[0; 10]);
        data.extend_from_slice(&1u32.to_le_bytes()); // total SAT sectors
        data.extend_from_slice(&1u32.to_le_bytes()); // directory chain start
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&4096u32.to_le_bytes()); // min stream size
        data.extend_from_slice(&(-2i32).to_le_bytes()); // no SSAT
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0xfffffffeu32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes()); // first MSAT entry points at sector 0
        data.resize(512, 0xff);
        data
    }

    #[test]
    fn test_parse_header() {
        let data = build_test_header();
        let (_, result) = OleHeader::parse_header(&data).unwrap();
        assert_eq!(result._sig, OLE_SIGNATURE);
        assert_eq!(result.sector_size, 9);
        assert_eq!(result.short_sector_size, 6);
        assert_eq!(result.sector_id_chain, 1);
        assert_eq!(result.min_stream_size, 4096);
        assert_eq!(result.sector_id_ssat, -2);
        assert_eq!(result.msat_sectors, vec![0]);
    }
}
