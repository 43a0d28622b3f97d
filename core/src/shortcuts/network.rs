use crate::utils::{
    nom_helper::{Endian, nom_unsigned_four_bytes},
    strings::{extract_utf8_string, extract_utf16_string},
};
use nom::{
    Needed,
    bytes::complete::{take, take_while},
};

#[derive(Debug)]
pub(crate) struct LnkNetwork {
    _size: u32,
    _flags: u32,
    name_offset: u32,
    device_offset: u32,
    _provider_type: u32,
    unicode_share_name_offset: u32,
    unicode_device_name_offset: u32,
    pub(crate) share_name: String,
    pub(crate) device_name: String,
    pub(crate) unicode_share_name: String,
    pub(crate) unicode_device_name: String,
}

impl LnkNetwork {
    /// Parse network share metadata from `shortcut` data
    pub(crate) fn parse_network(data: &[u8]) -> nom::IResult<&[u8], LnkNetwork> {
        let (input, size) = nom_unsigned_four_bytes(data, Endian::Le)?;

        // Size includes the size itself (4 bytes)
        let adjust_size = 4;
        if size < adjust_size {
            return Err(nom::Err::Incomplete(Needed::Unknown));
        }
        let (remaining_input, input) = take(size - adjust_size)(input)?;

        let (input, flag) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, name_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, device_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, provider) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let mut network = LnkNetwork {
            _size: size,
            _flags: flag,
            name_offset,
            device_offset,
            _provider_type: provider,
            unicode_share_name_offset: 0,
            unicode_device_name_offset: 0,
            share_name: String::new(),
            device_name: String::new(),
            unicode_share_name: String::new(),
            unicode_device_name: String::new(),
        };

        let has_unicode = 20;
        if network.name_offset > has_unicode {
            let (input, offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
            network.unicode_share_name_offset = offset;

            let (_, offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
            network.unicode_device_name_offset = offset;

            let (name_start, _) = take(network.unicode_share_name_offset)(data)?;
            network.unicode_share_name = extract_utf16_string(name_start);

            let (device_start, _) = take(network.unicode_device_name_offset)(data)?;
            network.unicode_device_name = extract_utf16_string(device_start);
        }

        let end_of_string = 0;
        let (share_name_start, _) = take(network.name_offset)(data)?;
        let (_, share_name_data) = take_while(|b| b != end_of_string)(share_name_start)?;
        network.share_name = extract_utf8_string(share_name_data);

        let (device_name_start, _) = take(network.device_offset)(data)?;
        let (_, device_data) = take_while(|b| b != end_of_string)(device_name_start)?;
        network.device_name = extract_utf8_string(device_data);

        Ok((remaining_input, network))
    }
}
