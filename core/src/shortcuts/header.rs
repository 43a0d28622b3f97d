use crate::utils::{
    nom_helper::{
        Endian, nom_unsigned_eight_bytes, nom_unsigned_four_bytes, nom_unsigned_two_bytes,
    },
    time::filetime_to_option,
    uuid::format_guid_le_bytes,
};
use common::shortcuts::{AttributeFlags, DataFlags};
use nom::bytes::complete::take;
use std::mem::size_of;

#[derive(Debug)]
pub(crate) struct LnkHeader {
    /**Should always be 0x4c (76) */
    _size: u32,
    /**Should be 00021401-0000-0000-c000-000000000046 */
    _class_id: String,
    pub(crate) data_flags: Vec<DataFlags>,
    pub(crate) attribute_flags: Vec<AttributeFlags>,
    pub(crate) created: Option<i64>,
    pub(crate) access: Option<i64>,
    pub(crate) modified: Option<i64>,
    pub(crate) file_size: u32,
    _icon_index: u32,
    _window_value: u32,
    _hot_key: u16,
    _unknown: u16,
    _unknown2: u32,
    _unknown3: u32,
}

impl LnkHeader {
    /// Parse the `Shortcut` file header. Contains target file size and target file created, modified, accessed timestamps
    pub(crate) fn parse_header(data: &[u8]) -> nom::IResult<&[u8], LnkHeader> {
        let (input, size) = nom_unsigned_four_bytes(data, Endian::Le)?;
        let (input, guid_data) = take(size_of::<u128>())(input)?;
        let (input, data_flags) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, attribute_flags) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let (input, created_filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;
        let (input, access_filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;
        let (input, modified_filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;

        let (input, file_size) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, icon_index) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, window_value) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, hot_key) = nom_unsigned_two_bytes(input, Endian::Le)?;

        let (input, unknown) = nom_unsigned_two_bytes(input, Endian::Le)?;
        let (input, unknown2) = nom_unsigned_four_bytes(input, Endian::Le)?;
        let (input, unknown3) = nom_unsigned_four_bytes(input, Endian::Le)?;

        let header = LnkHeader {
            _size: size,
            _class_id: format_guid_le_bytes(guid_data),
            data_flags: LnkHeader::get_flags(&data_flags),
            attribute_flags: LnkHeader::get_attributes(&attribute_flags),
            created: filetime_to_option(&created_filetime),
            access: filetime_to_option(&access_filetime),
            modified: filetime_to_option(&modified_filetime),
            file_size,
            _icon_index: icon_index,
            _window_value: window_value,
            _hot_key: hot_key,
            _unknown: unknown,
            _unknown2: unknown2,
            _unknown3: unknown3,
        };

        Ok((input, header))
    }

    /// Get data flags from the `Shortcut` header. They control which other structures are present
    fn get_flags(flags: &u32) -> Vec<DataFlags> {
        let flag_list = [
            (0x1, DataFlags::HasTargetIdList),
            (0x2, DataFlags::HasLinkInfo),
            (0x4, DataFlags::HasName),
            (0x8, DataFlags::HasRelativePath),
            (0x10, DataFlags::HasWorkingDirectory),
            (0x20, DataFlags::HasArguements),
            (0x40, DataFlags::HasIconLocation),
            (0x80, DataFlags::IsUnicode),
            (0x100, DataFlags::ForceNoLinkInfo),
            (0x200, DataFlags::HasExpString),
            (0x400, DataFlags::RunInSeparateProcess),
            (0x1000, DataFlags::HasDarwinId),
            (0x2000, DataFlags::RunAsUser),
            (0x4000, DataFlags::HasExpIcon),
            (0x8000, DataFlags::NoPidAlias),
            (0x20000, DataFlags::RunWithShimLayer),
            (0x40000, DataFlags::ForceNoLinkTrack),
            (0x80000, DataFlags::EnableTargetMetadata),
            (0x100000, DataFlags::DisableLinkPathTracking),
            (0x200000, DataFlags::DisableKnownFolderTracking),
            (0x400000, DataFlags::DisableKnownFolderAlias),
            (0x800000, DataFlags::AllowLinkToLink),
            (0x1000000, DataFlags::UnaliasOnSave),
            (0x2000000, DataFlags::PreferEnvironmentPath),
            (0x4000000, DataFlags::KeepLocalDListForUncTarget),
        ];

        // A shortcut file may have multiple flags
        flag_list
            .into_iter()
            .filter(|(mask, _)| (flags & mask) == *mask)
            .map(|(_, flag)| flag)
            .collect()
    }

    /// Get attribute flags of the target file
    fn get_attributes(attributes: &u32) -> Vec<AttributeFlags> {
        let attribute_list = [
            (0x1, AttributeFlags::ReadOnly),
            (0x2, AttributeFlags::Hidden),
            (0x4, AttributeFlags::System),
            (0x10, AttributeFlags::Directory),
            (0x20, AttributeFlags::Archive),
            (0x40, AttributeFlags::Device),
            (0x80, AttributeFlags::Normal),
            (0x100, AttributeFlags::Temporary),
            (0x200, AttributeFlags::SparseFile),
            (0x400, AttributeFlags::ReparsePoint),
            (0x800, AttributeFlags::Compressed),
            (0x1000, AttributeFlags::Offline),
            (0x2000, AttributeFlags::NotConentIndexed),
            (0x4000, AttributeFlags::Encrypted),
            (0x10000, AttributeFlags::Virtual),
        ];

        attribute_list
            .into_iter()
            .filter(|(mask, _)| (attributes & mask) == *mask)
            .map(|(_, flag)| flag)
            .collect()
    }
}
