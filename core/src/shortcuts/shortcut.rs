use super::{
    extras::parse_extras, header::LnkHeader, location::LnkLocation, network::LnkNetwork,
    shellitems::parse_lnk_shellitems, strings::extract_string, volume::LnkVolume,
};
use common::shortcuts::{
    DataFlags::{
        HasArguements, HasIconLocation, HasLinkInfo, HasName, HasRelativePath, HasTargetIdList,
        HasWorkingDirectory,
    },
    DriveType, LocationFlag, ShortcutInfo,
};
use nom::bytes::complete::take;

/// Parse and grab `shortcut` info from provided bytes
pub(crate) fn get_shortcut_data(data: &[u8]) -> nom::IResult<&[u8], ShortcutInfo> {
    let (input, header) = LnkHeader::parse_header(data)?;

    let mut shortcut_info = ShortcutInfo {
        source_path: String::new(),
        data_flags: header.data_flags,
        attribute_flags: header.attribute_flags,
        created: header.created,
        modified: header.modified,
        accessed: header.access,
        file_size: header.file_size,
        location_flags: LocationFlag::None,
        local_path: String::new(),
        common_path: String::new(),
        drive_serial: String::new(),
        drive_type: DriveType::None,
        volume_label: String::new(),
        network_share_name: String::new(),
        network_device_name: String::new(),
        description: String::new(),
        relative_path: String::new(),
        working_directory: String::new(),
        command_line_args: String::new(),
        icon_location: String::new(),
        shellitems: Vec::new(),
        extras: Vec::new(),
    };

    let (input, _) = get_shortcut_info(input, &mut shortcut_info)?;

    Ok((input, shortcut_info))
}

/// Parse the structure of `shortcut` data
fn get_shortcut_info<'a>(
    data: &'a [u8],
    shortcut_info: &mut ShortcutInfo,
) -> nom::IResult<&'a [u8], ()> {
    let mut input = data;

    // Based on flags in the `Shortcut` header parse the other parts of the structure
    for flags in &shortcut_info.data_flags {
        // Two (2) structures may follow the header
        //  TargetIDList - List of `shellitems`
        //  LocationInfo - Where the target file exists. Either on disk or network device (ex: network share)
        if flags == &HasTargetIdList {
            let (remaining_input, shellitems) = parse_lnk_shellitems(input)?;
            shortcut_info.shellitems = shellitems;
            input = remaining_input;
        }

        if flags == &HasLinkInfo {
            let (remaining_input, location) = LnkLocation::parse_location(input)?;
            shortcut_info.location_flags = location.flags;
            shortcut_info.local_path = if location.unicode_local_path.is_empty() {
                location.local_path
            } else {
                location.unicode_local_path
            };
            shortcut_info.common_path = if location.unicode_common_path.is_empty() {
                location.common_path
            } else {
                location.unicode_common_path
            };

            if shortcut_info.location_flags == LocationFlag::CommonNetworkRelativeLinkAndPathSuffix
            {
                let (network_data, _) = take(location.network_share_offset)(input)?;
                let (_, network_share) = LnkNetwork::parse_network(network_data)?;
                shortcut_info.network_device_name = if network_share.unicode_device_name.is_empty()
                {
                    network_share.device_name
                } else {
                    network_share.unicode_device_name
                };
                shortcut_info.network_share_name = if network_share.unicode_share_name.is_empty() {
                    network_share.share_name
                } else {
                    network_share.unicode_share_name
                };
            } else if shortcut_info.location_flags == LocationFlag::VolumeIDAndLocalBasePath {
                let (volume_data, _) = take(location.volume_offset)(input)?;
                let (_, volume) = LnkVolume::parse_volume(volume_data)?;
                shortcut_info.volume_label = if volume.unicode_volume_label.is_empty() {
                    volume.volume_label
                } else {
                    volume.unicode_volume_label
                };
                shortcut_info.drive_serial = volume.drive_serial;
                shortcut_info.drive_type = volume.drive_type;
            }

            input = remaining_input;
        }

        // After TargetIDList and LocationInfo five (5) strings may exist depending on the flags set in the header
        if flags == &HasName {
            let (remaining_input, description) = extract_string(input, &shortcut_info.data_flags)?;
            input = remaining_input;
            shortcut_info.description = description;
        }

        if flags == &HasRelativePath {
            let (remaining_input, relative_path) =
                extract_string(input, &shortcut_info.data_flags)?;
            input = remaining_input;
            shortcut_info.relative_path = relative_path;
        }

        if flags == &HasWorkingDirectory {
            let (remaining_input, working_dir) = extract_string(input, &shortcut_info.data_flags)?;
            input = remaining_input;
            shortcut_info.working_directory = working_dir;
        }

        if flags == &HasArguements {
            let (remaining_input, args) = extract_string(input, &shortcut_info.data_flags)?;
            input = remaining_input;
            shortcut_info.command_line_args = args;
        }

        if flags == &HasIconLocation {
            let (remaining_input, icon_path) = extract_string(input, &shortcut_info.data_flags)?;
            input = remaining_input;
            shortcut_info.icon_location = icon_path;
        }
    }

    // Extension blocks follow the data strings
    let (input, extras) = parse_extras(input)?;
    shortcut_info.extras = extras;

    Ok((input, ()))
}
