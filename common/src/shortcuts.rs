use serde::Serialize;

/**  Decoded `Shortcut` (LNK) structure containing
 * timestamps: Unix epoch seconds. `None` when the raw FILETIME is unset
 * file_size: Size in bytes of the target
 * shellitems: Target ID list describing the path through the shell namespace
 * extras: Optional trailing extension blocks
 */
#[derive(Debug, Serialize)]
pub struct ShortcutInfo {
    pub source_path: String,
    pub data_flags: Vec<DataFlags>,
    pub attribute_flags: Vec<AttributeFlags>,
    pub created: Option<i64>,
    pub modified: Option<i64>,
    pub accessed: Option<i64>,
    pub file_size: u32,
    pub location_flags: LocationFlag,
    pub local_path: String,
    pub common_path: String,
    pub drive_serial: String,
    pub drive_type: DriveType,
    pub volume_label: String,
    pub network_share_name: String,
    pub network_device_name: String,
    pub description: String,
    pub relative_path: String,
    pub working_directory: String,
    pub command_line_args: String,
    pub icon_location: String,
    pub shellitems: Vec<ShellItem>,
    pub extras: Vec<ExtraBlock>,
}

impl ShortcutInfo {
    /// The tracker block if one is present among the extra blocks
    pub fn tracker(&self) -> Option<&TrackerBlock> {
        self.extras.iter().find_map(|block| match block {
            ExtraBlock::Tracker(tracker) => Some(tracker),
            _ => None,
        })
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub enum LocationFlag {
    VolumeIDAndLocalBasePath,
    CommonNetworkRelativeLinkAndPathSuffix,
    None,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum DriveType {
    DriveUnknown,
    DriveNotRootDir,
    DriveRemovable,
    DriveFixed,
    DriveRemote,
    DriveCdrom,
    DriveRamdisk,
    None,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum DataFlags {
    HasTargetIdList,
    HasLinkInfo,
    HasName,
    HasRelativePath,
    HasWorkingDirectory,
    HasArguements,
    HasIconLocation,
    IsUnicode,
    ForceNoLinkInfo,
    HasExpString,
    RunInSeparateProcess,
    HasDarwinId,
    RunAsUser,
    HasExpIcon,
    NoPidAlias,
    RunWithShimLayer,
    ForceNoLinkTrack,
    EnableTargetMetadata,
    DisableLinkPathTracking,
    DisableKnownFolderTracking,
    DisableKnownFolderAlias,
    AllowLinkToLink,
    UnaliasOnSave,
    PreferEnvironmentPath,
    KeepLocalDListForUncTarget,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum AttributeFlags {
    ReadOnly,
    Hidden,
    System,
    Directory,
    Archive,
    Device,
    Normal,
    Temporary,
    SparseFile,
    ReparsePoint,
    Compressed,
    Offline,
    NotConentIndexed,
    Encrypted,
    Virtual,
}

/**  Return a `ShellItem` structure containing
 * value: Generic value of the `ShellItem`, can be a directory, file, URI, or GUID
 * created, modified, accessed: FAT timestamps as Unix epoch seconds, directory and file items only
 * mft_entry, mft_sequence: NTFS coordinates when the item carries them, independently optional
 */
#[derive(Debug, PartialEq, Serialize)]
pub struct ShellItem {
    pub value: String,
    pub shell_type: ShellType,
    pub created: Option<i64>,
    pub modified: Option<i64>,
    pub accessed: Option<i64>,
    pub mft_entry: Option<u64>,
    pub mft_sequence: Option<u16>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum ShellType {
    Directory,
    Volume,
    RootFolder,
    Delegate,
    Variable,
    Unknown,
}

/// Trailing extension blocks attached to a `Shortcut`, tagged by block signature
#[derive(Debug, PartialEq, Serialize)]
pub enum ExtraBlock {
    Environment(String),
    Console,
    Tracker(TrackerBlock),
    Codepage(u32),
    SpecialFolder(u32),
    Darwin(String),
    IconEnvironment(String),
    Shim(String),
    PropertyStore,
    KnownFolder(String),
    VistaIdList,
}

impl ExtraBlock {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ExtraBlock::Environment(_) => "Environment",
            ExtraBlock::Console => "Console",
            ExtraBlock::Tracker(_) => "Tracker",
            ExtraBlock::Codepage(_) => "Codepage",
            ExtraBlock::SpecialFolder(_) => "SpecialFolder",
            ExtraBlock::Darwin(_) => "Darwin",
            ExtraBlock::IconEnvironment(_) => "IconEnvironment",
            ExtraBlock::Shim(_) => "Shim",
            ExtraBlock::PropertyStore => "PropertyStore",
            ExtraBlock::KnownFolder(_) => "KnownFolder",
            ExtraBlock::VistaIdList => "VistaIdList",
        }
    }
}

/**  Distributed link tracking data containing
 * machine_id: NetBIOS name of the machine the target lived on
 * mac_address: Node portion of the version one (1) `droid_file_id` UUID
 * created: Timestamp embedded in the version one (1) `droid_file_id` UUID
 */
#[derive(Debug, PartialEq, Serialize)]
pub struct TrackerBlock {
    pub machine_id: String,
    pub mac_address: String,
    pub created: Option<i64>,
    pub droid_volume_id: String,
    pub droid_file_id: String,
    pub birth_droid_volume_id: String,
    pub birth_droid_file_id: String,
}
