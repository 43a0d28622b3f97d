use serde::Serialize;

/**  Flat record derived from one embedded `Shortcut` instance.
 * Field order defines the CSV column order. Unset optional values are empty strings
 */
#[derive(Debug, PartialEq, Serialize)]
pub struct NormalizedRecord {
    #[serde(rename = "SourceFile")]
    pub source_file: String,
    #[serde(rename = "SourceCreated")]
    pub source_created: String,
    #[serde(rename = "SourceModified")]
    pub source_modified: String,
    #[serde(rename = "SourceAccessed")]
    pub source_accessed: String,
    #[serde(rename = "TargetCreated")]
    pub target_created: String,
    #[serde(rename = "TargetModified")]
    pub target_modified: String,
    #[serde(rename = "TargetAccessed")]
    pub target_accessed: String,
    #[serde(rename = "FileSize")]
    pub file_size: u32,
    #[serde(rename = "RelativePath")]
    pub relative_path: String,
    #[serde(rename = "WorkingDirectory")]
    pub working_directory: String,
    #[serde(rename = "FileAttributes")]
    pub file_attributes: String,
    #[serde(rename = "HeaderFlags")]
    pub header_flags: String,
    #[serde(rename = "DriveType")]
    pub drive_type: String,
    #[serde(rename = "DriveSerialNumber")]
    pub drive_serial_number: String,
    #[serde(rename = "DriveLabel")]
    pub drive_label: String,
    #[serde(rename = "LocalPath")]
    pub local_path: String,
    #[serde(rename = "CommonPath")]
    pub common_path: String,
    #[serde(rename = "TargetIDAbsolutePath")]
    pub target_id_absolute_path: String,
    #[serde(rename = "TargetMFTEntryNumber")]
    pub target_mft_entry_number: String,
    #[serde(rename = "TargetMFTSequenceNumber")]
    pub target_mft_sequence_number: String,
    #[serde(rename = "MachineID")]
    pub machine_id: String,
    #[serde(rename = "MachineMACAddress")]
    pub machine_mac_address: String,
    #[serde(rename = "MACVendor")]
    pub mac_vendor: String,
    #[serde(rename = "TrackerCreatedOn")]
    pub tracker_created_on: String,
    #[serde(rename = "ExtraBlocksPresent")]
    pub extra_blocks_present: String,
}
