use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum ExportError {
    CreateFile,
    CreateDirectory,
    WriteRecord,
    Serialize,
}

impl std::error::Error for ExportError {}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::CreateFile => write!(f, "Failed to create output file"),
            ExportError::CreateDirectory => write!(f, "Failed to create output directory"),
            ExportError::WriteRecord => write!(f, "Failed to write output record"),
            ExportError::Serialize => write!(f, "Failed to serialize output data"),
        }
    }
}
