use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum FileSystemError {
    NotFile,
    OpenFile,
    ReadFile,
    LargeFile,
    NotDirectory,
    ReadDirectory,
}

impl std::error::Error for FileSystemError {}

impl fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSystemError::NotFile => write!(f, "Not a file"),
            FileSystemError::OpenFile => write!(f, "Could not open file"),
            FileSystemError::ReadFile => write!(f, "Could not read file"),
            FileSystemError::LargeFile => write!(f, "File larger than 2GB"),
            FileSystemError::NotDirectory => write!(f, "Not a directory"),
            FileSystemError::ReadDirectory => write!(f, "Could not read directory"),
        }
    }
}
