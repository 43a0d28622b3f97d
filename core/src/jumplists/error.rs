use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum JumpListError {
    ReadFile,
    ParseJumpList,
    ShortData,
}

impl std::error::Error for JumpListError {}

impl fmt::Display for JumpListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpListError::ReadFile => write!(f, "Failed to read jump list file"),
            JumpListError::ParseJumpList => write!(f, "Failed to parse jump list file"),
            JumpListError::ShortData => write!(f, "Jump list file too small"),
        }
    }
}
