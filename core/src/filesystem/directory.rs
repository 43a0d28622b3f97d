use std::path::Path;

/// Check if path is a directory
pub(crate) fn is_directory(path: &str) -> bool {
    let dir = Path::new(path);
    if dir.is_dir() {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::is_directory;

    #[test]
    fn test_is_directory() {
        assert!(is_directory(env!("CARGO_MANIFEST_DIR")));
        assert!(!is_directory("does_not_exist"));
    }
}
