use crate::{
    filesystem::{directory::is_directory, files::is_file},
    jumplists::{error::JumpListError, parser::parse_jumplist_file},
    normalize::normalize_jumplist,
};
use common::{jumplists::JumpListFile, records::NormalizedRecord};
use glob::{MatchOptions, Pattern};
use log::{error, warn};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

/// Default mask covering both destination file extensions
const JUMPLIST_MASK: &str = "*.*Destinations-ms";

#[derive(Debug)]
pub enum RunInput {
    File(String),
    Directory(String),
}

#[derive(Debug)]
pub struct RunConfig {
    pub input: RunInput,
    /// Process every discovered file instead of only `*.*Destinations-ms`
    pub all_files: bool,
}

#[derive(Debug)]
pub struct RunResults {
    pub records: Vec<NormalizedRecord>,
    pub artifacts: Vec<JumpListFile>,
    pub failures: Vec<(String, String)>,
    pub discovered: usize,
    pub duration: Duration,
}

/// Process a single file or a directory tree of jump list files.
/// A missing primary input is fatal, any per file failure is recorded and the run continues
pub fn run(config: &RunConfig) -> Result<RunResults, JumpListError> {
    let start = Instant::now();

    let candidates = match &config.input {
        RunInput::File(path) => {
            if !is_file(path) {
                error!("[runner] {path} does not exist or is not a file");
                return Err(JumpListError::ReadFile);
            }
            vec![path.clone()]
        }
        RunInput::Directory(path) => {
            if !is_directory(path) {
                error!("[runner] {path} does not exist or is not a directory");
                return Err(JumpListError::ReadFile);
            }
            discover_files(path, config.all_files)
        }
    };

    let mut results = RunResults {
        records: Vec::new(),
        artifacts: Vec::new(),
        failures: Vec::new(),
        discovered: candidates.len(),
        duration: Duration::default(),
    };

    for candidate in candidates {
        match parse_jumplist_file(&candidate) {
            Ok(jumplist) => {
                results.records.append(&mut normalize_jumplist(&jumplist));
                results.artifacts.push(jumplist);
            }
            Err(err) => {
                warn!("[runner] Skipping {candidate}: {err:?}");
                results.failures.push((candidate, err.to_string()));
            }
        }
    }

    results.duration = start.elapsed();
    Ok(results)
}

/// Recursively collect candidate files under a directory, filtered by the
/// destination file mask unless every file was requested
fn discover_files(directory: &str, all_files: bool) -> Vec<String> {
    let mask = match Pattern::new(JUMPLIST_MASK) {
        Ok(result) => result,
        Err(err) => {
            error!("[runner] Invalid file mask: {err:?}");
            return Vec::new();
        }
    };
    let options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::default()
    };

    let mut candidates = Vec::new();
    for entry in WalkDir::new(directory).sort_by_file_name() {
        let entry = match entry {
            Ok(result) => result,
            Err(err) => {
                warn!("[runner] Could not read directory entry: {err:?}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if all_files || mask.matches_with(&name, options) {
            candidates.push(entry.path().display().to_string());
        }
    }
    candidates
}
