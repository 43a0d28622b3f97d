/**
 * Windows Jump List files track opened files via applications in the Taskbar or Start Menu.
 * They contain `lnk` data and therefore can show evidence of file interaction.
 * There are two (2) types of jump list files:
 *
 * - Automatic - OLE containers holding a DestList stream and hex named `Shortcut` streams
 * - Custom - Flat files holding categories of embedded `Shortcut` structures
 *
 * References:
 * `https://github.com/libyal/dtformats/blob/main/documentation/Jump%20lists%20format.asciidoc`
 * `https://binaryforay.blogspot.com/2016/02/jump-lists-in-depth-understand-format.html`
 */
use super::{
    automatic::parse_automatic, custom::parse_custom, error::JumpListError, signature::classify,
};
use crate::filesystem::files::read_file;
use common::jumplists::{JumpListFile, JumpListType};
use log::error;

/// Classify and decode a single jump list file
pub fn parse_jumplist_file(path: &str) -> Result<JumpListFile, JumpListError> {
    let list_type = classify(path)?;

    let data = match read_file(path) {
        Ok(result) => result,
        Err(err) => {
            error!("[jumplists] Could not read {path}: {err:?}");
            return Err(JumpListError::ReadFile);
        }
    };

    match list_type {
        JumpListType::Automatic => match parse_automatic(&data, path) {
            Ok((_, result)) => Ok(JumpListFile::Automatic(result)),
            Err(_err) => {
                error!("[jumplists] Could not parse automatic destination file {path}");
                Err(JumpListError::ParseJumpList)
            }
        },
        JumpListType::Custom => match parse_custom(&data, path) {
            Ok((_, result)) => Ok(JumpListFile::Custom(result)),
            Err(_err) => {
                error!("[jumplists] Could not parse custom destination file {path}");
                Err(JumpListError::ParseJumpList)
            }
        },
    }
}
