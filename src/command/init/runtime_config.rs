use camino::{Utf8Path, Utf8PathBuf};
use mevn_std::{Fs, MevnStdError};

use super::errors::InitError;
use crate::MevnResult;

pub const NUXT_CONFIG_FILE_NAME: &str = "nuxt.config.js";
pub const UNIVERSAL_MODE_LINE: &str = "  mode: 'universal',";

pub fn nuxt_config_path(project_dir: &Utf8Path) -> Utf8PathBuf {
    project_dir.join(NUXT_CONFIG_FILE_NAME)
}

/// Swaps the first line mentioning `mode` for the universal rendering mode.
/// Returns `None` when no line mentions it. Every other line, including its
/// terminator, comes back untouched.
pub fn replace_mode_line(contents: &str) -> Option<String> {
    let mut replaced = false;
    let mut patched = String::with_capacity(contents.len());
    for line in contents.split_inclusive('\n') {
        if !replaced && line.contains("mode") {
            let terminator = if line.ends_with("\r\n") {
                "\r\n"
            } else if line.ends_with('\n') {
                "\n"
            } else {
                ""
            };
            patched.push_str(UNIVERSAL_MODE_LINE);
            patched.push_str(terminator);
            replaced = true;
        } else {
            patched.push_str(line);
        }
    }
    replaced.then_some(patched)
}

/// Rewrites the project's `nuxt.config.js` to render in universal mode
pub fn set_universal_mode(project_dir: &Utf8Path) -> MevnResult<()> {
    let path = nuxt_config_path(project_dir);
    let contents = match Fs::read_file(&path) {
        Ok(contents) => contents,
        Err(MevnStdError::EmptyFile { .. }) => String::new(),
        Err(err) => return Err(err.into()),
    };
    match replace_mode_line(&contents) {
        Some(patched) => {
            Fs::write_file(&path, patched)?;
            Ok(())
        }
        None => Err(InitError::ModeLineNotFound { path }.into()),
    }
}
