//! File discovery module for finding clip files to sequence.
//!
//! This module handles the discovery of clip files eligible for sequencing.
//! Currently only searches for .mp4 files (case-insensitive) in the top level
//! of the provided directory.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Checks if the given path is a clip file the sequencer can work with.
/// Currently only supports .mp4 files (case-insensitive).
#[must_use]
pub fn is_clip_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext_str| ext_str.eq_ignore_ascii_case("mp4"))
            .unwrap_or(false)
}

/// Finds clip files eligible for sequencing in the specified directory.
///
/// Scans the top level of the provided directory for .mp4 files
/// (case-insensitive) and returns their paths sorted by file name, so the
/// result is stable regardless of directory enumeration order. It does not
/// search subdirectories.
///
/// # Arguments
///
/// * `input_dir` - The directory to search for clip files
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Sorted paths of the discovered .mp4 files
/// * `Err(CoreError::Io)` - If the directory cannot be read
/// * `Err(CoreError::NoClipsFound)` - If no .mp4 files are found
pub fn find_clip_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            is_clip_file(&path).then_some(path)
        })
        .collect();

    files.sort();

    if files.is_empty() {
        Err(CoreError::NoClipsFound)
    } else {
        log::debug!("Found {} clip file(s) in {}", files.len(), input_dir.display());
        Ok(files)
    }
}
