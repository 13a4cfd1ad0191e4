//! Materializes a computed ordering as sequentially named files.
//!
//! The external joining stage concatenates clips in file-name order, so an
//! ordering is applied by laying down `sequence_NNNN.<ext>` entries that hard
//! link back to the source clips (copying when the filesystem refuses a
//! link). The sources are never moved or modified.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::manifest::ClipId;

/// Applies an ordering to clip files on disk.
///
/// Each id in `order` is resolved against `input_dir` and linked into
/// `output_dir` under a `sequence_NNNN` name that preserves the source
/// extension. A missing source fails the whole run with `MissingClipFile`
/// rather than skipping the clip, since a partial layout would silently
/// change the joined result.
///
/// Returns the created paths in sequence order.
pub fn apply_sequence(
    order: &[ClipId],
    input_dir: &Path,
    output_dir: &Path,
) -> CoreResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut created = Vec::with_capacity(order.len());
    for (index, clip) in order.iter().enumerate() {
        let source = input_dir.join(clip.as_str());
        if !source.is_file() {
            return Err(CoreError::MissingClipFile { path: source });
        }

        let dest_name = match source.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("sequence_{index:04}.{ext}"),
            None => format!("sequence_{index:04}"),
        };
        let dest = output_dir.join(dest_name);

        // Hard link to save space; copy when linking is not possible
        // (cross-device output, filesystems without link support)
        if let Err(link_error) = fs::hard_link(&source, &dest) {
            log::debug!(
                "Hard link failed for {} ({}), copying instead",
                source.display(),
                link_error
            );
            fs::copy(&source, &dest)?;
        }
        log::debug!("{} -> {}", clip, dest.display());
        created.push(dest);
    }

    log::info!(
        "Applied sequence of {} clip(s) to {}",
        created.len(),
        output_dir.display()
    );
    Ok(created)
}
