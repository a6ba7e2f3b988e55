//! Incremental-rebuild check.
//!
//! The generated file is current when it is at least as new as every
//! matching header under the input directory. Anything that cannot be read
//! counts as stale.

use crate::paths::matches_pattern;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Whether `output_file` can be kept as is.
pub fn is_up_to_date(input_dir: &Path, output_file: &Path, patterns: &[String]) -> bool {
    let generated = match std::fs::metadata(output_file).and_then(|meta| meta.modified()) {
        Ok(time) => time,
        Err(_) => return false,
    };

    match newest_source(input_dir, patterns) {
        Ok(Some(newest)) => generated >= newest,
        Ok(None) => true,
        Err(err) => {
            tracing::debug!("staleness check failed, regenerating: {err}");
            false
        }
    }
}

/// Latest modification time among files under `dir` matching any pattern.
pub fn newest_source(dir: &Path, patterns: &[String]) -> io::Result<Option<SystemTime>> {
    let mut newest = None;
    let mut pending = vec![dir.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                pending.push(entry.path());
                continue;
            }

            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !patterns.iter().any(|pattern| matches_pattern(&name, pattern)) {
                continue;
            }

            let modified = entry.metadata()?.modified()?;
            if newest.map_or(true, |newest| modified > newest) {
                newest = Some(modified);
            }
        }
    }

    Ok(newest)
}
