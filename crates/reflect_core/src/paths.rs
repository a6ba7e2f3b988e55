//! Path helpers shared by emission and staleness checks.

use std::path::{Component, Path, PathBuf};

/// `path` expressed relative to `base`.
///
/// Both paths are taken as written (no filesystem access). When one is
/// absolute and the other is not, `path` is returned unchanged.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() != base.is_absolute() {
        return path.to_path_buf();
    }

    let path_parts: Vec<Component<'_>> = path.components().filter(|c| *c != Component::CurDir).collect();
    let base_parts: Vec<Component<'_>> = base.components().filter(|c| *c != Component::CurDir).collect();
    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part.as_os_str());
    }
    relative
}

/// Forward-slash spelling used in `#include` directives.
pub fn include_spelling(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Match a file name against a pattern where `*` matches any run of
/// characters (`*.h`, `*.hpp`, `Register*.h`).
pub fn matches_pattern(file_name: &str, pattern: &str) -> bool {
    let mut parts = pattern.split('*');
    let Some(first) = parts.next() else {
        return file_name.is_empty();
    };
    let Some(mut rest) = file_name.strip_prefix(first) else {
        return false;
    };

    let tail: Vec<&str> = parts.collect();
    let Some((last, middle)) = tail.split_last() else {
        // No `*` in the pattern.
        return rest.is_empty();
    };

    for part in middle {
        match rest.find(part) {
            Some(index) => rest = &rest[index + part.len()..],
            None => return false,
        }
    }
    rest.len() >= last.len() && rest.ends_with(last)
}
