use globset::{Glob, GlobSet, GlobSetBuilder};
use std::borrow::Cow;
use std::path::Path;

use crate::error::Result;

pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Match a path's basename against the ignore globs.
///
/// Directories are also tried with a trailing slash so `build/` only hits directories.
pub fn should_ignore(path: &Path, ignore: &GlobSet, is_dir: bool) -> bool {
    if ignore.is_empty() {
        return false;
    }

    let name = path.file_name().unwrap_or_default().to_string_lossy();

    if ignore.is_match(&*name) {
        return true;
    }

    is_dir && ignore.is_match(format!("{}/", name))
}

pub fn is_hidden(file_name: &str) -> bool {
    file_name.starts_with('.')
}

/// The extension of a path, `None` when there is none or it is empty (`"file."`).
///
/// Non-UTF-8 extensions are converted lossily so they still get their own bucket.
pub fn file_extension(path: &Path) -> Option<Cow<'_, str>> {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .filter(|ext| !ext.is_empty())
}
