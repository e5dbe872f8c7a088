use std::path::Path;

/// Display name for a path: its file name, or the whole path when it has
/// none.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
