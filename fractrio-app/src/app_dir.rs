//! Locations next to the executable: `preferences.json` and the default
//! `images/` export folder.

use std::path::{Path, PathBuf};

/// Folder holding the running binary, or the working directory when the
/// executable path cannot be resolved.
pub fn exe_directory() -> PathBuf {
    let from_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match from_exe {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Default folder offered by the PNG export dialog.
pub fn images_directory() -> PathBuf {
    exe_directory().join("images")
}
