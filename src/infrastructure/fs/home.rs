//! Tilde expansion for user-provided paths.
//!
//! `~` and `~/...` resolve against the real home directory (`dirs::home_dir`,
//! which honours `HOME` on unix). `~user` forms are left untouched.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    expand_home_with(path, dirs::home_dir().as_deref())
}

fn expand_home_with(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
