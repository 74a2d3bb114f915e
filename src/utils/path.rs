//! Path helpers for user-supplied database locations.

use std::path::PathBuf;

/// Expand a leading `~/` to the user's home directory. Anything else is
/// taken as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
