//! Mapping of request targets onto the served directory.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Joins `target` onto `root` and normalizes the result.
///
/// Returns `None` when the normalized path leaves `root`. The check is
/// lexical: `.` and `..` are folded, symbolic links are not followed.
/// `root` is expected to be absolute and already normalized.
///
/// # Example
///
/// ```
/// # use std::path::Path;
/// # use httpfs::files::sandbox::resolve;
/// let root = Path::new("/srv/data");
/// assert_eq!(resolve(root, "/a/../b.txt"), Some(root.join("b.txt")));
/// assert_eq!(resolve(root, "/../../etc/passwd"), None);
/// ```
pub fn resolve(root: &Path, target: &str) -> Option<PathBuf> {
    let relative = target.trim_start_matches('/');
    let full = root.join(relative).clean();

    if full.starts_with(root) {
        Some(full)
    } else {
        None
    }
}
