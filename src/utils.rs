//! Common utility functions shared across the codebase.

use std::path::Path;

/// Converts a relative path into a logical key with `/` separators.
///
/// Namespace keys are stored with forward slashes regardless of the platform
/// separator, so `nested\a` on Windows and `nested/a` on Unix both become
/// `nested/a`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use locsync::utils::path_key;
///
/// assert_eq!(path_key(Path::new("common")), "common");
/// assert_eq!(path_key(&Path::new("nested").join("a")), "nested/a");
/// ```
pub fn path_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
