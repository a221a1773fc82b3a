use crate::error::{PomError, Result};
use std::path::{Component, Path, PathBuf};

/// Path helpers for the traversal root.
pub struct PathValidator;

impl PathValidator {
    /// Makes the traversal root absolute without touching the filesystem.
    ///
    /// The root is allowed not to exist; a missing root simply yields no files.
    pub fn absolute_root(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(PomError::Config("root path must not be empty".to_string()));
        }

        let absolute = std::path::absolute(path).map_err(|e| {
            PomError::Config(format!("Invalid root path '{}': {e}", path.display()))
        })?;

        Ok(strip_cur_dir(&absolute))
    }
}

fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
