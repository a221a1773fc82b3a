use crate::utils::verbose;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Exact, case-sensitive name of the files the scanner selects.
pub const POM_FILE_NAME: &str = "pom.xml";

/// PomScannerAgent walks a directory tree and yields every `pom.xml` in it
pub struct PomScannerAgent {
    root: PathBuf,
}

impl PomScannerAgent {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Lazily yields the paths of `pom.xml` files under the root.
    ///
    /// Walk errors (missing root, unreadable directory, entry removed mid-walk)
    /// drop the affected subtree instead of failing the scan.
    pub fn scan(&self) -> impl Iterator<Item = PathBuf> {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    verbose!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_name() == POM_FILE_NAME)
            .map(walkdir::DirEntry::into_path)
            .filter(|path| {
                let is_file = path.is_file();
                if !is_file {
                    verbose!("Skipping {} (not a regular file)", path.display());
                }
                is_file
            })
    }
}
