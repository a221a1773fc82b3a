pub mod pom_scanner;
pub mod pom_updater;

pub use pom_scanner::{POM_FILE_NAME, PomScannerAgent};
pub use pom_updater::{PomUpdater, RunMode, UpdateReport};
