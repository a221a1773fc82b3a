pub mod replacements;

pub use replacements::{Replacement, ReplacementTable};

use crate::error::{PomError, Result};
use crate::utils::path_validator::PathValidator;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the optional TOML config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub root: Option<PathBuf>,
    pub replacements: Option<Vec<Replacement>>,
}

impl ConfigFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PomError::read(path, e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Everything a single run needs: where to look and what to substitute.
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    pub root: PathBuf,
    pub replacements: ReplacementTable,
}

impl UpdaterConfig {
    pub fn new(root: impl AsRef<Path>, replacements: ReplacementTable) -> Result<Self> {
        Ok(Self {
            root: PathValidator::absolute_root(root)?,
            replacements,
        })
    }

    /// Resolves the run configuration.
    ///
    /// Root: `--path`, then `root` from the config file (relative to the file's own
    /// directory), then the current directory.
    /// Table: `--replace` pairs, then `[[replacements]]` from the config file, then
    /// the built-in default table.
    pub fn resolve(
        cli_path: Option<&str>,
        config_path: Option<&str>,
        cli_pairs: &[String],
    ) -> Result<Self> {
        let file = match config_path {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let config_dir = config_path
            .and_then(|path| Path::new(path).parent())
            .unwrap_or_else(|| Path::new(""));

        let root = match (cli_path, file.root) {
            (Some(path), _) => PathBuf::from(path),
            (None, Some(root)) => config_dir.join(root),
            (None, None) => PathBuf::from("."),
        };

        let replacements = if !cli_pairs.is_empty() {
            ReplacementTable::from_pairs(cli_pairs)?
        } else if let Some(entries) = file.replacements {
            ReplacementTable::new(entries)?
        } else {
            ReplacementTable::default()
        };

        Self::new(root, replacements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_root_and_replacements() {
        let file = ConfigFile::parse(
            r#"
root = "/srv/ycsb"

[[replacements]]
search = "<groupId>a</groupId>"
replace = "<groupId>b</groupId>"

[[replacements]]
search = "x"
replace = "y"
"#,
        )
        .unwrap();

        assert_eq!(file.root, Some(PathBuf::from("/srv/ycsb")));
        let entries = file.replacements.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].replace, "<groupId>b</groupId>");
        assert_eq!(entries[1], Replacement::new("x", "y"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = ConfigFile::parse("rooot = \"/tmp\"").unwrap_err();
        assert!(matches!(err, PomError::Toml(_)));
    }

    #[test]
    fn defaults_to_current_directory_and_builtin_table() {
        let config = UpdaterConfig::resolve(None, None, &[]).unwrap();
        assert_eq!(config.root, std::env::current_dir().unwrap());
        assert_eq!(config.replacements, ReplacementTable::default());
    }

    #[test]
    fn cli_values_override_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("retarget.toml");
        fs::write(
            &config_path,
            "root = \"/from/config\"\n[[replacements]]\nsearch = \"a\"\nreplace = \"b\"\n",
        )
        .unwrap();
        let config_path = config_path.to_str().unwrap();

        let from_file = UpdaterConfig::resolve(None, Some(config_path), &[]).unwrap();
        assert_eq!(from_file.root, PathBuf::from("/from/config"));
        assert_eq!(from_file.replacements.apply("a"), "b");

        let pairs = vec!["a".to_string(), "c".to_string()];
        let overridden =
            UpdaterConfig::resolve(Some("/from/cli"), Some(config_path), &pairs).unwrap();
        assert_eq!(overridden.root, PathBuf::from("/from/cli"));
        assert_eq!(overridden.replacements.apply("a"), "c");
    }

    #[test]
    fn relative_root_is_resolved_against_config_file_directory() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("retarget.toml");
        fs::write(&config_path, "root = \"ycsb\"\n").unwrap();

        let config = UpdaterConfig::resolve(None, config_path.to_str(), &[]).unwrap();
        assert_eq!(config.root, dir.path().join("ycsb"));
    }

    #[test]
    fn empty_replacement_list_in_file_is_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("retarget.toml");
        fs::write(&config_path, "replacements = []\n").unwrap();

        let err = UpdaterConfig::resolve(None, config_path.to_str(), &[]).unwrap_err();
        assert!(matches!(err, PomError::Config(_)));
    }

    #[test]
    fn missing_config_file_reports_path() {
        let err = UpdaterConfig::resolve(None, Some("/definitely/not/here.toml"), &[]).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
