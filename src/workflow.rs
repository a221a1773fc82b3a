use crate::agents::{POM_FILE_NAME, PomScannerAgent, PomUpdater, RunMode, UpdateReport};
use crate::config::UpdaterConfig;
use crate::error::{PomError, Result};
use crate::utils::verbose;
use colored::Colorize;
use std::path::Path;

/// Options shared by the subcommands that rewrite or check files.
#[derive(Debug)]
pub struct RunOptions<'a> {
    pub path: Option<&'a str>,
    pub config: Option<&'a str>,
    pub pairs: &'a [String],
}

impl RunOptions<'_> {
    fn resolve(&self) -> Result<UpdaterConfig> {
        let config = UpdaterConfig::resolve(self.path, self.config, self.pairs)?;

        verbose!("Root: {}", config.root.display());
        for (i, r) in config.replacements.entries().iter().enumerate() {
            verbose!("Replacement {}: {:?} -> {:?}", i + 1, r.search, r.replace);
        }

        Ok(config)
    }
}

/// Execute the update workflow: rewrite every pom.xml the table changes
pub fn execute_update(options: RunOptions<'_>, keep_going: bool) -> Result<()> {
    let config = options.resolve()?;
    println!(
        "{}",
        format!(
            "Retargeting {} files under {} ({} replacements)...",
            POM_FILE_NAME,
            config.root.display(),
            config.replacements.len()
        )
        .cyan()
        .bold()
    );

    let updater = PomUpdater::new(config).keep_going(keep_going);
    let report = updater.run(RunMode::Write, |path| println!("{}", updating_line(path)))?;

    println!("{}", updated_summary(report.modified_count()));
    finish(&report)
}

/// Announces a file about to be rewritten.
fn updating_line(path: &Path) -> String {
    format!("Updating {}", path.display())
}

fn updated_summary(count: usize) -> String {
    format!("Updated {count} files.")
}

/// Execute the check workflow (dry-run)
pub fn execute_check(options: RunOptions<'_>, json: bool) -> Result<()> {
    let config = options.resolve()?;

    if json {
        let report = PomUpdater::new(config)
            .keep_going(true)
            .run(RunMode::DryRun, |_| {})?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return finish_quietly(&report);
    }

    println!(
        "{}",
        format!(
            "Checking {} files under {}...",
            POM_FILE_NAME,
            config.root.display()
        )
        .cyan()
        .bold()
    );

    let report = PomUpdater::new(config)
        .keep_going(true)
        .run(RunMode::DryRun, |path| {
            println!("Would update {}", path.display());
        })?;

    println!(
        "{} files would be updated ({} scanned).",
        report.modified_count(),
        report.visited
    );

    if report.modified_count() > 0 {
        println!("\n{}", "To apply these changes, run:".dimmed());
        println!("  {}", "pom-retarget update".cyan());
    }

    finish(&report)
}

/// Execute the list workflow - display every pom.xml under the root
pub fn execute_list(options: RunOptions<'_>) -> Result<()> {
    let config = options.resolve()?;
    println!(
        "{}",
        format!(
            "Listing {} files under {}...",
            POM_FILE_NAME,
            config.root.display()
        )
        .cyan()
        .bold()
    );

    let mut count = 0;
    for path in PomScannerAgent::new(&config.root).scan() {
        println!("  {}", path.display());
        count += 1;
    }

    if count == 0 {
        println!("{}", format!("No {POM_FILE_NAME} files found").yellow());
    } else {
        println!("Found {count} files.");
    }

    Ok(())
}

fn finish(report: &UpdateReport) -> Result<()> {
    if !report.has_failures() {
        return Ok(());
    }

    println!(
        "\n{}",
        format!("{} file(s) could not be processed:", report.failures.len())
            .red()
            .bold()
    );
    for failure in &report.failures {
        println!("  • {}", failure.error.red());
    }

    finish_quietly(report)
}

fn finish_quietly(report: &UpdateReport) -> Result<()> {
    if report.has_failures() {
        Err(PomError::PartialFailure(report.failures.len()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReplacementTable;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn update_prints_one_line_per_changed_file_and_a_summary() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a/pom.xml");
        let b = dir.path().join("b/pom.xml");
        fs::create_dir_all(a.parent().unwrap()).unwrap();
        fs::create_dir_all(b.parent().unwrap()).unwrap();
        fs::write(
            &a,
            "<groupId>site.ycsb</groupId>\n<version>0.18.0-SNAPSHOT</version>\n",
        )
        .unwrap();
        fs::write(&b, "<groupId>other.thing</groupId>\n").unwrap();

        let config = UpdaterConfig::new(dir.path(), ReplacementTable::default()).unwrap();
        let mut lines = Vec::new();
        let report = PomUpdater::new(config)
            .run(RunMode::Write, |path| lines.push(updating_line(path)))
            .unwrap();
        lines.push(updated_summary(report.modified_count()));

        assert_eq!(
            lines,
            vec![format!("Updating {}", a.display()), "Updated 1 files.".to_string()]
        );
        assert!(a.is_absolute());
    }

    #[test]
    fn summary_reports_zero_on_a_clean_tree() {
        assert_eq!(updated_summary(0), "Updated 0 files.");
    }
}
