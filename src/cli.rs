use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pom-retarget",
    about = "Retarget Maven pom.xml files (groupId, version) across a project tree",
    version,
    author
)]
pub struct Cli {
    /// Root directory to search (overrides `root` from the config file; defaults to ".")
    #[arg(short, long, global = true)]
    pub path: Option<String>,

    /// TOML file providing `root` and `[[replacements]]`
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply the replacements and rewrite every changed pom.xml
    Update {
        #[command(flatten)]
        replacements: ReplacementArgs,

        /// Report unreadable or unwritable files and continue instead of aborting
        #[arg(short, long)]
        keep_going: bool,
    },

    /// Show which pom.xml files would change, without writing anything
    Check {
        #[command(flatten)]
        replacements: ReplacementArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every pom.xml under the root directory
    List,
}

#[derive(Args, Debug)]
pub struct ReplacementArgs {
    /// Literal substitution, applied in the order given (repeatable; replaces the configured table)
    #[arg(
        short = 'r',
        long = "replace",
        num_args = 2,
        value_names = ["SEARCH", "REPLACE"],
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub pairs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ordered_replace_pairs() {
        let cli = Cli::try_parse_from([
            "pom-retarget",
            "update",
            "--replace",
            "A",
            "B",
            "-r",
            "B",
            "C",
        ])
        .unwrap();

        match cli.command {
            Commands::Update {
                replacements,
                keep_going,
            } => {
                assert_eq!(replacements.pairs, vec!["A", "B", "B", "C"]);
                assert!(!keep_going);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_options_follow_subcommand() {
        let cli = Cli::try_parse_from(["pom-retarget", "check", "--json", "-p", "/srv/ycsb", "-v"])
            .unwrap();

        assert_eq!(cli.path.as_deref(), Some("/srv/ycsb"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check { json: true, .. }));
    }

    #[test]
    fn replace_requires_two_values() {
        assert!(Cli::try_parse_from(["pom-retarget", "update", "--replace", "only-one"]).is_err());
    }

    #[test]
    fn verifies_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
