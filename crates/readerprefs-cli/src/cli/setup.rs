use clap::{Parser, Subcommand};
use readerprefs::SettingsGroup;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "readerprefs",
    bin_name = "readerprefs",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Preview a decorated e-book reader settings screen", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Screen definition (TOML) to load instead of the built-in screen
    #[arg(long, global = true, help_heading = "Options")]
    pub screen: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Decorate only this group (repeatable)
    #[arg(
        short,
        long = "group",
        global = true,
        value_parser = parse_group,
        help_heading = "Options"
    )]
    pub groups: Vec<SettingsGroup>,

    /// Leave out the book settings, as when no book is open
    #[arg(long, global = true, help_heading = "Options")]
    pub no_book: bool,

    /// Print JSON instead of text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the decorated screen
    #[command(alias = "ls", display_order = 1)]
    Show,

    /// Change values and show the resulting screen
    #[command(display_order = 2)]
    Set {
        /// Changes to apply in order, e.g. viewmode=single_page
        #[arg(required = true, value_name = "KEY=VALUE")]
        assignments: Vec<String>,

        /// Reject slider values outside the slider's range
        #[arg(long)]
        strict: bool,
    },

    /// List setting groups and their keys
    #[command(display_order = 3)]
    Groups,

    /// List the reactions attached to each key
    #[command(display_order = 4)]
    Reactions,
}

fn parse_group(name: &str) -> Result<SettingsGroup, String> {
    SettingsGroup::from_name(name).map_err(|e| e.to_string())
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_naked_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["readerprefs"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.groups.is_empty());
    }

    #[test]
    fn test_groups_are_repeatable() {
        let cli = Cli::try_parse_from(["readerprefs", "-g", "render", "--group", "ui"]).unwrap();
        assert_eq!(cli.groups, vec![SettingsGroup::Render, SettingsGroup::Ui]);
    }

    #[test]
    fn test_unknown_group_is_rejected() {
        assert!(Cli::try_parse_from(["readerprefs", "--group", "sound"]).is_err());
    }

    #[test]
    fn test_set_takes_assignments() {
        let cli = Cli::try_parse_from([
            "readerprefs",
            "set",
            "--strict",
            "viewmode=single_page",
            "pagesinmemory=4",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Set {
                assignments,
                strict,
            }) => {
                assert!(strict);
                assert_eq!(assignments, vec!["viewmode=single_page", "pagesinmemory=4"]);
            }
            other => panic!("Expected Set, got {:?}", other),
        }
    }

    #[test]
    fn test_set_requires_an_assignment() {
        assert!(Cli::try_parse_from(["readerprefs", "set"]).is_err());
    }
}
