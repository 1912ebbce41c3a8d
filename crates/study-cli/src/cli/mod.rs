use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sbd` binary.
#[derive(Debug, Parser)]
#[command(name = "sbd", version, about = "StudyBuddy - workspaces, PDF study plans, and notes chat")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only, no spinners)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Global flags with the configured default format filled in.
    #[must_use]
    pub fn global_flags(&self, default_format: &str) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or_else(|| OutputFormat::from_config(default_format)),
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{AuthCommands, WorkspaceCommands};
    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["sbd", "--format", "json", "--verbose", "dashboard"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sbd", "workspace", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Workspace {
                action: WorkspaceCommands::List
            }
        ));
    }

    #[test]
    fn format_falls_back_to_config_default() {
        let cli = Cli::try_parse_from(["sbd", "dashboard"]).expect("cli should parse");
        assert_eq!(cli.global_flags("json").format, OutputFormat::Json);
        assert_eq!(cli.global_flags("table").format, OutputFormat::Table);
        assert_eq!(cli.global_flags("bogus").format, OutputFormat::Table);
        assert_eq!(cli.global_flags("json").color, ColorMode::Auto);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["sbd", "--format", "xml", "dashboard"]).is_err());
    }

    #[test]
    fn login_takes_username_and_password() {
        let cli = Cli::try_parse_from(["sbd", "auth", "login", "ada", "--password", "secret"])
            .expect("cli should parse");
        let Commands::Auth {
            action: AuthCommands::Login(args),
        } = cli.command
        else {
            panic!("expected auth login");
        };
        assert_eq!(args.username, "ada");
        assert_eq!(args.password, "secret");
    }

    #[test]
    fn workspace_create_parses_deadline() {
        let cli = Cli::try_parse_from([
            "sbd",
            "workspace",
            "create",
            "Midterm",
            "--deadline",
            "2024-05-01",
        ])
        .expect("cli should parse");
        let Commands::Workspace {
            action: WorkspaceCommands::Create { title, deadline },
        } = cli.command
        else {
            panic!("expected workspace create");
        };
        assert_eq!(title, "Midterm");
        assert_eq!(deadline.map(|d| d.to_string()), Some("2024-05-01".into()));
    }

    #[test]
    fn workspace_create_rejects_malformed_deadline() {
        assert!(
            Cli::try_parse_from(["sbd", "workspace", "create", "x", "--deadline", "05/01/2024"]).is_err()
        );
    }

    #[test]
    fn upload_takes_workspace_and_file() {
        let cli = Cli::try_parse_from(["sbd", "upload", "7", "notes.pdf"]).expect("cli should parse");
        let Commands::Upload(args) = cli.command else {
            panic!("expected upload");
        };
        assert_eq!(args.workspace_id, "7");
        assert_eq!(args.file, PathBuf::from("notes.pdf"));
    }

    #[test]
    fn chat_collects_repeated_questions() {
        let cli = Cli::try_parse_from(["sbd", "chat", "7", "-q", "first", "-q", "second"])
            .expect("cli should parse");
        let Commands::Chat(args) = cli.command else {
            panic!("expected chat");
        };
        assert_eq!(args.workspace_id, "7");
        assert_eq!(args.question, ["first", "second"]);
    }

    #[test]
    fn chat_without_questions_is_interactive() {
        let cli = Cli::try_parse_from(["sbd", "chat", "7"]).expect("cli should parse");
        let Commands::Chat(args) = cli.command else {
            panic!("expected chat");
        };
        assert!(args.question.is_empty());
    }
}
