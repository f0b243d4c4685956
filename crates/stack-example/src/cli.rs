//! Command-line arguments for the `stack` binary.

use clap::Parser;

/// A small interactive stack console.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "stack", version, about, long_about = None)]
pub struct Cli {
    /// Prompt shown before each line [default: "> "]
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Show the stack depth in the prompt, e.g. "[2]> "
    #[arg(short, long)]
    pub counted: bool,

    /// Do not print the welcome banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["stack"]);
        assert_eq!(cli, Cli::default());
    }

    #[test]
    fn test_prompt_and_counted() {
        let cli = Cli::parse_from(["stack", "--prompt", "$ ", "--counted"]);
        assert_eq!(cli.prompt.as_deref(), Some("$ "));
        assert!(cli.counted);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["stack", "-q", "-vv", "-p", ">>"]);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.prompt.as_deref(), Some(">>"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["stack", "--bogus"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
