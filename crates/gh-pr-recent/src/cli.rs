//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

/// Browse the pull requests you recently reviewed or took part in
#[derive(Debug, Parser)]
#[command(name = "gh-pr-recent", version, about)]
pub struct Cli {
    /// View location to start from, e.g. `status=open&status=merged` or a full URL
    #[arg(short, long)]
    pub location: Option<String>,

    /// GitHub token, used when the location carries no `token` parameter
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to a config file (defaults to .gh-pr-recent.toml in CWD or HOME)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_arguments() {
        let cli = Cli::try_parse_from([
            "gh-pr-recent",
            "--location",
            "?status=open",
            "--token",
            "ghp_abc",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert_eq!(cli.location.as_deref(), Some("?status=open"));
        assert_eq!(cli.token.as_deref(), Some("ghp_abc"));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
