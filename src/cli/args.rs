//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Locale-aware navigation resolver for multilingual documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "lingonav.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented starter config
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Validate the site map and resolve every declared page
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Resolve nav, sidebar and alternates for one page
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Write sitemap.xml with cross-locale alternates
    Sitemap {
        /// Output file (default: `[site.sitemap] path`)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Report page findings as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Requested page path, with or without the deploy base
    pub path: String,

    /// Resolve the page's version in this locale instead
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Print `<link rel="alternate">` tags instead of JSON
    #[arg(long)]
    pub html: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::parse_from([
            "lingonav", "-C", "docs/lingonav.toml", "resolve", "/zh/guide/", "--locale", "root",
            "--pretty",
        ]);
        assert_eq!(cli.config, PathBuf::from("docs/lingonav.toml"));
        let Commands::Resolve { args } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.path, "/zh/guide/");
        assert_eq!(args.locale.as_deref(), Some("root"));
        assert!(args.pretty && !args.html);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["lingonav", "check", "--warn-only", "-v", "--color", "never"]);
        assert!(cli.verbose);
        assert!(matches!(cli.color, ColorChoice::Never));
        assert!(matches!(
            cli.command,
            Commands::Check {
                args: CheckArgs { warn_only: true }
            }
        ));
    }

    #[test]
    fn test_init_defaults() {
        let cli = Cli::parse_from(["lingonav", "init"]);
        assert!(matches!(cli.command, Commands::Init { dir: None, dry: false }));
        assert_eq!(cli.config, PathBuf::from("lingonav.toml"));
    }
}
