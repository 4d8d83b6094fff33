//! lingonav - locale-aware navigation for multilingual documentation sites.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use lingonav::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    lingonav::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dir, dry } => cli::init::new_site(dir.as_deref(), &cli.config, *dry),
        Commands::Check { args } => cli::check::check_site(&cli::load_config(&cli)?, args),
        Commands::Resolve { args } => {
            let config = cli::load_config(&cli)?;
            config.validate()?;
            cli::resolve::resolve_path(&config, args)
        }
        Commands::Sitemap { output } => {
            let config = cli::load_config(&cli)?;
            config.validate()?;
            cli::sitemap::build_sitemap(&config, output.as_deref())
        }
    }
}
