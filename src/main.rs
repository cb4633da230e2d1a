use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use extra2d_create::engine::EngineMode;

mod commands;

#[derive(Parser)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Create a new Extra2D game project",
    long_about = None,
    after_help = "Examples:\n  extra2d-create my_game\n  extra2d-create my_game --path ./games\n  extra2d-create my_game --author \"Your Name\"\n  extra2d-create my_game --engine package"
)]
struct Cli {
    /// Project name (letters, digits and underscores only)
    name: String,

    /// Directory to create the project in (default: current directory,
    /// or <engine_root>/projects in package mode)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Project author (default: Extra2D Team)
    #[arg(short, long)]
    author: Option<String>,

    /// How the project gets the engine
    #[arg(long, value_enum)]
    engine: Option<EngineMode>,

    /// Don't offer to download missing toolchains
    #[arg(long)]
    no_prompt: bool,

    /// Don't clone the engine source (clone mode)
    #[arg(long)]
    skip_clone: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = commands::create::execute(commands::create::Options {
        name: cli.name,
        path: cli.path,
        author: cli.author,
        engine: cli.engine,
        no_prompt: cli.no_prompt,
        skip_clone: cli.skip_clone,
    })?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_short_flags() {
        let cli = Cli::try_parse_from(["extra2d-create", "demo", "-p", "games", "-a", "Ada"]).unwrap();
        assert_eq!(cli.name, "demo");
        assert_eq!(cli.path, Some(PathBuf::from("games")));
        assert_eq!(cli.author.as_deref(), Some("Ada"));
        assert_eq!(cli.engine, None);
    }

    #[test]
    fn test_cli_parses_engine_mode() {
        let cli = Cli::try_parse_from(["extra2d-create", "demo", "--engine", "package"]).unwrap();
        assert_eq!(cli.engine, Some(EngineMode::Package));
        assert!(Cli::try_parse_from(["extra2d-create", "demo", "--engine", "vendor"]).is_err());
    }

    #[test]
    fn test_cli_requires_name() {
        assert!(Cli::try_parse_from(["extra2d-create"]).is_err());
    }
}
