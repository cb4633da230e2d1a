//! Create a new Extra2D project from the command line

use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;

use extra2d_create::browser::SystemBrowser;
use extra2d_create::config::{CliOverrides, Settings, UserConfig};
use extra2d_create::engine::EngineMode;
use extra2d_create::prompt::{prompt_downloads, TerminalInput};
use extra2d_create::toolcheck::{SystemProbe, ToolChecker};
use extra2d_create::workflow::{self, CreateArgs, EXIT_FAILURE};
use extra2d_create::ProjectScaffolder;

pub struct Options {
    pub name: String,
    pub path: Option<PathBuf>,
    pub author: Option<String>,
    pub engine: Option<EngineMode>,
    pub no_prompt: bool,
    pub skip_clone: bool,
}

/// Execute the create command and return the process exit code
///
/// # Errors
///
/// Returns an error if the user config cannot be read or the current
/// directory is unavailable. Everything else maps to an exit code.
pub fn execute(options: Options) -> Result<i32> {
    if !workflow::check_name(&options.name) {
        return Ok(EXIT_FAILURE);
    }

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let settings = Settings::resolve(
        UserConfig::load()?,
        |key| std::env::var(key).ok(),
        CliOverrides {
            author: options.author,
            engine: options.engine,
            skip_clone: options.skip_clone,
        },
        &cwd,
    )?;
    log::debug!("resolved settings: {settings:?}");

    let args = CreateArgs {
        name: options.name,
        path: options.path,
        author: settings.author.clone(),
    };

    // The download offer belongs to clone mode and needs a terminal
    let interactive = settings.engine == EngineMode::Clone
        && !options.no_prompt
        && atty::is(atty::Stream::Stdin);

    let checker = ToolChecker::new(SystemProbe);
    let scaffolder = ProjectScaffolder::new(settings.scaffold_options(&cwd));

    let exit_code = workflow::run(&args, &checker, &scaffolder, |missing| {
        if !interactive {
            return;
        }
        let input = TerminalInput::new();
        if let Err(e) = prompt_downloads(missing, input, io::stdout(), &SystemBrowser) {
            log::warn!("download prompt failed: {e}");
        }
    });

    Ok(exit_code)
}
