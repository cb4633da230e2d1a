//! How a generated project gets the Extra2D engine.

use serde::Deserialize;
use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Engine source repository
pub const ENGINE_REPO: &str = "https://github.com/ChestnutYueyue/Extra2D.git";

/// Engine source mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineMode {
    /// Clone the engine into `<project>/Extra2D` and build it from source
    #[default]
    Clone,
    /// Consume the engine as a remote xmake package
    Package,
}

impl EngineMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineMode::Clone => "clone",
            EngineMode::Package => "package",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clone" => Some(EngineMode::Clone),
            "package" => Some(EngineMode::Package),
            _ => None,
        }
    }
}

impl fmt::Display for EngineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetches the engine repository into a project
pub trait EngineFetcher {
    /// Returns `Ok(false)` when the fetch ran but did not succeed
    fn fetch(&self, repo: &str, dest: &Path, cwd: &Path) -> io::Result<bool>;
}

/// `git clone` with inherited stdio so progress is visible
#[derive(Debug, Clone, Copy, Default)]
pub struct GitClone;

impl EngineFetcher for GitClone {
    fn fetch(&self, repo: &str, dest: &Path, cwd: &Path) -> io::Result<bool> {
        log::debug!("git clone {repo} {} (cwd {})", dest.display(), cwd.display());
        let status = Command::new("git")
            .arg("clone")
            .arg(repo)
            .arg(dest)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(status.success())
    }
}

/// Manual equivalent of the clone, shown when it fails or is skipped
pub fn manual_clone_instructions(project_path: &Path, repo: &str) -> Vec<String> {
    vec![
        format!("cd {}", project_path.display()),
        format!("git clone {repo} {}", crate::paths::project::ENGINE_DIR),
    ]
}
