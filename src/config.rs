//! Scaffolder configuration
//!
//! Settings are layered, later layers winning:
//! built-in defaults < `~/.extra2d/config.toml` < environment variables < CLI flags.
//!
//! ```toml
//! # ~/.extra2d/config.toml
//! author = "Ada"
//! engine = "package"
//! engine_root = "/home/ada/src/Extra2D"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::{EngineMode, ENGINE_REPO};
use crate::paths;
use crate::scaffold::{ScaffoldOptions, DEFAULT_AUTHOR};

pub const AUTHOR_ENV: &str = "EXTRA2D_AUTHOR";
pub const ENGINE_ENV: &str = "EXTRA2D_ENGINE";
pub const ENGINE_ROOT_ENV: &str = "EXTRA2D_ROOT";

/// Contents of `~/.extra2d/config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub engine: Option<EngineMode>,
    #[serde(default)]
    pub engine_repo: Option<String>,
    /// Engine checkout; parent of `projects/` in package mode
    #[serde(default)]
    pub engine_root: Option<PathBuf>,
    /// xmake package repository used in package mode
    #[serde(default)]
    pub package_repo: Option<String>,
}

impl UserConfig {
    /// Load from `path`. A missing file yields the empty config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Load from `~/.extra2d/config.toml`
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub author: Option<String>,
    pub engine: Option<EngineMode>,
    pub skip_clone: bool,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub author: String,
    pub engine: EngineMode,
    pub engine_repo: String,
    pub engine_root: PathBuf,
    pub package_repo: String,
    pub skip_clone: bool,
}

impl Settings {
    /// Merge the layers. `env` looks up environment variables; `cwd` is the
    /// fallback engine root and clone-mode output directory.
    pub fn resolve(
        file: UserConfig,
        env: impl Fn(&str) -> Option<String>,
        cli: CliOverrides,
        cwd: &Path,
    ) -> Result<Self> {
        let env_engine = match env(ENGINE_ENV) {
            Some(value) => Some(EngineMode::parse(&value).with_context(|| {
                format!("{ENGINE_ENV}={value} is not one of: clone, package")
            })?),
            None => None,
        };

        let author = cli
            .author
            .or_else(|| env(AUTHOR_ENV))
            .or(file.author)
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

        let engine = cli.engine.or(env_engine).or(file.engine).unwrap_or_default();

        let engine_root = env(ENGINE_ROOT_ENV)
            .map(PathBuf::from)
            .or(file.engine_root)
            .unwrap_or_else(|| cwd.to_path_buf());

        let engine_repo = file.engine_repo.unwrap_or_else(|| ENGINE_REPO.to_string());
        let package_repo = file.package_repo.unwrap_or_else(|| engine_repo.clone());

        Ok(Self {
            author,
            engine,
            engine_repo,
            engine_root,
            package_repo,
            skip_clone: cli.skip_clone,
        })
    }

    /// Parent directory for projects when `--path` is not given
    pub fn default_parent(&self, cwd: &Path) -> PathBuf {
        match self.engine {
            EngineMode::Clone => cwd.to_path_buf(),
            EngineMode::Package => paths::engine_projects_dir(&self.engine_root),
        }
    }

    pub fn scaffold_options(&self, cwd: &Path) -> ScaffoldOptions {
        let mut options = ScaffoldOptions::new(self.engine, self.default_parent(cwd));
        options.engine_root = self.engine_root.clone();
        options.engine_repo = self.engine_repo.clone();
        options.package_repo = self.package_repo.clone();
        if self.skip_clone {
            options.clone_engine = false;
        }
        options
    }
}
