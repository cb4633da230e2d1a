//! Project scaffolding
//!
//! This module follows the dependable-rust pattern:
//! - Public interface (this file): request, options, scaffolder, errors
//! - Internal implementation: the creation steps in internal.rs
//!
//! # Example
//!
//! ```no_run
//! use extra2d_create::engine::EngineMode;
//! use extra2d_create::scaffold::{ProjectRequest, ProjectScaffolder, ScaffoldOptions};
//!
//! let options = ScaffoldOptions::new(EngineMode::Clone, std::env::current_dir()?);
//! let request = ProjectRequest::new("my_game").with_author("Ada");
//! let report = ProjectScaffolder::new(options).create(&request)?;
//! println!("created {}", report.project_path.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Creation is not transactional. A failure partway through leaves the
//! partially populated directory on disk.

mod internal;

use std::io;
use std::path::{Path, PathBuf};

use crate::engine::{EngineFetcher, EngineMode, GitClone, ENGINE_REPO};
use crate::fonts::{FileSystem, FontCopy, RealFs};

/// Default author written into README and NACP metadata
pub const DEFAULT_AUTHOR: &str = "Extra2D Team";

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("project name '{0}' may only contain letters, digits and underscores")]
    InvalidName(String),

    #[error("project directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What to create, as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub name: String,
    /// Parent directory; `None` uses the mode's default
    pub output_path: Option<PathBuf>,
    pub author: String,
}

impl ProjectRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output_path: None,
            author: DEFAULT_AUTHOR.to_string(),
        }
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }
}

/// How projects are created
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub engine: EngineMode,
    /// Parent directory used when the request has no output path
    pub default_parent: PathBuf,
    /// Engine checkout referenced by package-mode build descriptors
    pub engine_root: PathBuf,
    pub engine_repo: String,
    pub package_repo: String,
    /// Copy a system font into `romfs/assets/font.ttf`
    pub copy_font: bool,
    /// Clone the engine into `<project>/Extra2D`
    pub clone_engine: bool,
}

impl ScaffoldOptions {
    /// Options with the mode's own defaults: clone mode copies a font and
    /// clones the engine, package mode does neither.
    pub fn new(engine: EngineMode, default_parent: impl Into<PathBuf>) -> Self {
        let default_parent = default_parent.into();
        let vendored = engine == EngineMode::Clone;
        Self {
            engine,
            engine_root: default_parent.clone(),
            default_parent,
            engine_repo: ENGINE_REPO.to_string(),
            package_repo: ENGINE_REPO.to_string(),
            copy_font: vendored,
            clone_engine: vendored,
        }
    }
}

/// Files written by a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFileSet {
    pub entry_point: PathBuf,
    pub build_descriptor: PathBuf,
    pub ignore_file: PathBuf,
    pub readme: PathBuf,
    pub font: Option<PathBuf>,
}

/// Outcome of the engine clone step
#[derive(Debug)]
pub enum EngineFetch {
    Cloned,
    Failed(String),
    /// Disabled for this run (package mode or `--skip-clone`)
    Skipped,
}

#[derive(Debug)]
pub struct CreateReport {
    pub project_path: PathBuf,
    pub files: GeneratedFileSet,
    /// `None` when font copying was disabled
    pub font: Option<FontCopy>,
    pub engine: EngineFetch,
}

/// Creates project skeletons on disk
pub struct ProjectScaffolder<F: FileSystem = RealFs, E: EngineFetcher = GitClone> {
    options: ScaffoldOptions,
    fs: F,
    fetcher: E,
}

impl ProjectScaffolder {
    pub fn new(options: ScaffoldOptions) -> Self {
        Self::with_parts(options, RealFs, GitClone)
    }
}

impl<F: FileSystem, E: EngineFetcher> ProjectScaffolder<F, E> {
    /// Scaffolder with an injected font filesystem and engine fetcher
    pub fn with_parts(options: ScaffoldOptions, fs: F, fetcher: E) -> Self {
        Self {
            options,
            fs,
            fetcher,
        }
    }

    pub fn options(&self) -> &ScaffoldOptions {
        &self.options
    }

    /// `output_path / name`, or `default_parent / name`
    pub fn project_path(&self, request: &ProjectRequest) -> PathBuf {
        let parent: &Path = request
            .output_path
            .as_deref()
            .unwrap_or(&self.options.default_parent);
        parent.join(&request.name)
    }

    /// Create the project described by `request`.
    ///
    /// Fails without touching the filesystem when the name is invalid or the
    /// project directory already exists.
    pub fn create(&self, request: &ProjectRequest) -> Result<CreateReport, ScaffoldError> {
        internal::create(self, request)
    }
}
