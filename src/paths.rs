//! Single source of truth for every path the scaffolder touches.
//!
//! This module defines WHERE things live. It has no I/O, no validation,
//! no business logic. One file shows the entire generated layout.
//!
//! # Generated Project Layout
//!
//! ```text
//! <name>/
//! ├── src/
//! │   └── main.cpp             # Entry point
//! ├── romfs/
//! │   └── assets/
//! │       ├── images/
//! │       ├── audio/
//! │       └── font.ttf         # Copied system font (clone mode, best effort)
//! ├── xmake.lua                # Build descriptor
//! ├── .gitignore
//! ├── README.md
//! └── Extra2D/                 # Engine source (clone mode only)
//! ```
//!
//! # User-Level Paths (~/.extra2d/)
//!
//! ```text
//! ~/.extra2d/
//! └── config.toml              # Scaffolder defaults
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// User Level (~/.extra2d/)
// =============================================================================

/// User's scaffolder home directory: `~/.extra2d/`
pub fn user_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".extra2d")
}

/// User config file: `~/.extra2d/config.toml`
pub fn config_path() -> PathBuf {
    user_home().join("config.toml")
}

// =============================================================================
// Output Locations
// =============================================================================

/// Folder under the engine checkout that holds package-mode projects.
pub const PROJECTS_DIR: &str = "projects";

/// Default parent directory for package-mode projects: `<engine_root>/projects/`
pub fn engine_projects_dir(engine_root: &Path) -> PathBuf {
    engine_root.join(PROJECTS_DIR)
}

// =============================================================================
// Project Level (<name>/)
// =============================================================================

/// Paths inside a generated project
pub mod project {
    use std::path::{Path, PathBuf};

    pub const SRC_DIR: &str = "src";
    pub const ROMFS_DIR: &str = "romfs";
    pub const ENTRY_POINT: &str = "main.cpp";
    pub const BUILD_DESCRIPTOR: &str = "xmake.lua";
    pub const IGNORE_FILE: &str = ".gitignore";
    pub const README: &str = "README.md";
    pub const FONT_FILE: &str = "font.ttf";
    /// Subdirectory the engine repository is cloned into
    pub const ENGINE_DIR: &str = "Extra2D";

    /// Source directory: `<project>/src/`
    pub fn src_dir(root: &Path) -> PathBuf {
        root.join(SRC_DIR)
    }

    /// Asset root: `<project>/romfs/assets/`
    pub fn assets_dir(root: &Path) -> PathBuf {
        root.join(ROMFS_DIR).join("assets")
    }

    /// Image assets: `<project>/romfs/assets/images/`
    pub fn images_dir(root: &Path) -> PathBuf {
        assets_dir(root).join("images")
    }

    /// Audio assets: `<project>/romfs/assets/audio/`
    pub fn audio_dir(root: &Path) -> PathBuf {
        assets_dir(root).join("audio")
    }

    /// Entry point: `<project>/src/main.cpp`
    pub fn entry_point(root: &Path) -> PathBuf {
        src_dir(root).join(ENTRY_POINT)
    }

    /// Build descriptor: `<project>/xmake.lua`
    pub fn build_descriptor(root: &Path) -> PathBuf {
        root.join(BUILD_DESCRIPTOR)
    }

    /// Ignore file: `<project>/.gitignore`
    pub fn ignore_file(root: &Path) -> PathBuf {
        root.join(IGNORE_FILE)
    }

    /// Readme: `<project>/README.md`
    pub fn readme(root: &Path) -> PathBuf {
        root.join(README)
    }

    /// Font destination: `<project>/romfs/assets/font.ttf`
    pub fn font(root: &Path) -> PathBuf {
        assets_dir(root).join(FONT_FILE)
    }

    /// Engine checkout: `<project>/Extra2D/`
    pub fn engine_dir(root: &Path) -> PathBuf {
        root.join(ENGINE_DIR)
    }

    /// Directories created for every project, in creation order
    pub fn directories(root: &Path) -> Vec<PathBuf> {
        vec![
            root.to_path_buf(),
            images_dir(root),
            audio_dir(root),
            src_dir(root),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_layout() {
        let root = Path::new("/tmp/demo");
        assert_eq!(project::entry_point(root), PathBuf::from("/tmp/demo/src/main.cpp"));
        assert_eq!(
            project::images_dir(root),
            PathBuf::from("/tmp/demo/romfs/assets/images")
        );
        assert_eq!(
            project::font(root),
            PathBuf::from("/tmp/demo/romfs/assets/font.ttf")
        );
        assert_eq!(project::engine_dir(root), PathBuf::from("/tmp/demo/Extra2D"));
    }

    #[test]
    fn test_directories_start_with_root() {
        let root = Path::new("game");
        let dirs = project::directories(root);
        assert_eq!(dirs[0], PathBuf::from("game"));
        assert!(dirs.contains(&PathBuf::from("game/romfs/assets/audio")));
        assert!(dirs.contains(&PathBuf::from("game/src")));
    }

    #[test]
    fn test_engine_projects_dir() {
        assert_eq!(
            engine_projects_dir(Path::new("/opt/Extra2D")),
            PathBuf::from("/opt/Extra2D/projects")
        );
    }

    #[test]
    fn test_config_under_user_home() {
        assert!(config_path().ends_with(".extra2d/config.toml"));
    }
}
