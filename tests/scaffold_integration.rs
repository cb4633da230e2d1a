//! End-to-end scaffolding against a temporary directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use extra2d_create::engine::{EngineFetcher, EngineMode};
use extra2d_create::fonts::FileSystem;
use extra2d_create::{ProjectRequest, ProjectScaffolder, ScaffoldError, ScaffoldOptions};
use tempfile::TempDir;

struct NoFonts;

impl FileSystem for NoFonts {
    fn exists(&self, _path: &Path) -> bool {
        false
    }
    fn copy(&self, _from: &Path, _to: &Path) -> io::Result<()> {
        Ok(())
    }
}

struct NoClone;

impl EngineFetcher for NoClone {
    fn fetch(&self, _repo: &str, _dest: &Path, _cwd: &Path) -> io::Result<bool> {
        Ok(false)
    }
}

fn scaffolder(engine: EngineMode, parent: &Path) -> ProjectScaffolder<NoFonts, NoClone> {
    ProjectScaffolder::with_parts(ScaffoldOptions::new(engine, parent), NoFonts, NoClone)
}

/// Every entry under `root`, relative, sorted
fn tree(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            let rel = path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/");
            if path.is_dir() {
                out.push(format!("{rel}/"));
                walk(root, &path, out);
            } else {
                out.push(rel);
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn test_creates_exact_layout() {
    let temp = TempDir::new().unwrap();
    let report = scaffolder(EngineMode::Clone, temp.path())
        .create(&ProjectRequest::new("demo").with_author("Ada"))
        .unwrap();

    assert_eq!(report.project_path, temp.path().join("demo"));
    assert_eq!(
        tree(&report.project_path),
        vec![
            ".gitignore",
            "README.md",
            "romfs/",
            "romfs/assets/",
            "romfs/assets/audio/",
            "romfs/assets/images/",
            "src/",
            "src/main.cpp",
            "xmake.lua",
        ]
    );
}

#[test]
fn test_placeholders_substituted() {
    let temp = TempDir::new().unwrap();
    let report = scaffolder(EngineMode::Clone, temp.path())
        .create(&ProjectRequest::new("demo").with_author("Ada"))
        .unwrap();

    let main_cpp = fs::read_to_string(&report.files.entry_point).unwrap();
    assert!(main_cpp.contains("\"demo\""));
    assert!(!main_cpp.contains("{{."));

    let readme = fs::read_to_string(&report.files.readme).unwrap();
    assert!(readme.contains("Ada"));
    assert!(readme.contains("# demo"));
    assert!(!readme.contains("{{."));
}

#[test]
fn test_default_author() {
    let temp = TempDir::new().unwrap();
    let report = scaffolder(EngineMode::Package, temp.path())
        .create(&ProjectRequest::new("demo"))
        .unwrap();

    let readme = fs::read_to_string(&report.files.readme).unwrap();
    assert!(readme.contains("Extra2D Team"));
}

#[test]
fn test_output_path_overrides_default_parent() {
    let temp = TempDir::new().unwrap();
    let games = temp.path().join("games");
    let report = scaffolder(EngineMode::Clone, &temp.path().join("unused"))
        .create(&ProjectRequest::new("demo").with_output_path(&games))
        .unwrap();

    assert_eq!(report.project_path, games.join("demo"));
    assert!(games.join("demo/xmake.lua").is_file());
    assert!(!temp.path().join("unused").exists());
}

#[test]
fn test_existing_directory_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("demo");
    fs::create_dir(&existing).unwrap();

    let err = scaffolder(EngineMode::Clone, temp.path())
        .create(&ProjectRequest::new("demo"))
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::AlreadyExists(ref p) if *p == existing));
    assert_eq!(fs::read_dir(&existing).unwrap().count(), 0);
}

#[test]
fn test_existing_directory_contents_preserved() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("demo");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("README.md"), "mine").unwrap();

    assert!(scaffolder(EngineMode::Clone, temp.path())
        .create(&ProjectRequest::new("demo"))
        .is_err());

    assert_eq!(tree(&existing), vec!["README.md"]);
    assert_eq!(fs::read_to_string(existing.join("README.md")).unwrap(), "mine");
}

#[test]
fn test_invalid_name_creates_nothing() {
    let temp = TempDir::new().unwrap();
    for name in ["bad name!", "my-game", "", "a/b"] {
        let err = scaffolder(EngineMode::Clone, temp.path())
            .create(&ProjectRequest::new(name))
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName(_)), "{name:?}");
    }
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_write_failure_reports_path() {
    let temp = TempDir::new().unwrap();
    // A file where the parent directory should be
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let err = scaffolder(EngineMode::Clone, &blocker)
        .create(&ProjectRequest::new("demo"))
        .unwrap_err();

    match err {
        ScaffoldError::Io { path, .. } => assert_eq!(path, PathBuf::from(&blocker).join("demo")),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_package_mode_descriptor_uses_remote_package() {
    let temp = TempDir::new().unwrap();
    let report = scaffolder(EngineMode::Package, temp.path())
        .create(&ProjectRequest::new("demo"))
        .unwrap();

    let lua = fs::read_to_string(&report.files.build_descriptor).unwrap();
    assert!(lua.contains("add_requires(\"extra2d\")"));
    assert!(lua.contains("target(\"demo\")"));
    assert!(!report.project_path.join("Extra2D").exists());
}
