//! Internal implementation for project scaffolding

use colored::Colorize;
use std::fs;
use std::path::Path;

use super::{
    CreateReport, EngineFetch, GeneratedFileSet, ProjectRequest, ProjectScaffolder, ScaffoldError,
};
use crate::engine::EngineFetcher;
use crate::fonts::{self, FileSystem, FontCopy};
use crate::naming::is_valid_project_name;
use crate::paths::project;
use crate::platform::HostFamily;
use crate::templates::{self, TemplateContext};

pub fn create<F: FileSystem, E: EngineFetcher>(
    scaffolder: &ProjectScaffolder<F, E>,
    request: &ProjectRequest,
) -> Result<CreateReport, ScaffoldError> {
    if !is_valid_project_name(&request.name) {
        return Err(ScaffoldError::InvalidName(request.name.clone()));
    }

    let root = scaffolder.project_path(request);
    println!("\nCreating Extra2D project: {}", request.name.bold());
    println!("Project path: {}", root.display());

    // Checked once for the whole tree, never per file
    if root.exists() {
        return Err(ScaffoldError::AlreadyExists(root));
    }

    let options = scaffolder.options();

    create_directories(&root)?;

    let font = if options.copy_font {
        Some(copy_system_font(&scaffolder.fs, &root))
    } else {
        None
    };

    let ctx = TemplateContext {
        name: &request.name,
        author: &request.author,
        engine: options.engine,
        engine_root: &options.engine_root,
        package_repo: &options.package_repo,
    };

    let files = GeneratedFileSet {
        entry_point: write_file(&project::entry_point(&root), &templates::entry_point(&ctx))?,
        build_descriptor: write_file(
            &project::build_descriptor(&root),
            &templates::build_descriptor(&ctx),
        )?,
        ignore_file: write_file(&project::ignore_file(&root), templates::ignore_file())?,
        readme: write_file(&project::readme(&root), &templates::readme(&ctx))?,
        font: match &font {
            Some(FontCopy::Copied(_)) => Some(project::font(&root)),
            _ => None,
        },
    };

    println!("\n{} Project created!", "✓".green());

    let engine = if options.clone_engine {
        clone_engine(&scaffolder.fetcher, &options.engine_repo, &root)
    } else {
        EngineFetch::Skipped
    };

    Ok(CreateReport {
        project_path: root,
        files,
        font,
        engine,
    })
}

fn create_directories(root: &Path) -> Result<(), ScaffoldError> {
    println!("Creating directory structure...");
    for dir in project::directories(root) {
        fs::create_dir_all(&dir).map_err(|source| ScaffoldError::Io {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(())
}

fn copy_system_font(fs: &impl FileSystem, root: &Path) -> FontCopy {
    println!("Copying system font...");
    let candidates = fonts::font_candidates(HostFamily::current());
    let result = fonts::copy_first_available(fs, &candidates, &project::font(root));

    match &result {
        FontCopy::Copied(src) => {
            let name = src.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            println!("{} Copied font: {name}", "✓".green());
        }
        FontCopy::NotFound { failures } => {
            for (src, e) in failures {
                println!("{} Failed to copy font {}: {e}", "✗".red(), src.display());
            }
            println!(
                "{} No system font found, add one manually at romfs/assets/font.ttf",
                "⚠".yellow()
            );
        }
    }
    result
}

fn write_file(path: &Path, content: &str) -> Result<std::path::PathBuf, ScaffoldError> {
    if let Some(name) = path.file_name() {
        println!("Writing {}...", name.to_string_lossy());
    }
    fs::write(path, content).map_err(|source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

fn clone_engine(fetcher: &impl EngineFetcher, repo: &str, root: &Path) -> EngineFetch {
    let dest = project::engine_dir(root);
    println!("\nCloning Extra2D engine source...");
    println!("Repository: {repo}");
    println!("Destination: {}", dest.display());

    match fetcher.fetch(repo, &dest, root) {
        Ok(true) => {
            println!("{} Engine source cloned", "✓".green());
            EngineFetch::Cloned
        }
        Ok(false) => {
            println!("{} Engine clone failed", "✗".red());
            EngineFetch::Failed("git clone exited unsuccessfully".to_string())
        }
        Err(e) => {
            println!("{} Error while cloning: {e}", "✗".red());
            EngineFetch::Failed(e.to_string())
        }
    }
}
