//! The create pipeline: validate, check tools, offer downloads, scaffold.
//!
//! Every failure is reported to the user here and mapped to an exit code;
//! nothing below this point calls `process::exit`.

use colored::Colorize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::engine::{manual_clone_instructions, EngineFetcher, EngineMode};
use crate::fonts::FileSystem;
use crate::naming::is_valid_project_name;
use crate::scaffold::{CreateReport, EngineFetch, ProjectRequest, ProjectScaffolder};
use crate::toolcheck::{Capability, Probe, Tool, ToolChecker, ToolReport};

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// One `create` invocation
#[derive(Debug, Clone)]
pub struct CreateArgs {
    pub name: String,
    pub path: Option<PathBuf>,
    pub author: String,
}

/// Run the pipeline and return the process exit code.
///
/// `offer_downloads` is called with the missing optional toolchains, if any,
/// before anything is written to disk.
pub fn run<P, F, E>(
    args: &CreateArgs,
    checker: &ToolChecker<P>,
    scaffolder: &ProjectScaffolder<F, E>,
    offer_downloads: impl FnOnce(&BTreeMap<Tool, &'static str>),
) -> i32
where
    P: Probe,
    F: FileSystem,
    E: EngineFetcher,
{
    if !check_name(&args.name) {
        return EXIT_FAILURE;
    }

    let report = checker.report();
    if let Err(e) = print_tool_status(&mut io::stdout().lock(), &report) {
        log::warn!("could not print tool status: {e}");
    }

    let required = report.required_missing();
    if !required.is_empty() {
        eprintln!("{} Required tools are missing:", "Error:".red().bold());
        for description in required.values() {
            eprintln!("  - {description}");
        }
        eprintln!("\nInstall them before creating a project.");
        return EXIT_FAILURE;
    }

    let optional = report.optional_missing();
    if !optional.is_empty() {
        offer_downloads(&optional);
    }

    let mut request = ProjectRequest::new(&args.name).with_author(&args.author);
    if let Some(path) = &args.path {
        request = request.with_output_path(path.clone());
    }

    match scaffolder.create(&request) {
        Ok(report) => {
            let options = scaffolder.options();
            print_follow_up(&report, options.engine, &args.name, &options.engine_repo);
            EXIT_OK
        }
        Err(e) => {
            log::error!("project creation failed: {e}");
            eprintln!("{} {e}", "Error:".red().bold());
            EXIT_FAILURE
        }
    }
}

/// Validate `name`, reporting a violation to the user
pub fn check_name(name: &str) -> bool {
    let valid = is_valid_project_name(name);
    if !valid {
        eprintln!(
            "{} Project name may only contain letters, digits and underscores",
            "Error:".red().bold()
        );
    }
    valid
}

/// Four-row availability table
pub fn print_tool_status(out: &mut impl Write, report: &ToolReport) -> io::Result<()> {
    writeln!(out, "\n========================================")?;
    writeln!(out, "Development environment")?;
    writeln!(out, "========================================")?;
    for (tool, capability) in report.entries() {
        let status = match capability {
            Capability::Present => format!("{} installed", "✓".green()),
            Capability::Absent => format!("{} not installed", "✗".red()),
            Capability::ProbeFailed(reason) => {
                format!("{} not installed (probe failed: {reason})", "✗".red())
            }
        };
        writeln!(out, "  {}: {status}", tool.label())?;
    }
    writeln!(out, "========================================\n")
}

fn print_follow_up(report: &CreateReport, engine: EngineMode, name: &str, repo: &str) {
    let show_manual_clone = engine == EngineMode::Clone
        && !matches!(report.engine, EngineFetch::Cloned);

    if show_manual_clone {
        println!("\nClone the engine source manually:");
        for line in manual_clone_instructions(&report.project_path, repo) {
            println!("  {line}");
        }
        return;
    }

    println!("\nNext steps:");
    println!("  1. cd {}", report.project_path.display());
    println!("  2. xmake config -p mingw");
    println!("  3. xmake build");
    println!("  4. xmake run {name}");
}
