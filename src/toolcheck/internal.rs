//! Internal implementation for tool detection

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{Capability, Probe, Tool};
use crate::platform::{DEVKITPRO_DEFAULT_ROOT, DEVKITPRO_ENV};

/// Marker in `gcc -dumpmachine` output identifying a MinGW toolchain
const MINGW_MARKER: &str = "mingw";

/// Probe backed by the real PATH, environment and filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl Probe for SystemProbe {
    fn find_executable(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }

    fn capture_stdout(&self, program: &Path, args: &[&str]) -> io::Result<String> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        hide_console_window(&mut cmd);

        let output = cmd.output()?;
        if !output.status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {}",
                program.display(),
                output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(windows)]
fn hide_console_window(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_console_window(_cmd: &mut Command) {}

pub fn check_tool(probe: &impl Probe, tool: Tool) -> Capability {
    let capability = match tool {
        Tool::Git => on_path(probe, "git"),
        Tool::Xmake => on_path(probe, "xmake"),
        Tool::Mingw => check_mingw(probe),
        Tool::DevkitPro => check_devkitpro(probe),
    };
    log::debug!("probe {tool}: {capability:?}");
    capability
}

fn on_path(probe: &impl Probe, name: &str) -> Capability {
    match probe.find_executable(name) {
        Some(_) => Capability::Present,
        None => Capability::Absent,
    }
}

fn check_mingw(probe: &impl Probe) -> Capability {
    let Some(gcc) = probe.find_executable("gcc") else {
        return Capability::Absent;
    };

    match probe.capture_stdout(&gcc, &["-dumpmachine"]) {
        Ok(triple) if triple.to_lowercase().contains(MINGW_MARKER) => Capability::Present,
        Ok(_) => Capability::Absent,
        Err(e) => Capability::ProbeFailed(format!("gcc -dumpmachine: {e}")),
    }
}

fn check_devkitpro(probe: &impl Probe) -> Capability {
    let root = probe
        .env_var(DEVKITPRO_ENV)
        .unwrap_or_else(|| DEVKITPRO_DEFAULT_ROOT.to_string());
    if probe.is_dir(&Path::new(&root).join("devkitA64")) {
        Capability::Present
    } else {
        Capability::Absent
    }
}
