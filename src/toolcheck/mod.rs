//! Development tool detection
//!
//! This module follows the dependable-rust pattern:
//! - Public interface (this file): tool identities, capability results, the checker
//! - Internal implementation: host probing in internal.rs
//!
//! Required tools (git, xmake) gate project creation. Optional toolchains
//! (MinGW-w64, devkitPro) only drive the download offer.
//!
//! # Example
//!
//! ```no_run
//! use extra2d_create::toolcheck::{SystemProbe, ToolChecker};
//!
//! let report = ToolChecker::new(SystemProbe).report();
//! if !report.required_missing().is_empty() {
//!     eprintln!("install git and xmake first");
//! }
//! ```

mod internal;

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub use internal::SystemProbe;

pub const MINGW_URL: &str = "https://github.com/brechtsanders/winlibs_mingw/releases/download/16.0.0-snapshot20251026posix-14.0.0-ucrt-r1/winlibs-i686-posix-dwarf-gcc-16.0.0-snapshot20251026-mingw-w64ucrt-14.0.0-r1.zip";
pub const DEVKITPRO_URL: &str =
    "https://github.com/devkitPro/installer/releases/download/v3.0.3/devkitProUpdater-3.0.3.exe";

/// External tools the scaffolder cares about, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tool {
    Git,
    Xmake,
    Mingw,
    DevkitPro,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Git, Tool::Xmake, Tool::Mingw, Tool::DevkitPro];

    /// Short identifier (`git`, `xmake`, `mingw`, `devkitpro`)
    pub fn name(self) -> &'static str {
        match self {
            Tool::Git => "git",
            Tool::Xmake => "xmake",
            Tool::Mingw => "mingw",
            Tool::DevkitPro => "devkitpro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Git => "Git",
            Tool::Xmake => "xmake",
            Tool::Mingw => "MinGW (Windows development)",
            Tool::DevkitPro => "devkitPro (Switch development)",
        }
    }

    /// Required tools block scaffolding when absent
    pub fn is_required(self) -> bool {
        matches!(self, Tool::Git | Tool::Xmake)
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::Git => "Git version control",
            Tool::Xmake => "xmake build tool",
            Tool::Mingw => "MinGW-w64 toolchain (Windows development)",
            Tool::DevkitPro => "devkitPro SDK (Switch development)",
        }
    }

    /// Download page for optional toolchains
    pub fn download_url(self) -> Option<&'static str> {
        match self {
            Tool::Mingw => Some(MINGW_URL),
            Tool::DevkitPro => Some(DEVKITPRO_URL),
            Tool::Git | Tool::Xmake => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of probing for a single tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    Present,
    Absent,
    /// The probe itself errored, so presence is unknown
    ProbeFailed(String),
}

impl Capability {
    pub fn is_present(&self) -> bool {
        matches!(self, Capability::Present)
    }
}

/// Host queries used by the checker. Tests substitute a fake.
pub trait Probe {
    /// Resolve an executable on the search path
    fn find_executable(&self, name: &str) -> Option<PathBuf>;

    /// Run a program and return its stdout. Non-zero exit is an error.
    fn capture_stdout(&self, program: &Path, args: &[&str]) -> io::Result<String>;

    fn env_var(&self, key: &str) -> Option<String>;

    fn is_dir(&self, path: &Path) -> bool;
}

/// Queries the host for required tools and optional toolchains
pub struct ToolChecker<P: Probe> {
    probe: P,
}

impl<P: Probe> ToolChecker<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    pub fn has_source_control(&self) -> bool {
        self.check(Tool::Git).is_present()
    }

    pub fn has_build_tool(&self) -> bool {
        self.check(Tool::Xmake).is_present()
    }

    pub fn has_windows_toolchain(&self) -> bool {
        self.check(Tool::Mingw).is_present()
    }

    pub fn has_console_sdk(&self) -> bool {
        self.check(Tool::DevkitPro).is_present()
    }

    /// Probe a single tool
    pub fn check(&self, tool: Tool) -> Capability {
        internal::check_tool(&self.probe, tool)
    }

    /// Probe every tool once. The report is never cached across runs.
    pub fn report(&self) -> ToolReport {
        ToolReport {
            entries: Tool::ALL.iter().map(|&t| (t, self.check(t))).collect(),
        }
    }

    pub fn required_missing(&self) -> BTreeMap<Tool, &'static str> {
        self.report().required_missing()
    }

    pub fn optional_missing(&self) -> BTreeMap<Tool, &'static str> {
        self.report().optional_missing()
    }
}

/// Snapshot of tool availability for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReport {
    entries: BTreeMap<Tool, Capability>,
}

impl ToolReport {
    pub fn from_entries(entries: impl IntoIterator<Item = (Tool, Capability)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Capability for `tool`; tools never probed count as absent
    pub fn capability(&self, tool: Tool) -> &Capability {
        static ABSENT: Capability = Capability::Absent;
        self.entries.get(&tool).unwrap_or(&ABSENT)
    }

    pub fn entries(&self) -> impl Iterator<Item = (Tool, &Capability)> {
        self.entries.iter().map(|(t, c)| (*t, c))
    }

    /// Missing required tools mapped to their description
    pub fn required_missing(&self) -> BTreeMap<Tool, &'static str> {
        Tool::ALL
            .into_iter()
            .filter(|&tool| tool.is_required() && !self.capability(tool).is_present())
            .map(|tool| (tool, tool.description()))
            .collect()
    }

    /// Missing optional toolchains mapped to their download URL
    pub fn optional_missing(&self) -> BTreeMap<Tool, &'static str> {
        Tool::ALL
            .into_iter()
            .filter(|&tool| !self.capability(tool).is_present())
            .filter_map(|tool| tool.download_url().map(|url| (tool, url)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[derive(Default)]
    struct FakeProbe {
        executables: HashSet<&'static str>,
        outputs: HashMap<&'static str, io::Result<String>>,
        env: HashMap<&'static str, String>,
        dirs: HashSet<PathBuf>,
    }

    impl Probe for FakeProbe {
        fn find_executable(&self, name: &str) -> Option<PathBuf> {
            self.executables
                .contains(name)
                .then(|| PathBuf::from(format!("/usr/bin/{name}")))
        }

        fn capture_stdout(&self, program: &Path, _args: &[&str]) -> io::Result<String> {
            let name = program.file_name().and_then(|n| n.to_str()).unwrap_or("");
            match self.outputs.get(name) {
                Some(Ok(out)) => Ok(out.clone()),
                Some(Err(e)) => Err(io::Error::new(e.kind(), e.to_string())),
                None => Err(io::Error::new(io::ErrorKind::NotFound, "not found")),
            }
        }

        fn env_var(&self, key: &str) -> Option<String> {
            self.env.get(key).cloned()
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.contains(path)
        }
    }

    #[test]
    fn test_required_tools_resolved_on_path() {
        let mut probe = FakeProbe::default();
        probe.executables.insert("git");
        let checker = ToolChecker::new(probe);

        assert!(checker.has_source_control());
        assert!(!checker.has_build_tool());

        let missing = checker.required_missing();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing.get(&Tool::Xmake), Some(&"xmake build tool"));
    }

    #[test]
    fn test_mingw_requires_marker_in_dumpmachine() {
        let mut probe = FakeProbe::default();
        probe.executables.insert("gcc");
        probe
            .outputs
            .insert("gcc", Ok("x86_64-w64-MinGW32\n".to_string()));
        assert_eq!(ToolChecker::new(probe).check(Tool::Mingw), Capability::Present);

        let mut probe = FakeProbe::default();
        probe.executables.insert("gcc");
        probe.outputs.insert("gcc", Ok("x86_64-linux-gnu\n".to_string()));
        assert_eq!(ToolChecker::new(probe).check(Tool::Mingw), Capability::Absent);
    }

    #[test]
    fn test_mingw_without_gcc_is_absent() {
        let checker = ToolChecker::new(FakeProbe::default());
        assert_eq!(checker.check(Tool::Mingw), Capability::Absent);
    }

    #[test]
    fn test_mingw_probe_failure_is_distinguished() {
        let mut probe = FakeProbe::default();
        probe.executables.insert("gcc");
        probe.outputs.insert(
            "gcc",
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        );
        let checker = ToolChecker::new(probe);

        assert!(matches!(checker.check(Tool::Mingw), Capability::ProbeFailed(_)));
        assert!(!checker.has_windows_toolchain());
        assert!(checker.optional_missing().contains_key(&Tool::Mingw));
    }

    #[test]
    fn test_devkitpro_uses_env_root() {
        let mut probe = FakeProbe::default();
        probe.env.insert("DEVKITPRO", "/opt/devkitpro".to_string());
        probe.dirs.insert(PathBuf::from("/opt/devkitpro/devkitA64"));
        assert!(ToolChecker::new(probe).has_console_sdk());
    }

    #[test]
    fn test_devkitpro_default_root() {
        let mut probe = FakeProbe::default();
        probe.dirs.insert(PathBuf::from("C:/devkitPro/devkitA64"));
        assert!(ToolChecker::new(probe).has_console_sdk());

        let mut probe = FakeProbe::default();
        probe.env.insert("DEVKITPRO", "/elsewhere".to_string());
        probe.dirs.insert(PathBuf::from("C:/devkitPro/devkitA64"));
        assert!(!ToolChecker::new(probe).has_console_sdk());
    }

    #[test]
    fn test_optional_missing_maps_to_urls() {
        let report = ToolReport::from_entries([
            (Tool::Git, Capability::Present),
            (Tool::Xmake, Capability::Present),
            (Tool::Mingw, Capability::Absent),
            (Tool::DevkitPro, Capability::Present),
        ]);
        let optional = report.optional_missing();
        assert_eq!(optional.len(), 1);
        assert_eq!(optional.get(&Tool::Mingw), Some(&MINGW_URL));
        assert!(report.required_missing().is_empty());
        assert_eq!(report.capability(Tool::Xmake), &Capability::Present);
    }

    #[test]
    fn test_unprobed_tool_counts_as_absent() {
        let report = ToolReport::from_entries([(Tool::Git, Capability::Present)]);
        assert_eq!(report.capability(Tool::DevkitPro), &Capability::Absent);
        assert_eq!(
            report.required_missing().keys().copied().collect::<Vec<_>>(),
            vec![Tool::Xmake]
        );
    }

    #[test]
    fn test_report_covers_all_tools() {
        let report = ToolChecker::new(FakeProbe::default()).report();
        assert_eq!(report.entries().count(), Tool::ALL.len());
        assert_eq!(report.required_missing().len(), 2);
        assert_eq!(report.optional_missing().len(), 2);
    }
}
