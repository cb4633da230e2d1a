//! Target platforms a generated project can build for, and the host
//! families the scaffolder itself runs on.

use std::fmt;

/// Environment variable naming the devkitPro installation root
pub const DEVKITPRO_ENV: &str = "DEVKITPRO";
/// devkitPro root assumed when `DEVKITPRO` is unset
pub const DEVKITPRO_DEFAULT_ROOT: &str = "C:/devkitPro";

/// Build targets supported by the generated xmake project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    /// Windows desktop through a MinGW-w64 toolchain
    Mingw,
    /// Nintendo Switch homebrew through devkitPro (devkitA64)
    Switch,
}

impl TargetPlatform {
    pub const ALL: [TargetPlatform; 2] = [TargetPlatform::Mingw, TargetPlatform::Switch];

    /// xmake platform identifier (`xmake config -p <id>`)
    pub fn xmake_id(self) -> &'static str {
        match self {
            TargetPlatform::Mingw => "mingw",
            TargetPlatform::Switch => "switch",
        }
    }

    pub fn arch(self) -> &'static str {
        match self {
            TargetPlatform::Mingw => "x86_64",
            TargetPlatform::Switch => "arm64",
        }
    }

    /// Human-facing name used in README and status output
    pub fn display_name(self) -> &'static str {
        match self {
            TargetPlatform::Mingw => "MinGW (Windows)",
            TargetPlatform::Switch => "Nintendo Switch",
        }
    }

    /// Build output directory relative to the project root
    pub fn target_dir(self) -> &'static str {
        match self {
            TargetPlatform::Mingw => "build/windows",
            TargetPlatform::Switch => "build/switch",
        }
    }

    pub fn from_xmake_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.xmake_id() == id)
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xmake_id())
    }
}

/// Host operating system family, used to pick font candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostFamily {
    Windows,
    Unix,
}

impl HostFamily {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostFamily::Windows
        } else {
            HostFamily::Unix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xmake_ids_round_trip() {
        for platform in TargetPlatform::ALL {
            assert_eq!(TargetPlatform::from_xmake_id(platform.xmake_id()), Some(platform));
        }
        assert_eq!(TargetPlatform::from_xmake_id("linux"), None);
    }

    #[test]
    fn test_arch_per_platform() {
        assert_eq!(TargetPlatform::Switch.arch(), "arm64");
        assert_eq!(TargetPlatform::Mingw.arch(), "x86_64");
    }

    #[test]
    fn test_host_family_matches_cfg() {
        let expected = if cfg!(windows) { HostFamily::Windows } else { HostFamily::Unix };
        assert_eq!(HostFamily::current(), expected);
    }
}
