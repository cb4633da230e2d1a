//! Open URLs in the user's default browser.

use std::io;
use std::process::{Command, Stdio};

/// Launches a URL. Fire-and-forget: success of the browser itself is not checked.
pub trait UrlOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Platform launcher (`open`, `xdg-open`, `cmd /C start`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        log::debug!("opening {url}");
        launcher(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

#[cfg(target_os = "macos")]
fn launcher(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn launcher(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launcher(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}
