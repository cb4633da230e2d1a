//! Interactive offer to download missing optional toolchains.
//!
//! Purely advisory: whatever the user picks, scaffolding continues.
//! Ctrl-C at the menu cancels the menu, not the run.

use colored::Colorize;
use console::Term;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use crate::browser::UrlOpener;
use crate::toolcheck::Tool;

/// Menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadChoice {
    Mingw,
    DevkitPro,
    Both,
    Skip,
}

impl DownloadChoice {
    /// Unrecognized or empty input means skip
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => DownloadChoice::Mingw,
            "2" => DownloadChoice::DevkitPro,
            "3" => DownloadChoice::Both,
            _ => DownloadChoice::Skip,
        }
    }

    fn tools(self) -> &'static [Tool] {
        match self {
            DownloadChoice::Mingw => &[Tool::Mingw],
            DownloadChoice::DevkitPro => &[Tool::DevkitPro],
            DownloadChoice::Both => &[Tool::Mingw, Tool::DevkitPro],
            DownloadChoice::Skip => &[],
        }
    }
}

/// Source of one line of user input
pub trait LineInput {
    /// Read one line. `Ok(None)` is end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Any buffered reader, e.g. piped stdin
pub struct BufLines<R>(pub R);

impl<R: BufRead> LineInput for BufLines<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.0.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// The controlling terminal. Reading in raw mode turns Ctrl-C into an
/// `Interrupted` error instead of a SIGINT.
pub struct TerminalInput {
    term: Term,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineInput for TerminalInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.term.read_line().map(Some)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOutcome {
    pub choice: DownloadChoice,
    /// Download pages actually opened
    pub opened: Vec<Tool>,
}

/// Show the download menu for `missing` and act on one line of input.
///
/// Only tools that are actually missing get their page opened. End of input,
/// an interrupt or any other failed read cancels the prompt and counts as skip.
pub fn prompt_downloads<R: LineInput, W: Write>(
    missing: &BTreeMap<Tool, &'static str>,
    mut input: R,
    mut out: W,
    opener: &impl UrlOpener,
) -> io::Result<PromptOutcome> {
    let mut outcome = PromptOutcome {
        choice: DownloadChoice::Skip,
        opened: Vec::new(),
    };
    if missing.is_empty() {
        return Ok(outcome);
    }

    writeln!(out, "\n========================================")?;
    writeln!(out, "Missing development toolchains:")?;
    writeln!(out, "========================================")?;
    for tool in missing.keys() {
        writeln!(out, "  - {}", tool.description())?;
    }

    writeln!(out, "\nDownload them now?")?;
    writeln!(out, "  1. Download MinGW-w64 (Windows development)")?;
    writeln!(out, "  2. Download devkitPro (Switch development)")?;
    writeln!(out, "  3. Download both")?;
    writeln!(out, "  4. Skip")?;
    write!(out, "\nChoose (1-4): ")?;
    out.flush()?;

    let line = match input.read_line() {
        Ok(Some(line)) => line,
        Ok(None) => {
            writeln!(out, "\nCancelled.")?;
            return Ok(outcome);
        }
        Err(e) => {
            log::debug!("prompt input aborted: {e}");
            writeln!(out, "\nCancelled.")?;
            return Ok(outcome);
        }
    };

    outcome.choice = DownloadChoice::parse(&line);
    for tool in outcome.choice.tools() {
        let Some(url) = missing.get(tool) else {
            continue;
        };
        writeln!(out, "\nOpening {} download page...", tool.name())?;
        writeln!(out, "URL: {url}")?;
        if let Err(e) = opener.open(url) {
            log::warn!("could not launch browser for {url}: {e}");
        }
        outcome.opened.push(*tool);
    }

    if outcome.opened.is_empty() {
        writeln!(out, "\nDownload skipped.")?;
    }

    writeln!(out, "\n{}", "Installation hints:".bold())?;
    for tool in missing.keys() {
        match tool {
            Tool::Mingw => writeln!(out, "  MinGW: extract it and add its bin directory to PATH")?,
            Tool::DevkitPro => {
                writeln!(out, "  devkitPro: run the installer and follow its steps")?
            }
            Tool::Git | Tool::Xmake => {}
        }
    }

    Ok(outcome)
}
