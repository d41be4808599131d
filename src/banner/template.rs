//! Banner templates and the banner + prompt sequence shown before each login.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::render::{render, RenderContext};
use crate::host_info::HostInfo;

/// Conventional location of the system banner.
pub const DEFAULT_ISSUE_PATH: &str = "/etc/issue";

/// Banner used when the issue file cannot be read.
pub const DEFAULT_TEMPLATE: &[u8] = b"Welcome to \\s \\v \\n \\l\n\n";

/// Prompt rendered after the banner, through the same interpreter.
pub const DEFAULT_PROMPT: &str = "\\n login: ";

/// Where a template's bytes came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    BuiltIn,
}

/// A banner template, loaded fresh for every prompt cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerTemplate {
    bytes: Vec<u8>,
    source: TemplateSource,
}

impl BannerTemplate {
    /// Read the template at `path`, falling back to [`DEFAULT_TEMPLATE`] if
    /// the file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => {
                log::debug!("Loaded banner from {}", path.display());
                Self {
                    bytes,
                    source: TemplateSource::File(path.to_path_buf()),
                }
            }
            Err(e) => {
                log::debug!(
                    "Cannot read banner {} ({}), using built-in",
                    path.display(),
                    e
                );
                Self::builtin()
            }
        }
    }

    pub fn builtin() -> Self {
        Self {
            bytes: DEFAULT_TEMPLATE.to_vec(),
            source: TemplateSource::BuiltIn,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }
}

/// Everything shown to the user before a username is read.
#[derive(Debug, Clone)]
pub struct Banner {
    issue_path: PathBuf,
    prompt: String,
}

impl Banner {
    pub fn new(issue_path: impl Into<PathBuf>, prompt: impl Into<String>) -> Self {
        Self {
            issue_path: issue_path.into(),
            prompt: prompt.into(),
        }
    }

    pub fn issue_path(&self) -> &Path {
        &self.issue_path
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Write a blank line, the issue template, then the prompt, and flush.
    ///
    /// The template is re-read on every call so edits to the issue file show
    /// up on the next prompt cycle.
    pub fn show<W: Write + ?Sized>(&self, host: &HostInfo, tty: &str, out: &mut W) -> io::Result<()> {
        let template = BannerTemplate::load(&self.issue_path);
        let ctx = RenderContext::new(host, tty);

        out.write_all(b"\n")?;
        render(template.as_bytes(), &ctx, out)?;
        render(self.prompt.as_bytes(), &ctx, out)?;
        out.flush()
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(DEFAULT_ISSUE_PATH, DEFAULT_PROMPT)
    }
}
