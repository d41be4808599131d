//! Controlling terminal resolution

use std::io;
use std::os::fd::AsFd;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};

use super::error::TerminalError;

/// Directory prefix stripped to form the short terminal name.
pub const DEV_PREFIX: &str = "/dev/";

/// The terminal this process serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalHandle {
    path: PathBuf,
    name: String,
}

impl TerminalHandle {
    /// Resolve the terminal attached to standard input.
    pub fn from_stdin() -> Result<Self, TerminalError> {
        let path = nix::unistd::ttyname(io::stdin().as_fd()).map_err(TerminalError::NotATty)?;
        Ok(Self::new(path))
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = short_name(&path);
        Self { path, name }
    }

    /// Full device path, e.g. `/dev/ttyS0`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Device path without the `/dev/` prefix, e.g. `ttyS0` or `pts/3`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the device node is a character device.
    pub fn is_char_device(&self) -> bool {
        std::fs::metadata(&self.path)
            .map(|m| m.file_type().is_char_device())
            .unwrap_or(false)
    }
}

fn short_name(path: &Path) -> String {
    let full = path.to_string_lossy();
    full.strip_prefix(DEV_PREFIX).unwrap_or(&full).to_string()
}
