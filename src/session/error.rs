//! Session error types

use nix::errno::Errno;
use std::io;
use std::path::PathBuf;

use crate::terminal::ReadError;

/// Neither the login program nor the fallback shell could be started.
#[derive(Debug, thiserror::Error)]
pub enum HandoffError {
    #[error("failed exec {}: {source}", .program.display())]
    Login {
        program: PathBuf,
        #[source]
        source: Errno,
    },
    #[error("failed exec {} ({login_error}) and fallback {}: {source}", .login.display(), .shell.display())]
    Fallback {
        login: PathBuf,
        login_error: Errno,
        shell: PathBuf,
        #[source]
        source: Errno,
    },
    #[error("program path {} contains a NUL byte", .0.display())]
    InvalidPath(PathBuf),
}

/// Why a session ended without replacing the process.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Handoff(#[from] HandoffError),
    #[error("terminal write failed: {0}")]
    Output(#[from] io::Error),
}

impl SessionError {
    /// Process exit status for this outcome. A hang-up is a normal exit.
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionError::Read(ReadError::HangUp) => 0,
            _ => 1,
        }
    }

    pub fn is_hang_up(&self) -> bool {
        matches!(self, SessionError::Read(ReadError::HangUp))
    }
}
