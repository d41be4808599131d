//! Terminal error types

use nix::errno::Errno;
use std::io;

/// Stdin is not attached to a terminal we can name.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("unknown TTY: {0}")]
    NotATty(#[source] Errno),
}

/// Failure to apply a line speed. Never fatal to the session.
#[derive(Debug, thiserror::Error)]
pub enum LineSpeedError {
    #[error("cannot read terminal attributes: {0}")]
    GetAttr(#[source] Errno),
    #[error("cannot set line speed: {0}")]
    SetSpeed(#[source] Errno),
    #[error("cannot apply terminal attributes: {0}")]
    SetAttr(#[source] Errno),
}

/// Ways reading the username can end without a username.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// End of input; the line was hung up.
    #[error("hang up")]
    HangUp,
    #[error("{tty}: read error: {source}")]
    Io {
        tty: String,
        #[source]
        source: io::Error,
    },
    /// Echoing to the terminal failed
    #[error("terminal write failed: {0}")]
    Echo(#[from] io::Error),
}
