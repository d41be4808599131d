//! Terminal device handling - the controlling tty, its line speed and input
//!
//! # Structure
//!
//! - [`device`] - Controlling terminal resolution
//! - [`securetty`] - Which terminals may fall back to a root shell
//! - [`line_speed`] - Best-effort baud rate configuration
//! - [`reader`] - Byte-at-a-time username input
//! - [`error`] - Error types for terminal operations

mod device;
mod error;
mod line_speed;
mod reader;
mod securetty;

pub use device::{TerminalHandle, DEV_PREFIX};
pub use error::{LineSpeedError, ReadError, TerminalError};
pub use line_speed::{LineSpeedConfigurer, TermiosSpeed};
pub use reader::{
    LineDiscipline, LineReader, RawStdin, UsernameBuffer, DEFAULT_USERNAME_MAX, DELETE, ERASE,
    LINE_KILL, USERNAME_MAX_LIMIT,
};
pub use securetty::{SecureTtys, DEFAULT_SECURETTY_PATH};
