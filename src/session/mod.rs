//! Login session - prompt for a username, then hand the terminal to login
//!
//! # Structure
//!
//! - [`driver`] - Prompting / handoff state machine
//! - [`handoff`] - Process image replacement
//! - [`settings`] - Immutable per-session settings
//! - [`error`] - Error types for session operations

mod driver;
mod error;
mod handoff;
mod settings;

pub use driver::{Session, State};
pub use error::{HandoffError, SessionError};
pub use handoff::{ExecLauncher, Launcher};
pub use settings::SessionSettings;
