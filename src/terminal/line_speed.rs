//! Best-effort line speed configuration

use nix::sys::termios::{cfsetispeed, cfsetospeed, tcgetattr, tcsetattr, SetArg};
use std::io;
use std::os::fd::AsFd;

use super::error::LineSpeedError;
use crate::speed::LineSpeed;

/// Applies a baud rate to the terminal.
///
/// Callers log failures and carry on; a wrong speed is better than no prompt.
pub trait LineSpeedConfigurer {
    fn apply(&mut self, speed: LineSpeed) -> Result<(), LineSpeedError>;
}

/// Sets input and output speed on stdin through termios, flushing pending
/// input like `TCSAFLUSH` does.
#[derive(Debug, Default, Clone, Copy)]
pub struct TermiosSpeed;

impl LineSpeedConfigurer for TermiosSpeed {
    fn apply(&mut self, speed: LineSpeed) -> Result<(), LineSpeedError> {
        let stdin = io::stdin();
        let fd = stdin.as_fd();

        let mut termios = tcgetattr(fd).map_err(LineSpeedError::GetAttr)?;
        cfsetispeed(&mut termios, speed.baud_rate()).map_err(LineSpeedError::SetSpeed)?;
        cfsetospeed(&mut termios, speed.baud_rate()).map_err(LineSpeedError::SetSpeed)?;
        tcsetattr(fd, SetArg::TCSAFLUSH, &termios).map_err(LineSpeedError::SetAttr)?;

        log::debug!("Line speed set to {}", speed);
        Ok(())
    }
}
