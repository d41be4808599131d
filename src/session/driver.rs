//! Prompting / handoff state machine.

use std::convert::Infallible;
use std::io::{Read, Write};

use super::error::SessionError;
use super::handoff::{hand_off, ExecLauncher, Launcher};
use super::settings::SessionSettings;
use crate::host_info::{HostInfoProvider, UnameProvider};
use crate::terminal::{
    LineReader, LineSpeedConfigurer, TerminalHandle, TermiosSpeed, UsernameBuffer,
};

/// Where the session is in its single login cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Showing the banner and waiting for a username
    Prompting,
    /// A username was entered; replace the process
    Handoff(UsernameBuffer),
}

/// One terminal, one login.
pub struct Session<R, W> {
    settings: SessionSettings,
    terminal: TerminalHandle,
    reader: LineReader<R>,
    output: W,
    host: Box<dyn HostInfoProvider>,
    line: Box<dyn LineSpeedConfigurer>,
    launcher: Box<dyn Launcher>,
}

impl<R: Read, W: Write> Session<R, W> {
    /// Create a session that talks to the real host: `uname`, termios and
    /// `execv`.
    pub fn new(settings: SessionSettings, terminal: TerminalHandle, input: R, output: W) -> Self {
        let reader = LineReader::new(input, terminal.name(), settings.discipline);
        Self {
            settings,
            terminal,
            reader,
            output,
            host: Box::new(UnameProvider),
            line: Box::new(TermiosSpeed),
            launcher: Box::new(ExecLauncher),
        }
    }

    pub fn with_host_info(mut self, host: impl HostInfoProvider + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    pub fn with_line_speed(mut self, line: impl LineSpeedConfigurer + 'static) -> Self {
        self.line = Box::new(line);
        self
    }

    pub fn with_launcher(mut self, launcher: impl Launcher + 'static) -> Self {
        self.launcher = Box::new(launcher);
        self
    }

    /// Run until the process is replaced.
    ///
    /// Success never returns. The error says why the session ended instead:
    /// hang-up, a read failure, or no program could be started.
    pub fn run(mut self) -> Result<Infallible, SessionError> {
        let mut state = State::Prompting;
        loop {
            state = self.step(state)?;
        }
    }

    /// Advance one transition.
    pub fn step(&mut self, state: State) -> Result<State, SessionError> {
        match state {
            State::Prompting => {
                let name = self.prompt()?;
                if name.is_empty() {
                    log::debug!("Blank line on {}, prompting again", self.terminal.name());
                    Ok(State::Prompting)
                } else {
                    Ok(State::Handoff(name))
                }
            }
            State::Handoff(name) => {
                self.output.flush()?;
                let secure = self.settings.secure_ttys.permits(&self.terminal);
                match hand_off(
                    self.launcher.as_mut(),
                    &self.settings.login,
                    &self.settings.fallback_shell,
                    secure,
                    &name,
                    &mut self.output,
                ) {
                    Ok(never) => match never {},
                    Err(e) => Err(e.into()),
                }
            }
        }
    }

    /// Configure the line, show the banner and read one line.
    fn prompt(&mut self) -> Result<UsernameBuffer, SessionError> {
        if let Err(e) = self.line.apply(self.settings.speed) {
            log::warn!("{}: {}", self.terminal.name(), e);
        }

        let host = self.host.snapshot();
        self.settings
            .banner
            .show(&host, self.terminal.name(), &mut self.output)?;

        Ok(self.reader.read_username(&mut self.output)?)
    }
}
