//! Process image replacement - login, or a shell on a secure terminal

use nix::errno::Errno;
use std::convert::Infallible;
use std::ffi::{CStr, CString};
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use super::error::HandoffError;
use crate::terminal::UsernameBuffer;

/// Replaces the running program.
pub trait Launcher {
    /// `exec` `program` with `argv`. Returns only if the exec failed.
    fn exec(&mut self, program: &CStr, argv: &[CString]) -> Result<Infallible, Errno>;
}

/// `execv(2)`, without a `PATH` search.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecLauncher;

impl Launcher for ExecLauncher {
    fn exec(&mut self, program: &CStr, argv: &[CString]) -> Result<Infallible, Errno> {
        nix::unistd::execv(program, argv)
    }
}

/// Start `login` with the username as its only argument.
///
/// If that fails and `secure` is set, start `shell` instead. Output is written
/// to `out` so the failure is visible on the terminal.
pub(crate) fn hand_off<L, W>(
    launcher: &mut L,
    login: &Path,
    shell: &Path,
    secure: bool,
    username: &UsernameBuffer,
    out: &mut W,
) -> Result<Infallible, HandoffError>
where
    L: Launcher + ?Sized,
    W: Write + ?Sized,
{
    let login_c = c_path(login)?;
    log::debug!(
        "Handing off to {} for {}",
        login.display(),
        username.to_string_lossy()
    );

    let login_error = match launcher.exec(&login_c, &[login_c.clone(), username.as_c_string()]) {
        Ok(never) => match never {},
        Err(e) => e,
    };

    log::warn!("exec {} failed: {}", login.display(), login_error);
    let _ = writeln!(
        out,
        "getty: failed exec {}, attempting fallback to {} ...",
        login.display(),
        shell.display()
    );
    let _ = out.flush();

    if !secure {
        return Err(HandoffError::Login {
            program: login.to_path_buf(),
            source: login_error,
        });
    }

    let shell_c = c_path(shell)?;
    match launcher.exec(&shell_c, &[shell_c.clone()]) {
        Ok(never) => match never {},
        Err(source) => Err(HandoffError::Fallback {
            login: login.to_path_buf(),
            login_error,
            shell: shell.to_path_buf(),
            source,
        }),
    }
}

fn c_path(path: &Path) -> Result<CString, HandoffError> {
    CString::new(path.as_os_str().as_bytes())
        .map_err(|_| HandoffError::InvalidPath(path.to_path_buf()))
}
