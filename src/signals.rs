//! Signal setup.

use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

extern "C" fn exit_now(_signal: libc::c_int) {
    // SAFETY: _exit is async-signal-safe.
    unsafe { libc::_exit(0) }
}

/// Make SIGQUIT end the process with status 0 instead of dumping core.
pub fn exit_on_quit() -> nix::Result<()> {
    let action = SigAction::new(
        SigHandler::Handler(exit_now),
        SaFlags::empty(),
        SigSet::empty(),
    );
    // SAFETY: the handler only calls an async-signal-safe function.
    unsafe { sigaction(Signal::SIGQUIT, &action) }?;
    Ok(())
}
