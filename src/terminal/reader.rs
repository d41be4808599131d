//! Byte-at-a-time username input.
//!
//! The terminal is read one byte per `read(2)` so that nothing typed after the
//! username is swallowed by a userspace buffer before the login program runs.

use std::ffi::CString;
use std::io::{self, Read, Write};
use std::os::fd::AsFd;

use super::error::ReadError;

/// Default buffer size: 29 usable bytes plus the terminator.
pub const DEFAULT_USERNAME_MAX: usize = 30;
/// Largest buffer size accepted from configuration.
pub const USERNAME_MAX_LIMIT: usize = 256;

/// `Ctrl-U`, erases the whole line.
pub const LINE_KILL: u8 = 0x15;
/// `Ctrl-H`, erases one character.
pub const ERASE: u8 = 0x08;
/// `DEL`, erases one character.
pub const DELETE: u8 = 0x7f;

const RUBOUT: &[u8] = b"\x08 \x08";

/// Unbuffered standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawStdin;

impl Read for RawStdin {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(nix::unistd::read(io::stdin().as_fd(), buf)?)
    }
}

/// Fixed-capacity username storage.
///
/// Holds at most `capacity - 1` bytes, leaving room for the terminator added
/// by [`UsernameBuffer::as_c_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl UsernameBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: Vec::new(),
            capacity,
        }
    }

    /// Store a byte. Returns false, leaving the buffer unchanged, when full.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.bytes.len() + 1 < self.capacity {
            self.bytes.push(byte);
            true
        } else {
            false
        }
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.bytes.pop()
    }

    /// Empty the buffer, returning how many bytes were dropped.
    pub fn clear(&mut self) -> usize {
        let n = self.bytes.len();
        self.bytes.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// NUL-terminated copy for `exec`.
    pub fn as_c_string(&self) -> CString {
        // push() never stores NUL
        CString::new(self.bytes.clone()).unwrap_or_default()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Editing behaviour while a username is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDiscipline {
    /// Buffer size including the terminator
    pub capacity: usize,
    /// Honour `Ctrl-U`
    pub line_kill: bool,
    /// Honour `Ctrl-H` and `DEL`
    pub erase: bool,
}

impl Default for LineDiscipline {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_USERNAME_MAX,
            line_kill: true,
            erase: true,
        }
    }
}

/// Reads usernames from the terminal.
pub struct LineReader<R> {
    input: R,
    tty: String,
    discipline: LineDiscipline,
}

impl<R: Read> LineReader<R> {
    /// `tty` is the short terminal name used in error messages.
    pub fn new(input: R, tty: impl Into<String>, discipline: LineDiscipline) -> Self {
        Self {
            input,
            tty: tty.into(),
            discipline,
        }
    }

    /// Block until one byte arrives.
    ///
    /// End of input writes a single newline to `out` and reports
    /// [`ReadError::HangUp`].
    pub fn read_char<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<u8, ReadError> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => {
                    out.write_all(b"\n")?;
                    out.flush()?;
                    return Err(ReadError::HangUp);
                }
                Ok(_) => return Ok(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(ReadError::Io {
                        tty: self.tty.clone(),
                        source,
                    })
                }
            }
        }
    }

    /// Collect one line of input into a fresh [`UsernameBuffer`].
    ///
    /// Bytes past the buffer's capacity are read and dropped. The returned
    /// buffer may be empty if the user just pressed enter.
    pub fn read_username<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
    ) -> Result<UsernameBuffer, ReadError> {
        let mut name = UsernameBuffer::new(self.discipline.capacity);

        loop {
            match self.read_char(out)? {
                b'\n' => break,
                LINE_KILL if self.discipline.line_kill => {
                    for _ in 0..name.clear() {
                        out.write_all(RUBOUT)?;
                    }
                    out.flush()?;
                }
                ERASE | DELETE if self.discipline.erase => {
                    if name.pop().is_some() {
                        out.write_all(RUBOUT)?;
                        out.flush()?;
                    }
                }
                0 => {}
                byte => {
                    name.push(byte);
                }
            }
        }

        Ok(name)
    }
}
