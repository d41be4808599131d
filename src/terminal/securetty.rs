//! Secure terminal policy.
//!
//! Only a terminal on this list may be handed a fallback shell when the login
//! program cannot be started.

use std::collections::BTreeSet;
use std::path::Path;

use super::device::{TerminalHandle, DEV_PREFIX};

/// Conventional allow-list file, one terminal name per line.
pub const DEFAULT_SECURETTY_PATH: &str = "/etc/securetty";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecureTtys {
    names: BTreeSet<String>,
}

impl SecureTtys {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ttys = Self::default();
        ttys.extend(names);
        ttys
    }

    /// Merge entries from a securetty file. A missing file adds nothing.
    pub fn load_file(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("Loaded secure terminals from {}", path.display());
                self.extend(
                    content
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty() && !line.starts_with('#')),
                );
            }
            Err(e) => log::debug!("No secure terminal list at {}: {}", path.display(), e),
        }
    }

    fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            let name = name.strip_prefix(DEV_PREFIX).unwrap_or(name);
            self.names.insert(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// A terminal is secure if it is listed and is a real character device.
    pub fn permits(&self, terminal: &TerminalHandle) -> bool {
        self.contains(terminal.name()) && terminal.is_char_device()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_listed_char_device_is_secure() {
        let ttys = SecureTtys::new(["null"]);
        assert!(ttys.permits(&TerminalHandle::new("/dev/null")));
    }

    #[test]
    fn test_unlisted_device_is_not_secure() {
        let ttys = SecureTtys::new(["console"]);
        assert!(!ttys.permits(&TerminalHandle::new("/dev/null")));
    }

    #[test]
    fn test_listed_regular_file_is_not_secure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tty9");
        std::fs::write(&path, "").unwrap();
        let name = path.to_string_lossy().into_owned();

        let ttys = SecureTtys::new([name.as_str()]);
        let terminal = TerminalHandle::new(&path);
        assert!(ttys.contains(terminal.name()));
        assert!(!ttys.permits(&terminal));
    }

    #[test]
    fn test_dev_prefix_normalised() {
        let ttys = SecureTtys::new(["/dev/tty1", "ttyS0"]);
        assert!(ttys.contains("tty1"));
        assert!(ttys.contains("ttyS0"));
    }

    #[test]
    fn test_load_file_skips_comments_and_blanks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("securetty");
        std::fs::write(&path, "# local consoles\nconsole\n\n  tty1  \n#tty2\n").unwrap();

        let mut ttys = SecureTtys::default();
        ttys.load_file(&path);
        assert!(ttys.contains("console"));
        assert!(ttys.contains("tty1"));
        assert!(!ttys.contains("tty2"));
    }

    #[test]
    fn test_load_missing_file_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut ttys = SecureTtys::new(["console"]);
        ttys.load_file(&dir.path().join("missing"));
        assert_eq!(ttys, SecureTtys::new(["console"]));
    }
}
