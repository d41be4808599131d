//! Immutable per-session settings

use std::path::PathBuf;

use crate::banner::Banner;
use crate::config::GettyConfig;
use crate::speed::{LineSpeed, SpeedError};
use crate::terminal::{LineDiscipline, SecureTtys};

/// Everything a [`Session`](super::Session) needs besides its I/O and
/// collaborators. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub banner: Banner,
    pub speed: LineSpeed,
    pub discipline: LineDiscipline,
    pub login: PathBuf,
    pub fallback_shell: PathBuf,
    pub secure_ttys: SecureTtys,
}

impl SessionSettings {
    /// Resolve a loaded config, reading the securetty file if one is named.
    pub fn from_config(config: &GettyConfig) -> Result<Self, SpeedError> {
        let mut secure_ttys = SecureTtys::new(&config.securetty.allow);
        if let Some(path) = &config.securetty.file {
            secure_ttys.load_file(path);
        }

        Ok(Self {
            banner: Banner::new(&config.banner.issue_file, config.banner.prompt.as_str()),
            speed: LineSpeed::from_bps(config.line.speed)?,
            discipline: LineDiscipline {
                capacity: config.line.username_max,
                line_kill: config.line.line_kill,
                erase: config.line.erase,
            },
            login: config.login.program.clone(),
            fallback_shell: config.login.fallback_shell.clone(),
            secure_ttys,
        })
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            banner: Banner::default(),
            speed: LineSpeed::default(),
            discipline: LineDiscipline::default(),
            login: PathBuf::from(crate::config::DEFAULT_LOGIN),
            fallback_shell: PathBuf::from(crate::config::DEFAULT_SHELL),
            secure_ttys: SecureTtys::default(),
        }
    }
}
