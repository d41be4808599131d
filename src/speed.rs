//! Line speed table.
//!
//! Maps a rate in bits per second, as typed on the command line or in the
//! config file, onto the termios baud constant the kernel understands.

use nix::sys::termios::BaudRate;
use std::fmt;
use std::str::FromStr;

/// Speed used when neither the command line nor the config file names one.
pub const DEFAULT_SPEED: u32 = 38400;

/// Accepted rates. `B0` means "hang up" to the kernel and is never accepted.
const SPEED_TABLE: &[(u32, BaudRate)] = &[
    (50, BaudRate::B50),
    (75, BaudRate::B75),
    (110, BaudRate::B110),
    (134, BaudRate::B134),
    (150, BaudRate::B150),
    (200, BaudRate::B200),
    (300, BaudRate::B300),
    (600, BaudRate::B600),
    (1200, BaudRate::B1200),
    (1800, BaudRate::B1800),
    (2400, BaudRate::B2400),
    (4800, BaudRate::B4800),
    (9600, BaudRate::B9600),
    (19200, BaudRate::B19200),
    (38400, BaudRate::B38400),
    (57600, BaudRate::B57600),
    (115200, BaudRate::B115200),
    (230400, BaudRate::B230400),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (460800, BaudRate::B460800),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (500000, BaudRate::B500000),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (576000, BaudRate::B576000),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (921600, BaudRate::B921600),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (1000000, BaudRate::B1000000),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (1152000, BaudRate::B1152000),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (1500000, BaudRate::B1500000),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (2000000, BaudRate::B2000000),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (2500000, BaudRate::B2500000),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (3000000, BaudRate::B3000000),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (3500000, BaudRate::B3500000),
    #[cfg(any(target_os = "linux", target_os = "android"))]
    (4000000, BaudRate::B4000000),
];

/// A validated entry from the speed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpeed {
    bps: u32,
    baud: BaudRate,
}

impl LineSpeed {
    /// Look up a rate in bits per second.
    pub fn from_bps(bps: u32) -> Result<Self, SpeedError> {
        SPEED_TABLE
            .iter()
            .find(|(rate, _)| *rate == bps)
            .map(|&(bps, baud)| LineSpeed { bps, baud })
            .ok_or_else(|| SpeedError::Unsupported(bps.to_string()))
    }

    pub fn bps(&self) -> u32 {
        self.bps
    }

    pub fn baud_rate(&self) -> BaudRate {
        self.baud
    }
}

impl Default for LineSpeed {
    fn default() -> Self {
        LineSpeed {
            bps: DEFAULT_SPEED,
            baud: BaudRate::B38400,
        }
    }
}

impl FromStr for LineSpeed {
    type Err = SpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bps: u32 = s
            .trim()
            .parse()
            .map_err(|_| SpeedError::Unsupported(s.to_string()))?;
        LineSpeed::from_bps(bps).map_err(|_| SpeedError::Unsupported(s.to_string()))
    }
}

impl fmt::Display for LineSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.bps)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SpeedError {
    #[error("Invalid TTY speed '{0}'")]
    Unsupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_9600() {
        let speed: LineSpeed = "9600".parse().unwrap();
        assert_eq!(speed.bps(), 9600);
        assert_eq!(speed.baud_rate(), BaudRate::B9600);
    }

    #[test]
    fn test_parse_unlisted_rate_rejected() {
        let err = "9601".parse::<LineSpeed>().unwrap_err();
        assert_eq!(err, SpeedError::Unsupported("9601".to_string()));
    }

    #[test]
    fn test_zero_is_not_a_speed() {
        assert!("0".parse::<LineSpeed>().is_err());
        assert!(LineSpeed::from_bps(0).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!("fast".parse::<LineSpeed>().is_err());
        assert!("".parse::<LineSpeed>().is_err());
        assert!("-9600".parse::<LineSpeed>().is_err());
    }

    #[test]
    fn test_default_is_38400() {
        let speed = LineSpeed::default();
        assert_eq!(speed.bps(), DEFAULT_SPEED);
        assert_eq!(speed, LineSpeed::from_bps(38400).unwrap());
    }

    #[test]
    fn test_table_is_ascending() {
        let rates: Vec<u32> = SPEED_TABLE.iter().map(|(bps, _)| *bps).collect();
        assert!(rates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(rates.first(), Some(&50));
    }

    #[test]
    fn test_display() {
        assert_eq!(LineSpeed::from_bps(115200).unwrap().to_string(), "115200 bps");
    }
}
