//! CLI argument parsing with clap.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use crate::config::GettyConfig;
use crate::speed::LineSpeed;

/// Parse a line speed from the speed table.
pub fn parse_speed(s: &str) -> Result<LineSpeed, String> {
    s.parse::<LineSpeed>().map_err(|e| e.to_string())
}

/// Exit status for a failed parse: 0 after help or version, 1 for usage errors.
pub fn exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Show a banner on the terminal on stdin, read a username and run login
#[derive(Parser, Debug)]
#[command(name = "getty")]
#[command(version, about = "Initialize and serve a login terminal", long_about = None)]
pub struct Args {
    /// Line speed in bits per second (e.g. 9600, 38400, 115200)
    #[arg(value_parser = parse_speed)]
    pub speed: Option<LineSpeed>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Banner template file (default: /etc/issue)
    #[arg(long)]
    pub issue: Option<PathBuf>,

    /// Program to run with the username (default: /bin/login)
    #[arg(long)]
    pub login: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut GettyConfig) {
        if let Some(speed) = self.speed {
            config.line.speed = speed.bps();
        }
        if let Some(issue) = &self.issue {
            config.banner.issue_file = issue.clone();
        }
        if let Some(login) = &self.login {
            config.login.program = login.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["getty"]);
        assert!(args.speed.is_none());
        assert!(args.config.is_none());
        assert!(args.issue.is_none());
        assert!(args.login.is_none());
    }

    #[test]
    fn test_args_speed_9600() {
        let args = Args::parse_from(["getty", "9600"]);
        assert_eq!(args.speed, Some(LineSpeed::from_bps(9600).unwrap()));
    }

    #[test]
    fn test_args_unlisted_speed_rejected() {
        let err = Args::try_parse_from(["getty", "9601"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Invalid TTY speed"));
    }

    #[test]
    fn test_args_help_flag() {
        let err = Args::try_parse_from(["getty", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_exit_code_unlisted_speed_is_failure() {
        let err = Args::try_parse_from(["getty", "9601"]).unwrap_err();
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_exit_code_help_and_version_succeed() {
        let help = Args::try_parse_from(["getty", "-h"]).unwrap_err();
        assert_eq!(exit_code(&help), 0);
        let version = Args::try_parse_from(["getty", "--version"]).unwrap_err();
        assert_eq!(exit_code(&version), 0);
    }

    #[test]
    fn test_exit_code_unknown_flag_is_failure() {
        let err = Args::try_parse_from(["getty", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["getty", "-c", "/tmp/getty.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/getty.toml")));
    }

    #[test]
    fn test_args_combined_options() {
        let args = Args::parse_from([
            "getty",
            "--issue",
            "/etc/issue.net",
            "--login",
            "/usr/bin/login",
            "115200",
        ]);
        assert_eq!(args.issue, Some(PathBuf::from("/etc/issue.net")));
        assert_eq!(args.login, Some(PathBuf::from("/usr/bin/login")));
        assert_eq!(args.speed.map(|s| s.bps()), Some(115200));
    }

    #[test]
    fn test_apply_overrides() {
        let args = Args::parse_from(["getty", "--login", "/usr/bin/login", "9600"]);
        let mut config = GettyConfig::default();
        args.apply(&mut config);

        assert_eq!(config.line.speed, 9600);
        assert_eq!(config.login.program, PathBuf::from("/usr/bin/login"));
        assert_eq!(config.banner.issue_file, PathBuf::from("/etc/issue"));
    }

    #[test]
    fn test_apply_without_overrides_keeps_config() {
        let args = Args::parse_from(["getty"]);
        let mut config = GettyConfig::default();
        config.line.speed = 19200;
        args.apply(&mut config);
        assert_eq!(config.line.speed, 19200);
    }
}
