//! Host identification for banner substitution.

use nix::sys::utsname::uname;
use std::ffi::OsStr;

/// Snapshot of `uname(2)` taken once per banner render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInfo {
    pub system_name: String,
    pub node_name: String,
    pub release: String,
    pub version: String,
    pub machine: String,
    /// NIS domain name, only reported on Linux and Android.
    pub domain: Option<String>,
}

/// Source of [`HostInfo`] snapshots.
pub trait HostInfoProvider {
    fn snapshot(&self) -> HostInfo;
}

/// Reads the running kernel's identification.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnameProvider;

impl HostInfoProvider for UnameProvider {
    fn snapshot(&self) -> HostInfo {
        match uname() {
            Ok(uts) => HostInfo {
                system_name: lossy(uts.sysname()),
                node_name: lossy(uts.nodename()),
                release: lossy(uts.release()),
                version: lossy(uts.version()),
                machine: lossy(uts.machine()),
                #[cfg(any(target_os = "linux", target_os = "android"))]
                domain: Some(lossy(uts.domainname())),
                #[cfg(not(any(target_os = "linux", target_os = "android")))]
                domain: None,
            },
            Err(e) => {
                log::warn!("uname failed, banner fields will be empty: {}", e);
                HostInfo::default()
            }
        }
    }
}

/// A fixed snapshot, handy when the banner must not depend on the host.
impl HostInfoProvider for HostInfo {
    fn snapshot(&self) -> HostInfo {
        self.clone()
    }
}

fn lossy(s: &OsStr) -> String {
    s.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uname_reports_system_name() {
        let info = UnameProvider.snapshot();
        assert!(!info.system_name.is_empty());
        assert!(!info.machine.is_empty());
    }

    #[test]
    fn test_fixed_snapshot_is_returned_verbatim() {
        let fixed = HostInfo {
            system_name: "TestOS".to_string(),
            node_name: "box".to_string(),
            release: "1.0.0".to_string(),
            version: "1.0".to_string(),
            machine: "x86_64".to_string(),
            domain: None,
        };
        assert_eq!(fixed.snapshot(), fixed);
    }
}
