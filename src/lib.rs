//! getty library crate.
//!
//! Serves one login terminal: sets the line speed, shows the `/etc/issue`
//! banner, reads a username and replaces itself with `login`.

pub mod banner;
pub mod cli;
pub mod config;
pub mod host_info;
pub mod session;
pub mod signals;
pub mod speed;
pub mod terminal;
