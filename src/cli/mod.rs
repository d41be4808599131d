//! Command-line interface definitions and helpers.

mod args;

pub use args::{exit_code, parse_speed, Args};
