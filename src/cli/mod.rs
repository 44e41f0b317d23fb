//! CLI module for the logo-bgremove library
//!
//! This module is only available when the "cli" feature is enabled.

#[path = "main.rs"]
mod main_impl;

pub use main_impl::{main, report_outcome, run, Cli, USAGE};
