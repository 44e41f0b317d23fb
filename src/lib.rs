#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unused_self)]

//! # Logo Background Removal
//!
//! Turns the black canvas behind a logo into transparency. Every pixel whose
//! red, green and blue channels are each below 30 becomes fully transparent
//! white `(255, 255, 255, 0)`; every other pixel is kept as is. The result is
//! always written as an RGBA PNG.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logo_bgremove::remove_black_background;
//!
//! let summary = remove_black_background("logo_on_black.jpg", "logo.png")?;
//! println!(
//!     "{}x{}: {} pixels made transparent",
//!     summary.dimensions.0,
//!     summary.dimensions.1,
//!     summary.keyed_pixels()
//! );
//! # Ok::<(), logo_bgremove::ProcessingFailure>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `process-logo` binary and tracing subscriber setup
//! - `webp-support` (default): WebP input decoding

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod keying;
pub mod processor;
pub mod services;
#[cfg(feature = "cli")]
pub mod tracing_config;
pub mod types;

use std::path::Path;

pub use error::{ProcessingFailure, Result};
pub use keying::{
    is_background_black, key_out_black, KeyingStats, BLACK_THRESHOLD, TRANSPARENT_WHITE,
};
pub use processor::BlackBackgroundRemover;
pub use services::ImageIOService;
pub use types::{ProcessingSummary, ProcessingTimings};

#[cfg(feature = "cli")]
pub use tracing_config::{TracingConfig, TracingFormat};

/// Remove the black background from the image at `input_path` and save the
/// result to `output_path` as PNG.
///
/// Any decode, encode or filesystem failure is returned as a
/// [`ProcessingFailure`] carrying the underlying cause.
pub fn remove_black_background<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<ProcessingSummary> {
    BlackBackgroundRemover::new().process_file(input_path, output_path)
}
