//! Result types returned by successful conversions

use crate::keying::KeyingStats;
use image::ImageFormat;
use std::path::PathBuf;

/// Wall-clock time spent in each stage, in milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingTimings {
    /// Reading and decoding the input
    pub decode_ms: u64,
    /// RGBA conversion and the keying pass
    pub keying_ms: u64,
    /// PNG encoding and writing the output
    pub encode_ms: u64,
}

impl ProcessingTimings {
    /// Sum of all stages
    pub fn total_ms(&self) -> u64 {
        self.decode_ms
            .saturating_add(self.keying_ms)
            .saturating_add(self.encode_ms)
    }
}

/// What a successful file conversion did
#[derive(Debug, Clone)]
pub struct ProcessingSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Format the input was decoded as, if it could be determined
    pub input_format: Option<ImageFormat>,
    /// Width and height, identical for input and output
    pub dimensions: (u32, u32),
    pub stats: KeyingStats,
    pub timings: ProcessingTimings,
}

impl ProcessingSummary {
    /// Number of pixels turned transparent
    pub fn keyed_pixels(&self) -> u64 {
        self.stats.keyed_pixels
    }

    /// Number of pixels in the image
    pub fn total_pixels(&self) -> u64 {
        self.stats.total_pixels
    }
}
