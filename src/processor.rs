//! Black background removal processor
//!
//! Ties the I/O service and the keying pass together: decode, convert to
//! RGBA8, key out black, encode as PNG.

use crate::{
    error::Result,
    keying::{key_out_black, KeyingStats},
    services::ImageIOService,
    types::{ProcessingSummary, ProcessingTimings},
};
use image::{DynamicImage, RgbaImage};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;
use tracing::instrument;

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Converts black-canvas images into transparent PNGs
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackBackgroundRemover;

impl BlackBackgroundRemover {
    pub fn new() -> Self {
        Self
    }

    /// Process an image file and write the result to `output_path` as PNG
    ///
    /// The output is written whatever the input format was, replacing any
    /// existing file. No directories are created.
    ///
    /// # Errors
    ///
    /// Returns `ProcessingFailure` for:
    /// - Missing, unreadable, corrupt or unsupported input files
    /// - PNG encoding or write failures at the output path
    #[instrument(
        skip(self, input_path, output_path),
        fields(
            input = %input_path.as_ref().display(),
            output = %output_path.as_ref().display()
        )
    )]
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<ProcessingSummary> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();
        let mut timings = ProcessingTimings::default();

        if !ImageIOService::is_supported_format(input_path) {
            debug!(
                "Unrecognised extension on {}, relying on content detection",
                input_path.display()
            );
        }

        let decode_start = Instant::now();
        let (image, input_format) = ImageIOService::load_image_with_format(input_path)?;
        timings.decode_ms = elapsed_ms(decode_start);
        debug!(
            "Image decoded: {}x{} {:?} in {}ms",
            image.width(),
            image.height(),
            image.color(),
            timings.decode_ms
        );

        let keying_start = Instant::now();
        let (rgba, stats) = self.process_image(&image);
        timings.keying_ms = elapsed_ms(keying_start);

        let encode_start = Instant::now();
        ImageIOService::save_png(&rgba, output_path)?;
        timings.encode_ms = elapsed_ms(encode_start);

        info!(
            "Keyed {} of {} pixels ({:.1}%) in {}ms",
            stats.keyed_pixels,
            stats.total_pixels,
            stats.keyed_ratio() * 100.0,
            timings.total_ms()
        );

        Ok(ProcessingSummary {
            input_path: input_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            input_format,
            dimensions: rgba.dimensions(),
            stats,
            timings,
        })
    }

    /// Convert a decoded image to RGBA8 and key out its black pixels
    ///
    /// Inputs without alpha become opaque; existing alpha is carried through
    /// the conversion. Width, height and pixel order are preserved.
    pub fn process_image(&self, image: &DynamicImage) -> (RgbaImage, KeyingStats) {
        let mut rgba = image.to_rgba8();
        let stats = key_out_black(&mut rgba);
        tracing::trace!(
            keyed = stats.keyed_pixels,
            total = stats.total_pixels,
            "keying pass complete"
        );
        (rgba, stats)
    }

    /// Decode image bytes, key out black and return the PNG encoding
    ///
    /// # Errors
    ///
    /// Returns `ProcessingFailure` when the bytes cannot be decoded or the
    /// result cannot be encoded.
    pub fn process_bytes(&self, image_bytes: &[u8]) -> Result<Vec<u8>> {
        let image = ImageIOService::load_from_bytes(image_bytes)?;
        let (rgba, _) = self.process_image(&image);
        ImageIOService::encode_png(&rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keying::TRANSPARENT_WHITE;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba};

    #[test]
    fn test_process_image_rgb_scenario() {
        let mut rgb = RgbImage::new(2, 1);
        rgb.put_pixel(0, 0, Rgb([0, 0, 0]));
        rgb.put_pixel(1, 0, Rgb([200, 200, 200]));

        let (rgba, stats) = BlackBackgroundRemover::new().process_image(&DynamicImage::ImageRgb8(rgb));

        assert_eq!(rgba.dimensions(), (2, 1));
        assert_eq!(*rgba.get_pixel(0, 0), TRANSPARENT_WHITE);
        assert_eq!(*rgba.get_pixel(1, 0), Rgba([200, 200, 200, 255]));
        assert_eq!(stats.keyed_pixels, 1);
    }

    #[test]
    fn test_process_image_grayscale_input() {
        let gray = GrayImage::from_fn(3, 1, |x, _| Luma([[10, 29, 30][x as usize]]));

        let (rgba, _) = BlackBackgroundRemover::new().process_image(&DynamicImage::ImageLuma8(gray));

        assert_eq!(*rgba.get_pixel(0, 0), TRANSPARENT_WHITE);
        assert_eq!(*rgba.get_pixel(1, 0), TRANSPARENT_WHITE);
        assert_eq!(*rgba.get_pixel(2, 0), Rgba([30, 30, 30, 255]));
    }

    #[test]
    fn test_process_image_keeps_existing_alpha_on_non_black() {
        let rgba_in = RgbaImage::from_raw(2, 1, vec![100, 50, 25, 77, 5, 5, 5, 12]).unwrap();

        let (rgba, _) =
            BlackBackgroundRemover::new().process_image(&DynamicImage::ImageRgba8(rgba_in));

        assert_eq!(*rgba.get_pixel(0, 0), Rgba([100, 50, 25, 77]));
        assert_eq!(*rgba.get_pixel(1, 0), TRANSPARENT_WHITE);
    }

    #[test]
    fn test_process_bytes_returns_png() {
        let source = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        let mut jpeg = Vec::new();
        DynamicImage::ImageRgb8(source)
            .write_to(&mut std::io::Cursor::new(&mut jpeg), image::ImageFormat::Jpeg)
            .unwrap();

        let png = BlackBackgroundRemover::new().process_bytes(&jpeg).unwrap();

        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert!(decoded.pixels().all(|p| *p == TRANSPARENT_WHITE));
    }

    #[test]
    fn test_process_bytes_rejects_garbage() {
        assert!(BlackBackgroundRemover::new().process_bytes(b"not an image").is_err());
    }
}
