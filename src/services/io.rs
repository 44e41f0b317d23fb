//! Image I/O operations service
//!
//! Decoding and PNG encoding live here so the keying logic never touches the
//! filesystem.

use crate::error::{ProcessingFailure, Result};
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Service for handling image file input/output operations
pub struct ImageIOService;

impl ImageIOService {
    /// Load an image from a file path
    ///
    /// # Examples
    /// ```rust,no_run
    /// use logo_bgremove::services::ImageIOService;
    ///
    /// let image = ImageIOService::load_image("logo.jpg")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
        Self::load_image_with_format(path).map(|(image, _)| image)
    }

    /// Load an image and report the format it was decoded as
    ///
    /// The format is sniffed from the file content first. When the content is
    /// not recognised the extension decides, so a mis-named file still loads.
    pub fn load_image_with_format<P: AsRef<Path>>(
        path: P,
    ) -> Result<(DynamicImage, Option<ImageFormat>)> {
        let path_ref = path.as_ref();

        let reader = ImageReader::open(path_ref)
            .map_err(|e| ProcessingFailure::file_io_error("open image file", path_ref, &e))?
            .with_guessed_format()
            .map_err(|e| ProcessingFailure::file_io_error("read image header", path_ref, &e))?;

        let format = reader.format();
        match format {
            Some(detected) => log::debug!(
                "Decoding {} as {:?}",
                path_ref.display(),
                detected
            ),
            None => log::debug!(
                "No format detected for {}, decoder will reject it",
                path_ref.display()
            ),
        }

        let image = reader
            .decode()
            .map_err(|e| ProcessingFailure::image_load_error(path_ref, &e))?;

        Ok((image, format))
    }

    /// Load an image from bytes
    ///
    /// # Examples
    /// ```rust,no_run
    /// use logo_bgremove::services::ImageIOService;
    ///
    /// let image_data = std::fs::read("logo.png")?;
    /// let image = ImageIOService::load_from_bytes(&image_data)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load_from_bytes(bytes: &[u8]) -> Result<DynamicImage> {
        image::load_from_memory(bytes).map_err(|e| {
            ProcessingFailure::processing_stage_error(
                "image decode",
                &e.to_string(),
                Some(&format!("in-memory buffer, {} bytes", bytes.len())),
            )
        })
    }

    /// Write an RGBA image to `path` as PNG, overwriting any existing file.
    ///
    /// The parent directory must already exist.
    pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
        let path_ref = path.as_ref();

        image
            .save_with_format(path_ref, ImageFormat::Png)
            .map_err(|e| ProcessingFailure::image_save_error(path_ref, &e))?;

        log::debug!(
            "Wrote {}x{} RGBA PNG to {}",
            image.width(),
            image.height(),
            path_ref.display()
        );
        Ok(())
    }

    /// Encode an RGBA image as PNG bytes
    pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        image.write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)?;
        Ok(buffer)
    }

    /// Check if a file path has an extension one of the compiled decoders handles
    pub fn is_supported_format<P: AsRef<Path>>(path: P) -> bool {
        let Some(ext) = path.as_ref().extension().and_then(|s| s.to_str()) else {
            return false;
        };

        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "tiff" | "tif" => true,
            "webp" => cfg!(feature = "webp-support"),
            _ => false,
        }
    }
}
