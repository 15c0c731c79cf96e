mod tests;

use std::path::Path;

/// Errors raised while exporting a frame.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The image produced by a render pass: `height * width` RGB byte triplets,
/// row-major with `(0, 0)` the top-left pixel.
pub struct Frame {
    pixels: Vec<u8>,
    height: u32,
    width: u32,
}

impl Frame {
    /// A black frame of the given dimensions.
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            pixels: vec![0; (height * width * 3) as usize],
            height,
            width,
        }
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn pixel(&self, i: u32, j: u32) -> [u8; 3] {
        let offset = ((i * self.width + j) * 3) as usize;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ]
    }

    pub fn set(&mut self, i: u32, j: u32, rgb: [u8; 3]) {
        let offset = ((i * self.width + j) * 3) as usize;
        self.pixels[offset..offset + 3].copy_from_slice(&rgb);
    }

    /// The raw buffer, `height * width * 3` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Writes the frame as a bitmap image.
    pub fn to_bitmap(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        image::save_buffer_with_format(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
            image::ImageFormat::Bmp,
        )?;
        Ok(())
    }

    /// Writes the frame as CSV, one `r,g,b` record per pixel in row-major
    /// order.
    pub fn to_csv(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(path)?;
        for pixel in self.pixels.chunks_exact(3) {
            writer.write_record([
                pixel[0].to_string(),
                pixel[1].to_string(),
                pixel[2].to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
