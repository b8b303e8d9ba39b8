//! Animated GIF export stepping through the fields of a cascade

use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{DynamicImage, Frame};
use ndarray::ArrayView2;

use crate::algorithm::lattice::Sample;
use crate::io::error::{BurgError, Result};
use crate::io::image::render_field;

/// Collects one rendered frame per field
pub struct StageAnimation {
    frames: Vec<DynamicImage>,
    scale: u32,
}

impl StageAnimation {
    /// Create an empty animation rendering every sample as `scale` x `scale` pixels
    pub const fn new(scale: u32) -> Self {
        Self {
            frames: Vec::new(),
            scale,
        }
    }

    /// Append a frame showing `field` clipped to `[-clip, clip]`
    ///
    /// # Errors
    ///
    /// Returns an error if the field cannot be rendered
    pub fn push<T: Sample>(&mut self, field: &ArrayView2<'_, T>, clip: T) -> Result<()> {
        let gray = render_field(field, clip, self.scale)?;
        self.frames.push(DynamicImage::ImageLuma8(gray));
        Ok(())
    }

    /// Number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Write the frames as a looping GIF
    ///
    /// The last frame is held `final_hold` times longer than the others.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32, final_hold: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(BurgError::InvalidField {
                reason: "No frames captured for animation".to_string(),
            });
        }

        let last = self.frames.len() - 1;
        let frames = self.frames.iter().enumerate().map(|(index, frame)| {
            let delay_ms = if index == last {
                frame_delay_ms.saturating_mul(final_hold.max(1))
            } else {
                frame_delay_ms
            };
            Frame::from_parts(
                frame.to_rgba8(),
                0,
                0,
                image::Delay::from_numer_denom_ms(delay_ms, 1),
            )
        });

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| BurgError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| BurgError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e: image::ImageError| BurgError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };

        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)?;

        Ok(())
    }
}
