//! Gray-scale PNG rendering, export and loading of sample fields
//!
//! Images follow the plotting orientation of the reference figures: axis 1
//! runs down the image and axis 2 runs across, so an `n1` x `n2` field
//! becomes an image `n2` pixels wide and `n1` pixels tall.

use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::{Array2, ArrayView2};

use crate::algorithm::lattice::Sample;
use crate::io::error::{BurgError, Result, invalid_parameter};
use crate::spatial::field::{dimensions, validate_field};

const MID_GRAY: u8 = 128;

// Maps [-clip, clip] onto [0, 255]; degenerate clips render mid-gray
fn gray_level<T: Sample>(value: T, clip: T) -> u8 {
    let (Some(value), Some(clip)) = (value.to_f64(), clip.to_f64()) else {
        return MID_GRAY;
    };
    if !clip.is_finite() || clip <= 0.0 || !value.is_finite() {
        return MID_GRAY;
    }
    let unit = (value / clip).clamp(-1.0, 1.0).mul_add(0.5, 0.5);
    (unit * 255.0).round() as u8
}

fn scaled_extent(samples: usize, scale: u32) -> Result<u32> {
    u32::try_from(samples)
        .ok()
        .and_then(|samples| samples.checked_mul(scale))
        .ok_or_else(|| invalid_parameter("scale", &scale, &"rendered image is too large"))
}

/// Render `field` as a gray-scale image clipped to `[-clip, clip]`
///
/// Each sample becomes a `scale` x `scale` block of pixels.
///
/// # Errors
///
/// Returns an error if:
/// - The field is empty
/// - `scale` is zero or the scaled image would not fit in `u32` pixels
pub fn render_field<T: Sample>(field: &ArrayView2<'_, T>, clip: T, scale: u32) -> Result<GrayImage> {
    validate_field(field)?;
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
    }

    let (n1, n2) = dimensions(field);
    let width = scaled_extent(n2, scale)?;
    let height = scaled_extent(n1, scale)?;

    Ok(GrayImage::from_fn(width, height, |x, y| {
        let i2 = (x / scale) as usize;
        let i1 = (y / scale) as usize;
        let level = field
            .get([i2, i1])
            .map_or(MID_GRAY, |&value| gray_level(value, clip));
        Luma([level])
    }))
}

/// Render `field` and save it as a PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The field cannot be rendered (see [`render_field`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_field_as_png<T: Sample>(
    field: &ArrayView2<'_, T>,
    clip: T,
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_field(field, clip, scale)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BurgError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| BurgError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Load an image as a field of luma values normalized to `[0, 1]`
///
/// The image's vertical axis becomes axis 1 and its horizontal axis axis 2.
///
/// # Errors
///
/// Returns an error if:
/// - The image cannot be opened or decoded
/// - The image has zero width or height
pub fn load_field_from_png<T: Sample>(path: &Path) -> Result<Array2<T>> {
    let luma = image::open(path)
        .map_err(|e| BurgError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .to_luma8();

    let (width, height) = luma.dimensions();
    let field = Array2::from_shape_fn((width as usize, height as usize), |(i2, i1)| {
        let Luma([level]) = *luma.get_pixel(i2 as u32, i1 as u32);
        T::from(f64::from(level) / 255.0).unwrap_or_else(T::nan)
    });

    validate_field(&field.view())?;
    Ok(field)
}
