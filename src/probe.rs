use crate::{ImageDimensions, Result};
use std::path::Path;

/// Reads the pixel dimensions of an image file.
///
/// Only the file header is decoded, so probing is cheap even for large images.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its format is not
/// recognized.
pub fn probe_dimensions(path: &Path) -> Result<ImageDimensions> {
    let (width, height) = image::image_dimensions(path)?;
    Ok(ImageDimensions { width, height })
}
