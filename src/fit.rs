use crate::{Error, FitMode, ImageDimensions, Placement, Result, SlideDimensions};

/// Computes where an image goes on a slide under the given fit mode.
///
/// `Contain` scales by the smaller axis ratio and centers, leaving margins on
/// the unconstrained axis. `Cover` scales by the larger ratio and centers, so
/// the slide is filled and the overhanging axis gets a negative offset (the
/// crop, split evenly between both edges). `Stretch` ignores the image
/// dimensions and returns the slide rectangle itself.
///
/// # Arguments
///
/// - `image`: probed pixel dimensions of the source image.
/// - `slide`: slide dimensions in inches.
/// - `mode`: fitting strategy.
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] if either dimension of the image is
/// zero, or either dimension of the slide is zero, negative, or not finite.
pub fn compute_placement(
    image: ImageDimensions,
    slide: SlideDimensions,
    mode: FitMode,
) -> Result<Placement> {
    if image.width == 0 || image.height == 0 {
        return Err(Error::InvalidDimensions {
            width: image.width as f64,
            height: image.height as f64,
        });
    }
    if !(slide.width > 0.0 && slide.height > 0.0)
        || !slide.width.is_finite()
        || !slide.height.is_finite()
    {
        return Err(Error::InvalidDimensions { width: slide.width, height: slide.height });
    }

    let placement = match mode {
        FitMode::Stretch => Placement {
            offset_x: 0.0,
            offset_y: 0.0,
            scaled_width: slide.width,
            scaled_height: slide.height,
        },
        FitMode::Contain | FitMode::Cover => {
            let scale_x = slide.width / image.width as f64;
            let scale_y = slide.height / image.height as f64;
            let scale = match mode {
                FitMode::Contain => scale_x.min(scale_y),
                _ => scale_x.max(scale_y),
            };

            let scaled_width = image.width as f64 * scale;
            let scaled_height = image.height as f64 * scale;

            Placement {
                offset_x: (slide.width - scaled_width) / 2.0,
                offset_y: (slide.height - scaled_height) / 2.0,
                scaled_width,
                scaled_height,
            }
        }
    };

    Ok(placement)
}
