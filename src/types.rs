use crate::constants::EMU_PER_INCH;
use crate::Error;
use std::str::FromStr;

/// Pixel dimensions of a source image, as probed from its file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Slide dimensions in inches, fixed per presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideDimensions {
    pub width: f64,
    pub height: f64,
}

impl SlideDimensions {
    /// Standard 4:3 slide, 10 in x 7.5 in.
    pub const STANDARD_4X3: SlideDimensions = SlideDimensions { width: 10.0, height: 7.5 };

    /// Widescreen 16:9 slide, 13.333 in x 7.5 in (12192000 x 6858000 EMU).
    pub const WIDESCREEN_16X9: SlideDimensions =
        SlideDimensions { width: 12_192_000.0 / EMU_PER_INCH, height: 7.5 };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Strategy for fitting an image onto a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Scale so the whole image is visible, centered, possibly leaving margins.
    #[default]
    Contain,
    /// Scale so the slide is fully covered, centered, possibly cropping the
    /// image. The crop shows up as negative placement offsets.
    Cover,
    /// Fill the slide exactly, distorting the aspect ratio.
    Stretch,
}

impl FromStr for FitMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contain" => Ok(FitMode::Contain),
            "cover" => Ok(FitMode::Cover),
            "stretch" => Ok(FitMode::Stretch),
            other => Err(Error::UnknownFitMode(other.to_string())),
        }
    }
}

/// Computed position and size of an image on a slide, in inches.
///
/// For [`FitMode::Contain`] and [`FitMode::Stretch`] the placement lies inside
/// the slide. For [`FitMode::Cover`] one offset may be negative: the overhang
/// `scaled_width - slide.width` (or the height equivalent) is split evenly
/// across both edges, and the renderer clips it to the slide bounds. Offsets
/// are never clamped to zero; clamping would shift the crop to one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scaled_width: f64,
    pub scaled_height: f64,
}

impl Placement {
    /// Rounds the placement to integer EMU for slide-writing backends.
    pub fn to_emu(&self) -> EmuPlacement {
        EmuPlacement {
            left: (self.offset_x * EMU_PER_INCH).round() as i64,
            top: (self.offset_y * EMU_PER_INCH).round() as i64,
            width: (self.scaled_width * EMU_PER_INCH).round() as i64,
            height: (self.scaled_height * EMU_PER_INCH).round() as i64,
        }
    }
}

/// A [`Placement`] in integer English Metric Units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmuPlacement {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}
