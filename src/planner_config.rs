use crate::{FitMode, SlideDimensions};

/// Configuration options for the deck planner.
///
/// Use [`PlannerConfig::builder()`] to create a configuration instance.
/// This allows you to customize only the desired fields while falling back to sensible defaults for the rest.
///
/// # Configuration Options
///
/// | Parameter | Type | Default | Description |
/// |-----------|------|---------|-------------|
/// | `fit_mode` | `FitMode` | `Contain` | How images are fitted onto slides |
/// | `slide_size` | `SlideDimensions` | `STANDARD_4X3` | Slide dimensions in inches |
///
/// # Example
///
/// ```
/// use images_to_slides::{FitMode, PlannerConfig, SlideDimensions};
///
/// let config = PlannerConfig::builder()
///     .fit_mode(FitMode::Cover)
///     .slide_size(SlideDimensions::WIDESCREEN_16X9)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub fit_mode: FitMode,
    pub slide_size: SlideDimensions,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fit_mode: FitMode::Contain,
            slide_size: SlideDimensions::STANDARD_4X3,
        }
    }
}

impl PlannerConfig {
    pub fn builder() -> PlannerConfigBuilder {
        PlannerConfigBuilder::default()
    }
}

/// Builder for [`PlannerConfig`].
///
/// Allows setting individual configuration fields while falling back to defaults for any unspecified values
#[derive(Debug, Default)]
pub struct PlannerConfigBuilder {
    fit_mode: Option<FitMode>,
    slide_size: Option<SlideDimensions>,
}

impl PlannerConfigBuilder {
    /// Sets the strategy used to fit images onto slides.
    pub fn fit_mode(mut self, value: FitMode) -> Self {
        self.fit_mode = Some(value);
        self
    }

    /// Sets the slide dimensions for the planned presentation.
    pub fn slide_size(mut self, value: SlideDimensions) -> Self {
        self.slide_size = Some(value);
        self
    }

    /// Builds the final [`PlannerConfig`] instance, applying default values for any fields that were not set.
    pub fn build(self) -> PlannerConfig {
        PlannerConfig {
            fit_mode: self.fit_mode.unwrap_or_default(),
            slide_size: self.slide_size.unwrap_or(SlideDimensions::STANDARD_4X3),
        }
    }
}
