mod constants;
mod fit;
mod natural_sort;
mod planner;
mod planner_config;
mod probe;
mod types;

pub use constants::{EMU_PER_INCH, SUPPORTED_EXTENSIONS};
pub use fit::compute_placement;
pub use natural_sort::{natural_cmp, sort_filenames_naturally, SortKey};
pub use planner::{DeckPlanner, PlanIterator, SlidePlan};
pub use planner_config::PlannerConfig;
pub use probe::probe_dimensions;
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::error::ImageError),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("Unknown fit mode: {0}")]
    UnknownFitMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
