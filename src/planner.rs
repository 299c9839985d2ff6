use super::Result;
use crate::constants::SUPPORTED_EXTENSIONS;
use crate::natural_sort::natural_cmp;
use crate::planner_config::PlannerConfig;
use crate::{compute_placement, probe_dimensions, ImageDimensions, Placement};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// One planned slide: which image goes on it and where.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidePlan {
    pub slide_number: u32,
    pub source: PathBuf,
    pub image: ImageDimensions,
    pub placement: Placement,
}

/// Plans a slide deck from a folder of images.
///
/// `DeckPlanner` enumerates the image files in a folder, orders them
/// naturally (so `2.png` comes before `10.png`), and computes one
/// [`SlidePlan`] per image: the probed pixel dimensions plus the placement
/// geometry a presentation-writing backend needs to draw the image on its
/// slide.
pub struct DeckPlanner {
    pub config: PlannerConfig,
    pub image_paths: Vec<PathBuf>,
}

impl DeckPlanner {
    /// Scans a folder for image files and initializes a `DeckPlanner`.
    ///
    /// Files whose extension is not one of [`SUPPORTED_EXTENSIONS`] are
    /// skipped (the comparison ignores case, so `PIC.PNG` counts).
    /// Subdirectories are not descended into. The resulting file list is in
    /// natural filename order; a folder without images yields an empty
    /// planner, not an error.
    ///
    /// # Arguments
    ///
    /// - `folder`: Path to the folder containing the images.
    /// - `config`: Fit mode and slide size to plan with.
    ///
    /// # Errors
    ///
    /// Returns an error if the folder cannot be read.
    pub fn open(folder: &Path, config: PlannerConfig) -> Result<Self> {
        let mut image_paths: Vec<PathBuf> = Vec::new();

        for entry in std::fs::read_dir(folder)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && Self::is_supported_image(&path) {
                image_paths.push(path);
            }
        }

        image_paths.sort_by(|a, b| natural_cmp(&Self::file_name(a), &Self::file_name(b)));

        Ok(Self { config, image_paths })
    }

    /// Plans all slides sequentially, one probe and one placement per image,
    /// in natural filename order.
    pub fn plan_all(&self) -> Result<Vec<SlidePlan>> {
        self.image_paths
            .iter()
            .enumerate()
            .map(|(i, path)| self.plan_image(path, i as u32 + 1))
            .collect()
    }

    /// Plans all slides with multithreaded processing.
    ///
    /// Probing and placement of each image are independent, so the work is
    /// spread across the Rayon thread pool. Plans come back in the same
    /// natural filename order as [`DeckPlanner::plan_all`].
    ///
    /// # Returns
    ///
    /// * `Result<Vec<SlidePlan>>` - One plan per image, slide numbers starting at 1.
    pub fn plan_all_multi_threaded(&self) -> Result<Vec<SlidePlan>> {
        self.image_paths
            .par_iter()
            .enumerate()
            .map(|(i, path)| self.plan_image(path, i as u32 + 1))
            .collect()
    }

    pub fn iter_plans(&self) -> PlanIterator {
        PlanIterator::new(self)
    }

    /// Plans a single image onto the slide with the given number.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the image file.
    /// * `slide_number` - One-based number of the slide the image lands on.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be probed or has a zero
    /// dimension.
    pub fn plan_image(&self, path: &Path, slide_number: u32) -> Result<SlidePlan> {
        let image = probe_dimensions(path)?;
        let placement = compute_placement(image, self.config.slide_size, self.config.fit_mode)?;

        Ok(SlidePlan {
            slide_number,
            source: path.to_path_buf(),
            image,
            placement,
        })
    }

    fn is_supported_image(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|supported| ext.eq_ignore_ascii_case(supported))
            })
            .unwrap_or(false)
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// An iterator that plans slides one at a time.
///
/// This is useful when feeding a streaming backend: each call probes a single
/// image and computes its placement, instead of planning the whole deck up
/// front.
pub struct PlanIterator<'a> {
    planner: &'a DeckPlanner,
    current_index: usize,
}

impl<'a> PlanIterator<'a> {
    fn new(planner: &'a DeckPlanner) -> Self {
        Self { planner, current_index: 0 }
    }
}

impl<'a> Iterator for PlanIterator<'a> {
    type Item = Result<SlidePlan>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.planner.image_paths.get(self.current_index)?;
        self.current_index += 1;

        Some(self.planner.plan_image(path, self.current_index as u32))
    }
}
