//! Basic usage example for the images-to-slides crate
//!
//! This example scans a folder of images and prints the placement geometry a
//! presentation writer would use for each slide.
//!
//! Run with: cargo run --example plan_deck <path/to/images> [contain|cover|stretch]

use images_to_slides::{DeckPlanner, FitMode, PlannerConfig, Result, SlideDimensions};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    // Get the image folder from command line arguments
    let args: Vec<String> = env::args().collect();
    let folder = if args.len() > 1 {
        &args[1]
    } else {
        eprintln!("Usage: cargo run --example plan_deck <path/to/images> [contain|cover|stretch]");
        return Ok(());
    };

    let fit_mode = if args.len() > 2 {
        args[2].parse::<FitMode>()?
    } else {
        FitMode::Contain
    };

    println!("Planning deck from folder: {}", folder);

    // Use the config builder to build your config
    let config = PlannerConfig::builder()
        .fit_mode(fit_mode)
        .slide_size(SlideDimensions::STANDARD_4X3)
        .build();

    let planner = DeckPlanner::open(Path::new(folder), config)?;
    let plans = planner.plan_all()?;

    println!("Found {} image(s)", plans.len());

    for plan in &plans {
        let p = &plan.placement;
        println!(
            "Slide {}: {} ({}x{} px) -> {:.2}x{:.2} in at ({:.2}, {:.2})",
            plan.slide_number,
            plan.source.display(),
            plan.image.width,
            plan.image.height,
            p.scaled_width,
            p.scaled_height,
            p.offset_x,
            p.offset_y,
        );
    }

    println!("All slides planned successfully!");

    Ok(())
}
