//! Streaming example for the images-to-slides crate
//!
//! This example plans slides one at a time instead of planning the whole deck
//! up front, which is useful when feeding a streaming presentation writer.
//!
//! Run with: cargo run --example streaming_plan <path/to/images>

use images_to_slides::{DeckPlanner, FitMode, PlannerConfig, Result};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    // Get the image folder from command line arguments
    let args: Vec<String> = env::args().collect();
    let folder = if args.len() > 1 {
        &args[1]
    } else {
        eprintln!("Usage: cargo run --example streaming_plan <path/to/images>");
        return Ok(());
    };

    println!("Planning deck from folder: {}", folder);

    let config = PlannerConfig::builder().fit_mode(FitMode::Cover).build();
    let planner = DeckPlanner::open(Path::new(folder), config)?;

    // Process plans one by one using the iterator
    for plan_result in planner.iter_plans() {
        match plan_result {
            Ok(plan) => {
                let emu = plan.placement.to_emu();
                println!(
                    "Slide {}: {} at ({}, {}) EMU, {}x{} EMU",
                    plan.slide_number,
                    plan.source.display(),
                    emu.left,
                    emu.top,
                    emu.width,
                    emu.height,
                );
            }
            Err(e) => {
                eprintln!("Error planning slide: {:?}", e);
            }
        }
    }

    println!("All slides processed successfully!");

    Ok(())
}
