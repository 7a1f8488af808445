use anyhow::Result;
use log::{info, warn};

mod cli;
mod config;
mod io;
mod plot;
mod section;

use cli::get_args;
use config::{FieldConfig, PlotOptions};
use io::netcdf::{load_geometry, load_run_output};
use section::CrossSection;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = get_args();
    run(&options, &FieldConfig::new())
}

fn run(options: &PlotOptions, fields: &FieldConfig) -> Result<()> {
    // Everything is loaded before any drawing starts
    let run_output = load_run_output(&options.input, fields, options.time)?;
    let geometry = load_geometry(&options.geometry, fields)?;
    let section = CrossSection::extract(&run_output, &geometry)?;

    println!("\nCross-section:");
    println!("  File: {:?}", options.input);
    println!("  Time index: {}", run_output.time_index);
    if let Some(y) = section.center_y {
        println!("  Center y: {}", y);
    }
    println!("  Cells: {} of {}", section.len(), run_output.num_cells());
    if section.is_empty() {
        warn!("No cells on the center row, plots will be empty");
    }

    info!("start plotting.");
    if options.save {
        info!("Saving figures to files.");
        plot::save_png(&section, &options.figure)?;
    }
    info!("plotting complete");

    if options.display {
        plot::show_window(&section)?;
    } else {
        info!("Plot display disabled with -n argument.");
    }

    Ok(())
}
