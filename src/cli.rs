use clap::Parser;
use log::info;
use std::path::PathBuf;

use crate::config::{DEFAULT_INPUT, DEFAULT_TIME, PlotOptions};

/// Plots water depth and pressure profiles for the hydro-radial test case
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to visualize
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Time step to visualize (0 based, negative counts from the end)
    #[arg(short, long, value_name = "TIME", allow_negative_numbers = true)]
    time: Option<i64>,

    /// Save the plot to GL-position.png
    #[arg(short, long)]
    save: bool,

    /// Do not display the plot (usually used with -s)
    #[arg(short, long)]
    nodisp: bool,
}

impl Args {
    fn into_options(self) -> PlotOptions {
        let input = match self.file {
            Some(file) => file,
            None => {
                info!("No filename provided. Using {}.", DEFAULT_INPUT);
                PathBuf::from(DEFAULT_INPUT)
            }
        };

        let time = match self.time {
            Some(time) => time,
            None => {
                info!("No time provided. Using time {}.", DEFAULT_TIME);
                DEFAULT_TIME
            }
        };

        PlotOptions::new(input, time, self.save, self.nodisp)
    }
}

pub fn get_args() -> PlotOptions {
    Args::parse().into_options()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FIGURE_FILE, GEOMETRY_FILE};

    fn parse(argv: &[&str]) -> PlotOptions {
        Args::try_parse_from(argv).unwrap().into_options()
    }

    #[test]
    fn defaults_when_no_flags() {
        let opts = parse(&["hydro_radial_plot"]);
        assert_eq!(opts.input, PathBuf::from("output.nc"));
        assert_eq!(opts.time, -1);
        assert!(!opts.save);
        assert!(opts.display);
        assert_eq!(opts.geometry, PathBuf::from(GEOMETRY_FILE));
        assert_eq!(opts.figure, PathBuf::from(FIGURE_FILE));
    }

    #[test]
    fn short_flags() {
        let opts = parse(&["hydro_radial_plot", "-f", "run.nc", "-t", "0", "-s", "-n"]);
        assert_eq!(opts.input, PathBuf::from("run.nc"));
        assert_eq!(opts.time, 0);
        assert!(opts.save);
        assert!(!opts.display);
    }

    #[test]
    fn long_flags_and_negative_time() {
        let opts = parse(&["hydro_radial_plot", "--file", "a.nc", "--time", "-2", "--nodisp"]);
        assert_eq!(opts.input, PathBuf::from("a.nc"));
        assert_eq!(opts.time, -2);
        assert!(!opts.save);
        assert!(!opts.display);
    }

    #[test]
    fn non_integer_time_is_rejected() {
        assert!(Args::try_parse_from(["hydro_radial_plot", "-t", "last"]).is_err());
    }
}
