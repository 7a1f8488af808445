use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "output.nc";
pub const DEFAULT_TIME: i64 = -1;

// Companion geometry file, always read from the working directory
pub const GEOMETRY_FILE: &str = "landice_grid.nc";
pub const GEOMETRY_TIME: i64 = 0;

pub const FIGURE_FILE: &str = "GL-position.png";
pub const FIGURE_SIZE: (u32, u32) = (800, 900);

// kg m-3
pub const ICE_DENSITY: f64 = 917.0;
// m s-2
pub const GRAVITY: f64 = 9.81;

// Variable names read from the MPAS output and grid files
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub x_cell: String,
    pub y_cell: String,
    pub water_thickness: String,
    pub water_pressure: String,
    pub ice_thickness: String,
}

impl FieldConfig {
    pub fn new() -> Self {
        FieldConfig {
            x_cell: "xCell".to_string(),
            y_cell: "yCell".to_string(),
            water_thickness: "waterThickness".to_string(),
            water_pressure: "waterPressure".to_string(),
            ice_thickness: "thickness".to_string(),
        }
    }
}

// Options for a single plotting run
#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub input: PathBuf,
    pub geometry: PathBuf,
    pub time: i64,
    pub save: bool,
    pub display: bool,
    pub figure: PathBuf,
}

impl PlotOptions {
    pub fn new(input: PathBuf, time: i64, save: bool, nodisp: bool) -> Self {
        PlotOptions {
            input,
            geometry: PathBuf::from(GEOMETRY_FILE),
            time,
            save,
            display: !nodisp,
            figure: PathBuf::from(FIGURE_FILE),
        }
    }
}
