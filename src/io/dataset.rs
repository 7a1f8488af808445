// Fields read from the model output at one time slice
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub x_cell: Vec<f64>,
    pub y_cell: Vec<f64>,
    pub water_thickness: Vec<f64>,
    pub water_pressure: Vec<f64>,
    /// Resolved (non-negative) index into the time dimension
    pub time_index: usize,
}

impl RunOutput {
    pub fn num_cells(&self) -> usize {
        self.x_cell.len()
    }
}

// Ice thickness from the companion grid file, aligned by cell index with RunOutput
#[derive(Debug, Clone)]
pub struct Geometry {
    pub ice_thickness: Vec<f64>,
}
