use crate::config::{FieldConfig, GEOMETRY_TIME};
use crate::io::dataset::{Geometry, RunOutput};
use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};
use netcdf::{self};
use std::path::Path;

/// Maps a signed time index onto `0..len`, counting negative values from the end.
pub fn resolve_time_index(time: i64, len: usize) -> Result<usize> {
    let resolved = if time < 0 {
        len as i64 + time
    } else {
        time
    };

    if resolved < 0 || resolved >= len as i64 {
        bail!(
            "time index {} is out of range for a time dimension of length {}",
            time,
            len
        );
    }
    Ok(resolved as usize)
}

fn open(path: &Path) -> Result<netcdf::File> {
    netcdf::open(path).with_context(|| format!("Failed to open NetCDF file: {:?}", path))
}

fn variable<'f>(file: &'f netcdf::File, name: &str, path: &Path) -> Result<netcdf::Variable<'f>> {
    file.variable(name)
        .ok_or_else(|| anyhow!("Variable '{}' not found in {:?}", name, path))
}

// Reads a whole variable, e.g. a static cell coordinate
fn read_field(file: &netcdf::File, name: &str, path: &Path) -> Result<Vec<f64>> {
    let var = variable(file, name, path)?;
    let values = var
        .get_values::<f64, _>(..)
        .with_context(|| format!("Failed to read '{}' from {:?}", name, path))?;
    debug!("Read {} values of '{}'", values.len(), name);
    Ok(values)
}

// Reads one record along the leading (time) dimension
fn read_time_slice(
    file: &netcdf::File,
    name: &str,
    time: i64,
    path: &Path,
) -> Result<(Vec<f64>, usize)> {
    let var = variable(file, name, path)?;
    let time_len = var
        .dimensions()
        .first()
        .map(|d| d.len())
        .ok_or_else(|| anyhow!("Variable '{}' in {:?} has no time dimension", name, path))?;

    let t = resolve_time_index(time, time_len)
        .with_context(|| format!("Cannot read '{}' from {:?}", name, path))?;

    let values = var
        .get_values::<f64, _>((&t, ..))
        .with_context(|| format!("Failed to read '{}' at time {} from {:?}", name, t, path))?;
    debug!("Read {} values of '{}' at time {}", values.len(), name, t);
    Ok((values, t))
}

pub fn load_run_output(path: &Path, fields: &FieldConfig, time: i64) -> Result<RunOutput> {
    let file = open(path)?;

    let x_cell = read_field(&file, &fields.x_cell, path)?;
    let y_cell = read_field(&file, &fields.y_cell, path)?;
    let (water_thickness, time_index) =
        read_time_slice(&file, &fields.water_thickness, time, path)?;
    let (water_pressure, _) = read_time_slice(&file, &fields.water_pressure, time, path)?;

    Ok(RunOutput {
        x_cell,
        y_cell,
        water_thickness,
        water_pressure,
        time_index,
    })
}

fn read_notice(field: &str, path: &Path) -> String {
    format!("Attempting to read {} field from {}.", field, path.display())
}

pub fn load_geometry(path: &Path, fields: &FieldConfig) -> Result<Geometry> {
    info!("{}", read_notice(&fields.ice_thickness, path));
    let file = open(path)?;
    let (ice_thickness, _) = read_time_slice(&file, &fields.ice_thickness, GEOMETRY_TIME, path)?;

    Ok(Geometry { ice_thickness })
}
