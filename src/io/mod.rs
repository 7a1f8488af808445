pub mod dataset;
pub mod netcdf;
