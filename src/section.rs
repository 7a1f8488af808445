use crate::config::{GRAVITY, ICE_DENSITY};
use crate::io::dataset::{Geometry, RunOutput};
use anyhow::{Result, anyhow};
use log::{info, warn};

/// Distinct values in ascending order, compared exactly.
pub fn unique_sorted(values: &[f64]) -> Vec<f64> {
    let mut unique = values.to_vec();
    unique.sort_by(f64::total_cmp);
    unique.dedup();
    unique
}

/// The distinct value at position `count / 2`.
///
/// For an even number of distinct values this is the upper-middle one, not a
/// statistical median.
pub fn center_value(values: &[f64]) -> Option<(f64, usize, usize)> {
    let unique = unique_sorted(values);
    let center = unique.len() / 2;
    unique.get(center).map(|&v| (v, center, unique.len()))
}

pub fn indices_equal(values: &[f64], target: f64) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == target)
        .map(|(i, _)| i)
        .collect()
}

/// Ice overburden pressure in Pa for each thickness.
pub fn hydrostatic_pressure(ice_thickness: &[f64]) -> Vec<f64> {
    ice_thickness
        .iter()
        .map(|h| h * ICE_DENSITY * GRAVITY)
        .collect()
}

fn take(values: &[f64], indices: &[usize], name: &str) -> Result<Vec<f64>> {
    indices
        .iter()
        .map(|&i| {
            values.get(i).copied().ok_or_else(|| {
                anyhow!(
                    "cell {} is outside '{}' which has {} values",
                    i,
                    name,
                    values.len()
                )
            })
        })
        .collect()
}

// Radial profile along the center row of cells, in source order
#[derive(Debug, Clone, Default)]
pub struct CrossSection {
    pub center_y: Option<f64>,
    pub x_km: Vec<f64>,
    pub water_thickness: Vec<f64>,
    pub water_pressure: Vec<f64>,
    pub ice_thickness: Vec<f64>,
}

impl CrossSection {
    pub fn extract(run: &RunOutput, geometry: &Geometry) -> Result<Self> {
        if geometry.ice_thickness.len() != run.num_cells() {
            warn!(
                "Geometry has {} cells but the run output has {}; assuming matching cell order",
                geometry.ice_thickness.len(),
                run.num_cells()
            );
        }

        // Files are set up with the central row at y=0
        let Some((center_y, center, count)) = center_value(&run.y_cell) else {
            warn!("Run output has no cells, cross-section is empty");
            return Ok(CrossSection::default());
        };
        info!(
            "number of ys, center y index, center Y value: {} {} {}",
            count, center, center_y
        );

        let ind = indices_equal(&run.y_cell, center_y);

        Ok(CrossSection {
            center_y: Some(center_y),
            x_km: take(&run.x_cell, &ind, "xCell")?
                .into_iter()
                .map(|x| x / 1000.0)
                .collect(),
            water_thickness: take(&run.water_thickness, &ind, "waterThickness")?,
            water_pressure: take(&run.water_pressure, &ind, "waterPressure")?,
            ice_thickness: take(&geometry.ice_thickness, &ind, "thickness")?,
        })
    }

    pub fn len(&self) -> usize {
        self.x_km.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_km.is_empty()
    }

    pub fn reference_pressure(&self) -> Vec<f64> {
        hydrostatic_pressure(&self.ice_thickness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(x: Vec<f64>, y: Vec<f64>) -> RunOutput {
        let n = x.len();
        RunOutput {
            x_cell: x,
            y_cell: y,
            water_thickness: (0..n).map(|i| i as f64).collect(),
            water_pressure: (0..n).map(|i| 100.0 * i as f64).collect(),
            time_index: 0,
        }
    }

    #[test]
    fn odd_count_picks_middle_row() {
        let y = vec![-1.0, 0.0, 1.0, -1.0, 0.0, 1.0];
        assert_eq!(center_value(&y), Some((0.0, 1, 3)));
        assert_eq!(indices_equal(&y, 0.0), vec![1, 4]);
    }

    #[test]
    fn even_count_picks_upper_middle_row() {
        let y = vec![1.0, -2.0, 0.0, -1.0];
        assert_eq!(center_value(&y), Some((0.0, 2, 4)));
    }

    #[test]
    fn empty_input_has_no_center() {
        assert_eq!(center_value(&[]), None);
        assert!(unique_sorted(&[]).is_empty());
    }

    #[test]
    fn unique_sorted_removes_duplicates() {
        assert_eq!(unique_sorted(&[3.0, 1.0, 3.0, 2.0, 1.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn hydrostatic_reference_values() {
        let p = hydrostatic_pressure(&[0.0, 10.0, 20.0]);
        let expected = [0.0, 89_957.7, 179_915.4];
        for (got, want) in p.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "{} != {}", got, want);
        }
    }

    #[test]
    fn extract_keeps_only_center_row_in_source_order() {
        // Three rows, center row written right-to-left
        let x = vec![0.0, 1000.0, 3000.0, 2000.0, 0.0, 1000.0];
        let y = vec![-1.0, -1.0, 0.0, 0.0, 1.0, 1.0];
        let run = run(x, y);
        let geometry = Geometry {
            ice_thickness: vec![5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        };

        let section = CrossSection::extract(&run, &geometry).unwrap();
        assert_eq!(section.center_y, Some(0.0));
        assert_eq!(section.x_km, vec![3.0, 2.0]);
        assert_eq!(section.water_thickness, vec![2.0, 3.0]);
        assert_eq!(section.water_pressure, vec![200.0, 300.0]);
        assert_eq!(section.ice_thickness, vec![7.0, 8.0]);
        assert_eq!(section.len(), 2);
    }

    #[test]
    fn extract_empty_run_gives_empty_section() {
        let run = run(Vec::new(), Vec::new());
        let geometry = Geometry {
            ice_thickness: Vec::new(),
        };
        let section = CrossSection::extract(&run, &geometry).unwrap();
        assert!(section.is_empty());
        assert_eq!(section.center_y, None);
    }

    #[test]
    fn short_geometry_is_an_error() {
        let run = run(vec![0.0, 1000.0, 2000.0], vec![0.0, 1.0, 1.0]);
        let geometry = Geometry {
            ice_thickness: vec![1.0],
        };
        let err = CrossSection::extract(&run, &geometry).unwrap_err();
        assert!(err.to_string().contains("thickness"));
    }
}
