use crate::config::FIGURE_SIZE;
use crate::section::CrossSection;
use anyhow::{Context, Result};
use log::info;
use minifb::{Key, Window, WindowOptions};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::ops::Range;
use std::path::Path;

const X_LABEL: &str = "X-position (km)";
const DEPTH_COLOR: RGBColor = RGBColor(31, 119, 180);
const REFERENCE_COLOR: RGBColor = RGBColor(31, 119, 180);
const PRESSURE_COLOR: RGBColor = RGBColor(255, 127, 14);
const MARKER_SIZE: u32 = 3;

/// Data extent padded by 5%, or `0..1` when there is nothing finite to show.
pub fn axis_range<'a>(values: impl IntoIterator<Item = &'a f64>) -> Range<f64> {
    let (lo, hi) = values
        .into_iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }

    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        lo.abs().max(1.0) * 0.05
    };
    (lo - pad)..(hi + pad)
}

fn points(x: &[f64], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter().copied().zip(y.iter().copied()).collect()
}

fn draw_depth<DB>(area: &DrawingArea<DB, Shift>, section: &CrossSection) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let depth = points(&section.x_km, &section.water_thickness);

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(
            axis_range(&section.x_km),
            axis_range(&section.water_thickness),
        )?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc("water depth (m)")
        .draw()?;

    chart.draw_series(LineSeries::new(depth.iter().copied(), &DEPTH_COLOR))?;
    chart.draw_series(
        depth
            .iter()
            .map(|&p| Circle::new(p, MARKER_SIZE, DEPTH_COLOR.filled())),
    )?;

    Ok(())
}

fn draw_pressure<DB>(area: &DrawingArea<DB, Shift>, section: &CrossSection) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let reference = points(&section.x_km, &section.reference_pressure());
    let pressure = points(&section.x_km, &section.water_pressure);

    let mut chart = ChartBuilder::on(area)
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(
            axis_range(&section.x_km),
            axis_range(reference.iter().chain(pressure.iter()).map(|(_, p)| p)),
        )?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc("water pressure (Pa)")
        .y_label_formatter(&|v| format!("{:.3e}", v))
        .draw()?;

    chart
        .draw_series(LineSeries::new(reference.iter().copied(), &REFERENCE_COLOR))?
        .label("ice overburden")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], REFERENCE_COLOR));
    chart.draw_series(
        reference
            .iter()
            .map(|&p| Circle::new(p, MARKER_SIZE, REFERENCE_COLOR.filled())),
    )?;

    chart
        .draw_series(DashedLineSeries::new(
            pressure.iter().copied(),
            8,
            5,
            PRESSURE_COLOR.stroke_width(1),
        ))?
        .label("water pressure")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PRESSURE_COLOR));
    chart.draw_series(
        pressure
            .iter()
            .map(|&p| Circle::new(p, MARKER_SIZE, PRESSURE_COLOR.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

/// Draws water depth above and pressure against the hydrostatic reference below.
pub fn draw_figure<DB>(root: DrawingArea<DB, Shift>, section: &CrossSection) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let panels = root.split_evenly((2, 1));
    draw_depth(&panels[0], section)?;
    draw_pressure(&panels[1], section)?;

    root.present()?;
    Ok(())
}

pub fn save_png(section: &CrossSection, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
    draw_figure(root, section).with_context(|| format!("Failed to write figure: {:?}", path))
}

/// Packs an RGB byte buffer into the 0RGB words minifb expects.
fn rgb_to_argb(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|px| (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32)
        .collect()
}

/// Shows the figure and blocks until the window is closed or Escape is pressed.
pub fn show_window(section: &CrossSection) -> Result<()> {
    let (w, h) = (FIGURE_SIZE.0 as usize, FIGURE_SIZE.1 as usize);

    let mut rgb = vec![0u8; w * h * 3];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, FIGURE_SIZE).into_drawing_area();
        draw_figure(root, section).context("Failed to render figure")?;
    }
    let framebuf = rgb_to_argb(&rgb);

    let mut window = Window::new("hydro-radial profile", w, h, WindowOptions::default())
        .context("Failed to open plot window")?;
    window.set_target_fps(30);

    info!("Close the window (or press Escape) to exit.");
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&framebuf, w, h)
            .context("Failed to update plot window")?;
    }
    Ok(())
}
