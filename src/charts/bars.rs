use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

const BAR_COLOR: RGBColor = RGBColor(66, 133, 244);
const MAX_STARS: f64 = 5.0;

/// Render (category, value) pairs as a horizontal bar chart SVG.
/// Entries are drawn in the order given, first entry at the top; the
/// ordering decided upstream is preserved exactly.
pub fn render_bar_chart(
    path: &Path,
    title: &str,
    entries: &[(String, f64)],
    width: u32,
    height: u32,
) -> Result<()> {
    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let count = entries.len();
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(240)
        .build_cartesian_2d(0.0..MAX_STARS, 0..count)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(count)
        .y_label_formatter(&|slot: &usize| label_for_slot(entries, *slot))
        .x_desc("Average Stars")
        .draw()?;

    chart.draw_series(entries.iter().enumerate().map(|(idx, (_, value))| {
        let slot = count - 1 - idx;
        Rectangle::new([(0.0, slot), (*value, slot + 1)], BAR_COLOR.mix(0.7).filled())
    }))?;

    root.present()?;
    Ok(())
}

// Slot 0 is the bottom of the chart, so the first entry gets the top slot.
fn label_for_slot(entries: &[(String, f64)], slot: usize) -> String {
    entries
        .get(entries.len().wrapping_sub(slot + 1))
        .map(|(category, _)| category.clone())
        .unwrap_or_default()
}
