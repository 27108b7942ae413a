use std::f64::consts::TAU;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points, Polygon};

use crate::color::{ColorMap, generate_palette, outcome_color};
use crate::data::model::Outcome;
use crate::query::spec::{PieSpec, ScatterSpec};

// ---------------------------------------------------------------------------
// Success pie (upper central panel)
// ---------------------------------------------------------------------------

/// Segments used to approximate a full circle.
const ARC_SEGMENTS: usize = 72;

/// Render a pie spec as filled sector polygons on an axis-less plot.
pub fn pie_chart(ui: &mut Ui, spec: &PieSpec, height: f32) {
    ui.strong(&spec.title);

    let total = spec.total();
    if total <= 0.0 {
        ui.weak("No launches match the current selection.");
    }

    let palette = generate_palette(spec.slices.len());

    Plot::new("success_pie")
        .legend(Legend::default())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            if total <= 0.0 {
                return;
            }
            // Slices start at 12 o'clock and run clockwise.
            let mut start = TAU / 4.0;
            for (i, slice) in spec.slices.iter().enumerate() {
                if slice.value <= 0.0 {
                    continue;
                }
                let sweep = (slice.value / total) * TAU;
                let sector = Polygon::new(sector_points(start, sweep))
                    .fill_color(slice_color(&slice.label, i, &palette))
                    .stroke(Stroke::new(1.0, Color32::WHITE))
                    .name(format!("{} ({})", slice.label, slice.value));
                plot_ui.polygon(sector);
                start -= sweep;
            }
        });
}

/// Vertices of one pie sector: centre, then the arc from `start` sweeping
/// clockwise by `sweep` radians on the unit circle.
fn sector_points(start: f64, sweep: f64) -> PlotPoints<'static> {
    let segments = ((sweep / TAU) * ARC_SEGMENTS as f64).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(segments + 2);
    points.push([0.0, 0.0]);
    for i in 0..=segments {
        let angle = start - sweep * (i as f64 / segments as f64);
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::from(points)
}

fn slice_color(label: &str, idx: usize, palette: &[Color32]) -> Color32 {
    if label == Outcome::Success.label() {
        outcome_color(Outcome::Success)
    } else if label == Outcome::Failure.label() {
        outcome_color(Outcome::Failure)
    } else {
        palette.get(idx).copied().unwrap_or(Color32::GRAY)
    }
}

// ---------------------------------------------------------------------------
// Payload / outcome scatter (lower central panel)
// ---------------------------------------------------------------------------

/// Render a scatter spec, one colored point series per booster category.
pub fn scatter_chart(ui: &mut Ui, spec: &ScatterSpec, colors: &ColorMap, height: f32) {
    ui.strong(&spec.title);

    if spec.point_count() == 0 {
        ui.weak("No launches match the current selection.");
    }

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch outcome (1 = success)")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points = Points::new(PlotPoints::from(series.points.clone()))
                    .name(&series.name)
                    .color(colors.color_for(&series.name))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(4.0);
                plot_ui.points(points);
            }
        });
}
