// crates/vigheat-cli/src/render/svg.rs
//
// Annotated heatmap figure. Rows are text lengths with the shortest at the
// top, columns are key lengths left to right, and a colour bar on the right
// shows the data range.

use anyhow::Context;
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use vigheat_core::heatmap::color::{coolwarm, label_color, Rgb};
use vigheat_core::heatmap::grid::HeatmapGrid;
use vigheat_core::heatmap::{TITLE, X_LABEL, Y_LABEL};

const SIZE: (u32, u32) = (1000, 600);
const BAR_W: u32 = 130;
const BAR_STEPS: usize = 64;

pub fn render(path: &str, heat: &HeatmapGrid) -> anyhow::Result<()> {
    draw(path, heat).with_context(|| format!("render heatmap {path}"))
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

/// Label for a segment on an axis whose i-th segment is `axis[i]`.
fn seg_label(v: &SegmentValue<i32>, axis: &[usize]) -> String {
    match v {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => usize::try_from(*i)
            .ok()
            .and_then(|i| axis.get(i))
            .map(|n| n.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

fn draw(path: &str, heat: &HeatmapGrid) -> anyhow::Result<()> {
    let rows = heat.rows() as i32;
    let cols = heat.cols() as i32;
    // Row 0 is drawn at the top.
    let y_axis: Vec<usize> = heat.text_lengths.iter().rev().copied().collect();

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let (main, bar) = root.split_horizontally((SIZE.0 - BAR_W) as i32);

    let mut chart = ChartBuilder::on(&main)
        .caption(TITLE, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0..cols).into_segmented(), (0..rows).into_segmented())?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_labels(heat.cols())
        .y_labels(heat.rows())
        .x_label_formatter(&|v| seg_label(v, &heat.key_lengths))
        .y_label_formatter(&|v| seg_label(v, &y_axis))
        .draw()?;

    let cells: Vec<(i32, i32, f64)> = heat
        .cells
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &v)| (j as i32, rows - 1 - i as i32, v))
        })
        .collect();

    chart.draw_series(cells.iter().map(|&(x, y, v)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
            ],
            rgb(coolwarm(heat.normalized(v))).filled(),
        )
    }))?;

    chart.draw_series(cells.iter().map(|&(x, y, v)| {
        let fg = rgb(label_color(coolwarm(heat.normalized(v))));
        let style = ("sans-serif", 16)
            .into_font()
            .color(&fg)
            .pos(Pos::new(HPos::Center, VPos::Center));
        Text::new(
            format!("{v:.1}"),
            (SegmentValue::CenterOf(x), SegmentValue::CenterOf(y)),
            style,
        )
    }))?;

    draw_colour_bar(&bar, heat)?;

    root.present()?;
    Ok(())
}

fn draw_colour_bar(area: &DrawingArea<SVGBackend<'_>, Shift>, heat: &HeatmapGrid) -> anyhow::Result<()> {
    let (lo, hi) = heat.value_range();
    let hi = if hi - lo <= f64::EPSILON { lo + 1.0 } else { hi };
    let step = (hi - lo) / BAR_STEPS as f64;

    let mut bar = ChartBuilder::on(area)
        .margin_top(60)
        .margin_bottom(65)
        .margin_right(10)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0f64..1.0f64, lo..hi)?;

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels(6)
        .y_label_formatter(&|v| format!("{v:.0}"))
        .draw()?;

    bar.draw_series((0..BAR_STEPS).map(|k| {
        let y0 = lo + step * k as f64;
        let t = (k as f64 + 0.5) / BAR_STEPS as f64;
        Rectangle::new([(0.0, y0), (1.0, y0 + step)], rgb(coolwarm(t)).filled())
    }))?;

    Ok(())
}
