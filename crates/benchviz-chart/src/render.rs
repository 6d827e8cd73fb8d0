// Dweve BenchViz - Benchmark Visualization Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Chart rendering over the `plotters` backends.

use crate::error::{ChartError, Result};
use crate::style::{case_color, ChartStyle};
use benchviz_core::{Case, LatencyTable};
use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Render one operation's chart: best/average/worst latency against input
/// size, with legend and grid.
///
/// The backend follows the file extension (`.svg` vector, otherwise
/// bitmap).
///
/// # Errors
///
/// Returns [`ChartError::EmptyTable`] for a table with no rows, or
/// [`ChartError::Backend`] if the drawing backend fails.
pub fn render_operation<P: AsRef<Path>>(
    table: &LatencyTable,
    path: P,
    style: &ChartStyle,
) -> Result<()> {
    let path = path.as_ref();
    ensure_rows(table)?;

    let caption = format!("AVL H-Tree: {} Performance", table.operation().title());
    let size = (style.width, style.height);
    if is_svg(path) {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_panel(
            &root,
            table,
            style,
            &caption,
            style.title_font_size,
            "Time per Operation (nanoseconds)",
            false,
        )?;
        root.present().map_err(backend_err)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_panel(
            &root,
            table,
            style,
            &caption,
            style.title_font_size,
            "Time per Operation (nanoseconds)",
            false,
        )?;
        root.present().map_err(backend_err)?;
    }
    Ok(())
}

/// Render the combined comparison figure: one panel per table, side by
/// side under a shared title.
///
/// # Errors
///
/// Returns [`ChartError::NoTables`] for an empty slice,
/// [`ChartError::EmptyTable`] if any table has no rows, or
/// [`ChartError::Backend`] if the drawing backend fails.
pub fn render_combined<P: AsRef<Path>>(
    tables: &[LatencyTable],
    path: P,
    style: &ChartStyle,
) -> Result<()> {
    let path = path.as_ref();
    if tables.is_empty() {
        return Err(ChartError::NoTables);
    }
    for table in tables {
        ensure_rows(table)?;
    }

    let size = (style.panel_width * tables.len() as u32, style.panel_height);
    if is_svg(path) {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_combined(&root, tables, style)?;
        root.present().map_err(backend_err)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_combined(&root, tables, style)?;
        root.present().map_err(backend_err)?;
    }
    Ok(())
}

fn draw_combined<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    tables: &[LatencyTable],
    style: &ChartStyle,
) -> Result<()> {
    root.fill(&WHITE).map_err(backend_err)?;
    let titled = root
        .titled(
            "AVL H-Tree Performance Comparison",
            ("sans-serif", style.title_font_size),
        )
        .map_err(backend_err)?;
    let panels = titled.split_evenly((1, tables.len()));
    for (panel, table) in panels.iter().zip(tables) {
        draw_panel(
            panel,
            table,
            style,
            table.operation().title(),
            style.panel_title_font_size,
            "Time (ns)",
            true,
        )?;
    }
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    table: &LatencyTable,
    style: &ChartStyle,
    caption: &str,
    caption_size: u32,
    y_desc: &str,
    short_labels: bool,
) -> Result<()> {
    area.fill(&WHITE).map_err(backend_err)?;

    let x_max = table.size_max().unwrap_or(1).max(1) as f64;
    let y_max = table.latency_max().filter(|v| *v > 0.0).unwrap_or(1.0) * 1.05;

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", caption_size))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .x_desc("Number of Elements")
        .y_desc(y_desc)
        .label_style(("sans-serif", style.tick_font_size))
        .axis_desc_style(("sans-serif", style.axis_font_size))
        .draw()
        .map_err(backend_err)?;

    for case in Case::all() {
        let color = case_color(case);
        let stroke = style.stroke_width;
        let points: Vec<(f64, f64)> = table
            .series(case)
            .into_iter()
            .map(|(size, latency)| (size as f64, latency))
            .collect();
        let label = if short_labels {
            case.short_label()
        } else {
            case.label()
        };

        chart
            .draw_series(LineSeries::new(
                points.clone(),
                color.stroke_width(stroke),
            ))
            .map_err(backend_err)?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(stroke))
            });

        draw_markers(&mut chart, &points, case, style.marker_size)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", style.legend_font_size))
        .draw()
        .map_err(backend_err)?;

    Ok(())
}

// Marker shapes per case: circle, square, triangle.
fn draw_markers<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    points: &[(f64, f64)],
    case: Case,
    marker_size: u32,
) -> Result<()> {
    let color = case_color(case);
    let size = marker_size as i32;
    match case {
        Case::Best => chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, size, color.filled())),
        ),
        Case::Average => chart.draw_series(points.iter().map(|&point| {
            EmptyElement::at(point) + Rectangle::new([(-size, -size), (size, size)], color.filled())
        })),
        Case::Worst => chart.draw_series(
            points
                .iter()
                .map(|&point| TriangleMarker::new(point, size, color.filled())),
        ),
    }
    .map_err(backend_err)?;
    Ok(())
}

fn ensure_rows(table: &LatencyTable) -> Result<()> {
    if table.is_empty() {
        return Err(ChartError::EmptyTable {
            operation: table.operation().name().to_string(),
        });
    }
    Ok(())
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

fn backend_err<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Backend(err.to_string())
}
