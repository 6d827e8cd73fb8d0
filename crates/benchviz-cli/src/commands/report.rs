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

//! Report command - the full pipeline in one run
//!
//! Per-operation charts are independent of each other, so they render in
//! parallel with rayon; the combined figure and the statistics file follow
//! sequentially.

use super::{chart_path, ensure_out_dir, load_all_tables, ImageFormat};
use crate::error::CliError;
use benchviz_chart::{render_combined, render_operation, ChartStyle};
use benchviz_core::{render_text, OperationSummary};
use colored::Colorize;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Generate all charts, the combined figure, and the statistics report.
///
/// The one-shot equivalent of running `chart`, `combined`, and `stats` in
/// sequence over the same data directory.
///
/// # Arguments
///
/// * `data_dir` - Directory containing the benchmark CSV files
/// * `out_dir` - Output directory; defaults to `data_dir`
/// * `format` - Image format for the charts (`png` or `svg`)
///
/// # Errors
///
/// Returns `Err` if the format is invalid, any CSV file cannot be loaded,
/// any table is empty, or rendering or writing fails.
pub fn report(data_dir: &str, out_dir: Option<&str>, format: &str) -> Result<(), CliError> {
    let format = ImageFormat::parse(format)?;
    let out_dir = out_dir.unwrap_or(data_dir);
    ensure_out_dir(out_dir)?;

    println!("Generating performance graphs...");

    let style = ChartStyle::default();
    let tables = load_all_tables(data_dir)?;

    let chart_paths: Vec<PathBuf> = tables
        .par_iter()
        .map(|table| {
            let path = chart_path(out_dir, table.operation(), format);
            render_operation(table, &path, &style)?;
            Ok(path)
        })
        .collect::<Result<_, CliError>>()?;
    for path in &chart_paths {
        println!("Saved: {}", path.display());
    }

    let combined_path =
        Path::new(out_dir).join(format!("benchmark_combined.{}", format.extension()));
    render_combined(&tables, &combined_path, &style)?;
    println!("Saved: {}", combined_path.display());

    let summaries = tables
        .iter()
        .map(|table| OperationSummary::compute(table).map_err(CliError::from))
        .collect::<Result<Vec<_>, _>>()?;
    let stats_path = Path::new(out_dir).join("benchmark_statistics.txt");
    std::fs::write(&stats_path, render_text(&summaries))
        .map_err(|e| CliError::io_error(&stats_path, e))?;
    println!("Saved: {}", stats_path.display());

    println!();
    println!(
        "{} All graphs generated successfully!",
        "✓".green().bold()
    );
    Ok(())
}
