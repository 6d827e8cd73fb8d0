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

//! Chart command - per-operation latency charts

use super::{chart_path, ensure_out_dir, load_table, parse_operation, ImageFormat};
use crate::error::CliError;
use benchviz_chart::{render_operation, ChartStyle};
use benchviz_core::Operation;

/// Render one line chart per operation.
///
/// Reads each operation's CSV file from `data_dir` and writes the chart
/// next to it (or into `out_dir` when given), named after the input stem.
///
/// # Arguments
///
/// * `data_dir` - Directory containing the benchmark CSV files
/// * `out_dir` - Output directory; defaults to `data_dir`
/// * `operation` - Restrict rendering to one operation name; `None` renders
///   all three
/// * `format` - Image format name (`png` or `svg`)
///
/// # Errors
///
/// Returns `Err` if the format or operation name is invalid, a CSV file
/// cannot be loaded, or rendering fails.
///
/// # Examples
///
/// ```no_run
/// use benchviz_cli::commands::chart;
///
/// # fn main() -> Result<(), benchviz_cli::error::CliError> {
/// // All three operations as PNG
/// chart("results", None, None, "png")?;
///
/// // Only the find chart, as SVG
/// chart("results", Some("out"), Some("find"), "svg")?;
/// # Ok(())
/// # }
/// ```
pub fn chart(
    data_dir: &str,
    out_dir: Option<&str>,
    operation: Option<&str>,
    format: &str,
) -> Result<(), CliError> {
    let format = ImageFormat::parse(format)?;
    let out_dir = out_dir.unwrap_or(data_dir);
    ensure_out_dir(out_dir)?;

    let operations = match operation {
        Some(name) => vec![parse_operation(name)?],
        None => Operation::all().to_vec(),
    };

    let style = ChartStyle::default();
    for op in operations {
        let table = load_table(data_dir, op)?;
        let path = chart_path(out_dir, op, format);
        render_operation(&table, &path, &style)?;
        println!("Saved: {}", path.display());
    }

    Ok(())
}
