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

//! Stats command - the min/max/ratio summary report

use super::load_all_tables;
use crate::error::CliError;
use benchviz_core::{render_text, OperationSummary};
use std::path::{Path, PathBuf};

/// Write the summary statistics report.
///
/// Computes per-operation summaries (size range, per-case min/max
/// latencies, worst/best ratio at the largest size) over all three CSV
/// files.
///
/// With `--format text` (the default) the report is written to
/// `benchmark_statistics.txt` in the data directory, or to `output` when
/// given. With `--format json` the summaries are printed to stdout as
/// pretty JSON, or written to `output` when given.
///
/// # Errors
///
/// Returns `Err` if a CSV file cannot be loaded, any table is empty, the
/// report cannot be written, or the format name is unknown.
///
/// # Examples
///
/// ```no_run
/// use benchviz_cli::commands::stats;
///
/// # fn main() -> Result<(), benchviz_cli::error::CliError> {
/// // The text report next to the data
/// stats("results", None, "text")?;
///
/// // JSON on stdout
/// stats("results", None, "json")?;
/// # Ok(())
/// # }
/// ```
pub fn stats(data_dir: &str, output: Option<&str>, format: &str) -> Result<(), CliError> {
    let summaries = compute_summaries(data_dir)?;

    match format.to_lowercase().as_str() {
        "text" => {
            let text = render_text(&summaries);
            let path = output
                .map(PathBuf::from)
                .unwrap_or_else(|| Path::new(data_dir).join("benchmark_statistics.txt"));
            std::fs::write(&path, text).map_err(|e| CliError::io_error(&path, e))?;
            println!("Saved: {}", path.display());
            Ok(())
        }
        "json" => {
            let json = serde_json::to_string_pretty(&summaries)?;
            match output {
                Some(p) => {
                    std::fs::write(p, json + "\n").map_err(|e| CliError::io_error(p, e))?;
                    println!("Saved: {}", p);
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        other => Err(CliError::invalid_input(format!(
            "Unsupported output format '{}' (expected text or json)",
            other
        ))),
    }
}

/// Compute summaries for all three operations in canonical order.
pub(crate) fn compute_summaries(data_dir: &str) -> Result<Vec<OperationSummary>, CliError> {
    load_all_tables(data_dir)?
        .iter()
        .map(|table| OperationSummary::compute(table).map_err(CliError::from))
        .collect()
}
