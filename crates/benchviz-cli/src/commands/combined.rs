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

//! Combined command - the side-by-side comparison figure

use super::{load_all_tables, ImageFormat};
use crate::error::CliError;
use benchviz_chart::{render_combined, ChartStyle};
use std::path::{Path, PathBuf};

/// Render the combined comparison figure.
///
/// Loads all three operation tables and draws them side by side in one
/// figure under a shared title.
///
/// # Arguments
///
/// * `data_dir` - Directory containing the benchmark CSV files
/// * `output` - Output file path; defaults to `benchmark_combined.<format>`
///   in the data directory. The extension of an explicit path selects the
///   rendering backend.
/// * `format` - Image format name used when no output path is given
///
/// # Errors
///
/// Returns `Err` if the format is invalid, any CSV file cannot be loaded,
/// or rendering fails.
pub fn combined(data_dir: &str, output: Option<&str>, format: &str) -> Result<(), CliError> {
    let format = ImageFormat::parse(format)?;
    let path = match output {
        Some(p) => PathBuf::from(p),
        None => Path::new(data_dir).join(format!("benchmark_combined.{}", format.extension())),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CliError::io_error(parent, e))?;
        }
    }

    let tables = load_all_tables(data_dir)?;
    render_combined(&tables, &path, &ChartStyle::default())?;
    println!("Saved: {}", path.display());

    Ok(())
}
