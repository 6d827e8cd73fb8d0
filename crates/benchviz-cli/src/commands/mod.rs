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

//! CLI command implementations

mod chart;
mod combined;
mod completions;
mod report;
mod stats;

pub use chart::chart;
pub use combined::combined;
pub use completions::completions;
pub use report::report;
pub use stats::stats;

use crate::error::CliError;
use benchviz_core::{LatencyTable, Operation};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported chart image formats.
///
/// The format only picks the default file extension; when an explicit
/// output path is given, its extension selects the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Rasterized output through the bitmap backend.
    Png,
    /// Vector output through the SVG backend.
    Svg,
}

impl ImageFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }

    /// Parse a user-supplied format name.
    pub fn parse(s: &str) -> Result<Self, CliError> {
        match s.to_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            other => Err(CliError::invalid_input(format!(
                "Unsupported image format '{}' (expected png or svg)",
                other
            ))),
        }
    }
}

/// Parse a user-supplied operation name.
pub(crate) fn parse_operation(s: &str) -> Result<Operation, CliError> {
    Operation::from_str(s).map_err(|e| CliError::invalid_input(e.to_string()))
}

/// The conventional CSV input path for one operation.
pub(crate) fn csv_path(data_dir: &str, operation: Operation) -> PathBuf {
    Path::new(data_dir).join(operation.csv_file_name())
}

/// The chart output path for one operation, mirroring the CSV stem.
pub(crate) fn chart_path(out_dir: &str, operation: Operation, format: ImageFormat) -> PathBuf {
    Path::new(out_dir).join(format!(
        "benchmark_{}.{}",
        operation.name(),
        format.extension()
    ))
}

/// Load one operation's table from its conventional path.
pub(crate) fn load_table(data_dir: &str, operation: Operation) -> Result<LatencyTable, CliError> {
    benchviz_core::read_table(csv_path(data_dir, operation), operation).map_err(CliError::from)
}

/// Load all three operation tables in canonical order.
pub(crate) fn load_all_tables(data_dir: &str) -> Result<Vec<LatencyTable>, CliError> {
    Operation::all()
        .iter()
        .map(|&operation| load_table(data_dir, operation))
        .collect()
}

/// Create the output directory if it does not exist.
pub(crate) fn ensure_out_dir(dir: &str) -> Result<(), CliError> {
    std::fs::create_dir_all(dir).map_err(|e| CliError::io_error(dir, e))
}
