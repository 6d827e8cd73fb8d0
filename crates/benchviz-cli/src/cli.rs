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

//! CLI command definitions and argument parsing.

use crate::commands;
use clap::{Parser, Subcommand};

/// BenchViz - AVL H-Tree benchmark visualization toolkit
///
/// Reads the timing CSV files written by the AVL H-Tree benchmark harness
/// (`benchmark_insert.csv`, `benchmark_find.csv`, `benchmark_remove.csv`)
/// and renders per-operation line charts, a combined comparison figure, and
/// a plain-text statistics report.
///
/// # Examples
///
/// ```bash
/// # Everything at once: charts, combined figure, statistics
/// benchviz report --data-dir results
///
/// # One chart per operation, as SVG
/// benchviz chart --data-dir results --format svg
///
/// # Just the insert chart
/// benchviz chart --operation insert
///
/// # Statistics as JSON on stdout
/// benchviz stats --format json
/// ```
#[derive(Parser)]
#[command(name = "benchviz")]
#[command(author, version, about = "BenchViz - AVL H-Tree benchmark visualization toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render one line chart per operation
    ///
    /// Draws best/average/worst latency against input size for each
    /// operation, one image per CSV file. Output files take the input
    /// stem with the image extension (benchmark_insert.png).
    Chart {
        /// Directory containing the benchmark CSV files
        #[arg(short, long, default_value = ".")]
        data_dir: String,

        /// Directory for the rendered charts (defaults to the data directory)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Render a single operation (insert, find, remove)
        #[arg(long)]
        operation: Option<String>,

        /// Image format (png, svg)
        #[arg(short, long, default_value = "png")]
        format: String,
    },

    /// Render the combined comparison figure
    ///
    /// Draws the three operations side by side in one figure under a
    /// shared title, with compact legends and axis labels.
    Combined {
        /// Directory containing the benchmark CSV files
        #[arg(short, long, default_value = ".")]
        data_dir: String,

        /// Output file path (defaults to benchmark_combined.<format> in the
        /// data directory; the extension selects the backend)
        #[arg(short, long)]
        output: Option<String>,

        /// Image format when no output path is given (png, svg)
        #[arg(short, long, default_value = "png")]
        format: String,
    },

    /// Write the summary statistics report
    ///
    /// Computes size range, per-case min/max latencies, and the worst/best
    /// ratio at the largest size for each operation.
    Stats {
        /// Directory containing the benchmark CSV files
        #[arg(short, long, default_value = ".")]
        data_dir: String,

        /// Output file path (defaults to benchmark_statistics.txt in the
        /// data directory; JSON goes to stdout unless set)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Generate all charts, the combined figure, and the statistics report
    ///
    /// The full pipeline over the three CSV files. Per-operation charts
    /// render in parallel.
    Report {
        /// Directory containing the benchmark CSV files
        #[arg(short, long, default_value = ".")]
        data_dir: String,

        /// Directory for all outputs (defaults to the data directory)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Image format for the charts (png, svg)
        #[arg(short, long, default_value = "png")]
        format: String,
    },

    /// Generate shell completion scripts
    ///
    /// Supported shells: bash, zsh, fish, powershell, elvish
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: String,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` with a descriptive message if file I/O, CSV loading,
    /// or chart rendering fails.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Chart {
                data_dir,
                out_dir,
                operation,
                format,
            } => commands::chart(&data_dir, out_dir.as_deref(), operation.as_deref(), &format),
            Commands::Combined {
                data_dir,
                output,
                format,
            } => commands::combined(&data_dir, output.as_deref(), &format),
            Commands::Stats {
                data_dir,
                output,
                format,
            } => commands::stats(&data_dir, output.as_deref(), &format),
            Commands::Report {
                data_dir,
                out_dir,
                format,
            } => commands::report(&data_dir, out_dir.as_deref(), &format),
            Commands::Completions { shell } => commands::completions(&shell),
        }
        .map_err(|e| e.to_string())
    }
}
