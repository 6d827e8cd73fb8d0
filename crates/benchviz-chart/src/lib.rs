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

//! Line chart rendering for benchmark latency tables.
//!
//! Renders the per-operation charts (three series against input size) and
//! the combined side-by-side comparison figure over the `plotters` backend.
//! The output format follows the file extension: `.svg` uses the SVG
//! backend, anything else is rasterized through the bitmap backend.
//!
//! # Examples
//!
//! ```no_run
//! use benchviz_chart::{render_operation, ChartStyle};
//! use benchviz_core::{read_table, Operation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = read_table("benchmark_insert.csv", Operation::Insert)?;
//! render_operation(&table, "benchmark_insert.png", &ChartStyle::default())?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod render;
pub mod style;

pub use error::{ChartError, Result};
pub use render::{render_combined, render_operation};
pub use style::{case_color, ChartStyle};
