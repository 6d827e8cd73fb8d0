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

//! Benchmark latency data model, CSV loading, and summary statistics.
//!
//! This crate is the data layer of BenchViz. It loads the CSV files produced
//! by the AVL H-Tree benchmark harness (`size,best,average,worst` per row,
//! one file per operation) into typed tables, and computes the per-operation
//! summary statistics used by the text report.
//!
//! The data structure itself is external: this crate only models its
//! pre-measured timing output.
//!
//! # Examples
//!
//! ## Loading a benchmark table
//!
//! ```no_run
//! use benchviz_core::{read_table, Operation};
//!
//! # fn main() -> benchviz_core::Result<()> {
//! let table = read_table("benchmark_insert.csv", Operation::Insert)?;
//! for (size, latency) in table.series(benchviz_core::Case::Average) {
//!     println!("{} elements: {} ns", size, latency);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Computing summary statistics
//!
//! ```
//! use benchviz_core::{Case, LatencyRow, LatencyTable, Operation, OperationSummary};
//!
//! let table = LatencyTable::new(
//!     Operation::Find,
//!     vec![
//!         LatencyRow { size: 10, best: 5.0, average: 8.0, worst: 12.0 },
//!         LatencyRow { size: 100, best: 7.0, average: 14.0, worst: 28.0 },
//!     ],
//! );
//!
//! let summary = OperationSummary::compute(&table).unwrap();
//! assert_eq!(summary.size_max, 100);
//! assert_eq!(summary.worst_best_ratio, 4.0);
//! ```

pub mod error;
pub mod operation;
pub mod read;
pub mod stats;
pub mod table;

pub use error::{CoreError, Result};
pub use operation::{Case, Operation};
pub use read::{read_table, read_table_from_reader, read_table_with_config, ReadConfig};
pub use stats::{render_text, OperationSummary};
pub use table::{LatencyRow, LatencyTable};
