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

//! Per-operation summary statistics and the plain-text report.
//!
//! The report is limited to column extremes and the worst/best ratio at the
//! largest input size. Anything beyond min/max ratios is out of scope.

use crate::error::{CoreError, Result};
use crate::operation::Case;
use crate::table::LatencyTable;
use serde::Serialize;
use std::fmt::Write as _;

/// Summary statistics for one operation's benchmark table.
///
/// # Examples
///
/// ```
/// use benchviz_core::{LatencyRow, LatencyTable, Operation, OperationSummary};
///
/// let table = LatencyTable::new(
///     Operation::Insert,
///     vec![
///         LatencyRow { size: 10, best: 12.0, average: 20.0, worst: 30.0 },
///         LatencyRow { size: 100, best: 10.0, average: 25.0, worst: 45.0 },
///     ],
/// );
///
/// let summary = OperationSummary::compute(&table).unwrap();
/// assert_eq!(summary.operation, "insert");
/// assert_eq!(summary.best_min, 10.0);
/// assert_eq!(summary.worst_max, 45.0);
/// assert_eq!(summary.worst_best_ratio, 4.5);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct OperationSummary {
    /// Lowercase operation name.
    pub operation: String,
    /// Smallest measured input size.
    pub size_min: u64,
    /// Largest measured input size.
    pub size_max: u64,
    /// Best case column minimum, in nanoseconds.
    pub best_min: f64,
    /// Best case column maximum, in nanoseconds.
    pub best_max: f64,
    /// Average case column minimum, in nanoseconds.
    pub average_min: f64,
    /// Average case column maximum, in nanoseconds.
    pub average_max: f64,
    /// Worst case column minimum, in nanoseconds.
    pub worst_min: f64,
    /// Worst case column maximum, in nanoseconds.
    pub worst_max: f64,
    /// Worst/best latency ratio of the last row (largest input size).
    pub worst_best_ratio: f64,
}

impl OperationSummary {
    /// Compute the summary for one table.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyTable`] if the table has no data rows.
    pub fn compute(table: &LatencyTable) -> Result<Self> {
        let operation = table.operation();
        let empty = || CoreError::EmptyTable {
            operation: operation.name().to_string(),
        };
        Ok(Self {
            operation: operation.name().to_string(),
            size_min: table.size_min().ok_or_else(empty)?,
            size_max: table.size_max().ok_or_else(empty)?,
            best_min: table.min(Case::Best).ok_or_else(empty)?,
            best_max: table.max(Case::Best).ok_or_else(empty)?,
            average_min: table.min(Case::Average).ok_or_else(empty)?,
            average_max: table.max(Case::Average).ok_or_else(empty)?,
            worst_min: table.min(Case::Worst).ok_or_else(empty)?,
            worst_max: table.max(Case::Worst).ok_or_else(empty)?,
            worst_best_ratio: table.worst_best_ratio_at_max_size().ok_or_else(empty)?,
        })
    }
}

/// Render summaries as the plain-text statistics report.
///
/// The layout matches the report the benchmark harness's consumers already
/// know: a header line, then one block per operation with size range,
/// min-max per case to two decimals, and the worst/best ratio at the
/// largest size.
pub fn render_text(summaries: &[OperationSummary]) -> String {
    let mut out = String::new();
    out.push_str("=== AVL H-Tree Performance Statistics ===\n\n");

    for summary in summaries {
        let _ = writeln!(out, "{} Operation:", summary.operation.to_uppercase());
        let _ = writeln!(
            out,
            "  Size range: {} - {} elements",
            summary.size_min, summary.size_max
        );
        let _ = writeln!(
            out,
            "  Best case:    {:.2} - {:.2} ns",
            summary.best_min, summary.best_max
        );
        let _ = writeln!(
            out,
            "  Average case: {:.2} - {:.2} ns",
            summary.average_min, summary.average_max
        );
        let _ = writeln!(
            out,
            "  Worst case:   {:.2} - {:.2} ns",
            summary.worst_min, summary.worst_max
        );
        let _ = writeln!(
            out,
            "  Worst/Best ratio at max size: {:.2}x",
            summary.worst_best_ratio
        );
        out.push('\n');
    }

    out
}
