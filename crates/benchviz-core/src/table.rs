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

//! Typed benchmark tables.

use crate::operation::{Case, Operation};
use serde::{Deserialize, Serialize};

/// One measurement row: the latencies observed at one input size.
///
/// Maps directly onto the harness's CSV header `size,best,average,worst`.
/// Latencies are nanoseconds per operation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatencyRow {
    /// Number of elements in the tree when the measurement was taken.
    pub size: u64,
    /// Best case latency in nanoseconds.
    pub best: f64,
    /// Average case latency in nanoseconds.
    pub average: f64,
    /// Worst case latency in nanoseconds.
    pub worst: f64,
}

impl LatencyRow {
    /// The latency value for one case.
    pub fn value(&self, case: Case) -> f64 {
        match case {
            Case::Best => self.best,
            Case::Average => self.average,
            Case::Worst => self.worst,
        }
    }
}

/// All measurements for one operation, in the order the harness wrote them.
///
/// The harness emits rows in ascending size order; the table preserves that
/// order and does not re-sort.
#[derive(Debug, Clone)]
pub struct LatencyTable {
    operation: Operation,
    rows: Vec<LatencyRow>,
}

impl LatencyTable {
    /// Create a table from already-parsed rows.
    pub fn new(operation: Operation, rows: Vec<LatencyRow>) -> Self {
        Self { operation, rows }
    }

    /// The operation this table measures.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The measurement rows.
    pub fn rows(&self) -> &[LatencyRow] {
        &self.rows
    }

    /// Number of measurement rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `(size, latency)` series for one case, ready for plotting.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchviz_core::{Case, LatencyRow, LatencyTable, Operation};
    ///
    /// let table = LatencyTable::new(
    ///     Operation::Insert,
    ///     vec![LatencyRow { size: 10, best: 1.0, average: 2.0, worst: 3.0 }],
    /// );
    /// assert_eq!(table.series(Case::Worst), vec![(10, 3.0)]);
    /// ```
    pub fn series(&self, case: Case) -> Vec<(u64, f64)> {
        self.rows
            .iter()
            .map(|row| (row.size, row.value(case)))
            .collect()
    }

    /// Minimum latency in one column, or `None` for an empty table.
    pub fn min(&self, case: Case) -> Option<f64> {
        self.rows
            .iter()
            .map(|row| row.value(case))
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
    }

    /// Maximum latency in one column, or `None` for an empty table.
    pub fn max(&self, case: Case) -> Option<f64> {
        self.rows
            .iter()
            .map(|row| row.value(case))
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }

    /// Smallest measured input size.
    pub fn size_min(&self) -> Option<u64> {
        self.rows.iter().map(|row| row.size).min()
    }

    /// Largest measured input size.
    pub fn size_max(&self) -> Option<u64> {
        self.rows.iter().map(|row| row.size).max()
    }

    /// Maximum latency across all three columns. Used for chart y-ranges.
    pub fn latency_max(&self) -> Option<f64> {
        Case::all()
            .iter()
            .filter_map(|&case| self.max(case))
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }

    /// Worst/best latency ratio of the last row.
    ///
    /// The harness writes rows in ascending size order, so the last row is
    /// the largest input size.
    pub fn worst_best_ratio_at_max_size(&self) -> Option<f64> {
        self.rows.last().map(|row| row.worst / row.best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LatencyTable {
        LatencyTable::new(
            Operation::Insert,
            vec![
                LatencyRow {
                    size: 10,
                    best: 12.0,
                    average: 20.0,
                    worst: 30.0,
                },
                LatencyRow {
                    size: 100,
                    best: 10.0,
                    average: 25.0,
                    worst: 45.0,
                },
                LatencyRow {
                    size: 1000,
                    best: 15.0,
                    average: 40.0,
                    worst: 60.0,
                },
            ],
        )
    }

    #[test]
    fn test_row_value_by_case() {
        let row = LatencyRow {
            size: 10,
            best: 1.0,
            average: 2.0,
            worst: 3.0,
        };
        assert_eq!(row.value(Case::Best), 1.0);
        assert_eq!(row.value(Case::Average), 2.0);
        assert_eq!(row.value(Case::Worst), 3.0);
    }

    #[test]
    fn test_series_extraction() {
        let table = sample();
        assert_eq!(
            table.series(Case::Best),
            vec![(10, 12.0), (100, 10.0), (1000, 15.0)]
        );
    }

    #[test]
    fn test_column_extremes() {
        let table = sample();
        assert_eq!(table.min(Case::Best), Some(10.0));
        assert_eq!(table.max(Case::Best), Some(15.0));
        assert_eq!(table.min(Case::Worst), Some(30.0));
        assert_eq!(table.max(Case::Worst), Some(60.0));
    }

    #[test]
    fn test_size_range() {
        let table = sample();
        assert_eq!(table.size_min(), Some(10));
        assert_eq!(table.size_max(), Some(1000));
    }

    #[test]
    fn test_latency_max_spans_columns() {
        let table = sample();
        assert_eq!(table.latency_max(), Some(60.0));
    }

    #[test]
    fn test_ratio_uses_last_row() {
        let table = sample();
        assert_eq!(table.worst_best_ratio_at_max_size(), Some(4.0));
    }

    #[test]
    fn test_empty_table() {
        let table = LatencyTable::new(Operation::Find, Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.min(Case::Best), None);
        assert_eq!(table.max(Case::Worst), None);
        assert_eq!(table.size_min(), None);
        assert_eq!(table.latency_max(), None);
        assert_eq!(table.worst_best_ratio_at_max_size(), None);
    }

    #[test]
    fn test_operation_accessor() {
        assert_eq!(sample().operation(), Operation::Insert);
    }
}
