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

//! Property tests for the statistics invariants.

use benchviz_core::{render_text, LatencyRow, LatencyTable, Operation, OperationSummary};
use proptest::prelude::*;

fn row_strategy() -> impl Strategy<Value = LatencyRow> {
    (
        1u64..1_000_000,
        0.001f64..1e6,
        0.001f64..1e6,
        0.001f64..1e6,
    )
        .prop_map(|(size, best, average, worst)| LatencyRow {
            size,
            best,
            average,
            worst,
        })
}

proptest! {
    #[test]
    fn summary_bounds_hold(rows in proptest::collection::vec(row_strategy(), 1..50)) {
        let table = LatencyTable::new(Operation::Insert, rows);
        let summary = OperationSummary::compute(&table).unwrap();

        prop_assert!(summary.best_min <= summary.best_max);
        prop_assert!(summary.average_min <= summary.average_max);
        prop_assert!(summary.worst_min <= summary.worst_max);
        prop_assert!(summary.size_min <= summary.size_max);
        prop_assert!(summary.worst_best_ratio > 0.0);
    }

    #[test]
    fn summary_extremes_come_from_rows(rows in proptest::collection::vec(row_strategy(), 1..50)) {
        let table = LatencyTable::new(Operation::Remove, rows.clone());
        let summary = OperationSummary::compute(&table).unwrap();

        prop_assert!(rows.iter().any(|r| r.best == summary.best_min));
        prop_assert!(rows.iter().any(|r| r.best == summary.best_max));
        prop_assert!(rows.iter().any(|r| r.worst == summary.worst_max));
        prop_assert!(rows.iter().any(|r| r.size == summary.size_max));
    }

    #[test]
    fn report_renders_every_operation_block(rows in proptest::collection::vec(row_strategy(), 1..20)) {
        let summaries: Vec<OperationSummary> = Operation::all()
            .iter()
            .map(|&op| {
                OperationSummary::compute(&LatencyTable::new(op, rows.clone())).unwrap()
            })
            .collect();
        let text = render_text(&summaries);

        prop_assert!(text.starts_with("=== AVL H-Tree Performance Statistics ==="));
        prop_assert!(text.contains("INSERT Operation:"));
        prop_assert!(text.contains("FIND Operation:"));
        prop_assert!(text.contains("REMOVE Operation:"));
        prop_assert!(text.ends_with('\n'));
    }
}
