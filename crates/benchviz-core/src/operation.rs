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

//! Benchmarked operations and latency cases.

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// A benchmarked AVL H-Tree operation.
///
/// The external harness measures three operations and writes one CSV file
/// per operation, named `benchmark_<operation>.csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Key insertion.
    Insert,
    /// Key lookup.
    Find,
    /// Key removal.
    Remove,
}

impl Operation {
    /// All operations in canonical order (insert, find, remove).
    pub fn all() -> [Operation; 3] {
        [Operation::Insert, Operation::Find, Operation::Remove]
    }

    /// Lowercase operation name, as used in file names and the report.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Find => "find",
            Operation::Remove => "remove",
        }
    }

    /// Chart title fragment, e.g. `"Insert Operation"`.
    pub fn title(&self) -> &'static str {
        match self {
            Operation::Insert => "Insert Operation",
            Operation::Find => "Find Operation",
            Operation::Remove => "Remove Operation",
        }
    }

    /// Conventional input file name written by the benchmark harness.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchviz_core::Operation;
    ///
    /// assert_eq!(Operation::Insert.csv_file_name(), "benchmark_insert.csv");
    /// ```
    pub fn csv_file_name(&self) -> String {
        format!("benchmark_{}.csv", self.name())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insert" => Ok(Operation::Insert),
            "find" => Ok(Operation::Find),
            "remove" => Ok(Operation::Remove),
            other => Err(CoreError::UnknownOperation(other.to_string())),
        }
    }
}

/// A latency case within one benchmark table.
///
/// Each CSV row carries the best (minimum), average (mean), and worst
/// (maximum) observed latency at one input size, as pre-measured by the
/// harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Minimum observed latency.
    Best,
    /// Mean observed latency.
    Average,
    /// Maximum observed latency.
    Worst,
}

impl Case {
    /// All cases in column order (best, average, worst).
    pub fn all() -> [Case; 3] {
        [Case::Best, Case::Average, Case::Worst]
    }

    /// Full legend label, e.g. `"Best Case"`.
    pub fn label(&self) -> &'static str {
        match self {
            Case::Best => "Best Case",
            Case::Average => "Average Case",
            Case::Worst => "Worst Case",
        }
    }

    /// Compact legend label for the combined panels, e.g. `"Best"`.
    pub fn short_label(&self) -> &'static str {
        match self {
            Case::Best => "Best",
            Case::Average => "Average",
            Case::Worst => "Worst",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_order() {
        assert_eq!(
            Operation::all(),
            [Operation::Insert, Operation::Find, Operation::Remove]
        );
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::Insert.name(), "insert");
        assert_eq!(Operation::Find.name(), "find");
        assert_eq!(Operation::Remove.name(), "remove");
    }

    #[test]
    fn test_operation_titles() {
        assert_eq!(Operation::Insert.title(), "Insert Operation");
        assert_eq!(Operation::Remove.title(), "Remove Operation");
    }

    #[test]
    fn test_operation_csv_file_names() {
        assert_eq!(Operation::Find.csv_file_name(), "benchmark_find.csv");
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Remove.to_string(), "remove");
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("insert".parse::<Operation>().unwrap(), Operation::Insert);
        assert_eq!("FIND".parse::<Operation>().unwrap(), Operation::Find);
        assert_eq!("Remove".parse::<Operation>().unwrap(), Operation::Remove);
    }

    #[test]
    fn test_operation_from_str_rejects_unknown() {
        let err = "sort".parse::<Operation>().unwrap_err();
        assert!(err.to_string().contains("Unknown operation"));
    }

    #[test]
    fn test_case_order() {
        assert_eq!(Case::all(), [Case::Best, Case::Average, Case::Worst]);
    }

    #[test]
    fn test_case_labels() {
        assert_eq!(Case::Best.label(), "Best Case");
        assert_eq!(Case::Average.short_label(), "Average");
        assert_eq!(Case::Worst.label(), "Worst Case");
    }
}
