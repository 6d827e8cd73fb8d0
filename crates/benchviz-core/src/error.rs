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

//! Error types for benchmark data loading and statistics.

use thiserror::Error;

/// Benchmark data error types.
///
/// CSV parsing and typing errors pass through from the underlying `csv`
/// crate unchanged; this enum only adds the handful of conditions the data
/// layer itself can detect.
///
/// # Examples
///
/// ```
/// use benchviz_core::CoreError;
///
/// let err = CoreError::RowLimit {
///     limit: 1_000_000,
///     actual: 1_000_001,
/// };
/// assert!(err.to_string().contains("exceeds maximum"));
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// I/O error during file access.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    ///
    /// Covers malformed records, width mismatches, and field type errors
    /// raised during deserialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row count exceeded the configured limit.
    #[error("Row limit exceeded: row count {actual} exceeds maximum {limit}")]
    RowLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Row count at which reading stopped (1-based).
        actual: usize,
    },

    /// A table with no data rows was given to an operation that needs at
    /// least one measurement.
    #[error("No data rows for {operation} benchmark")]
    EmptyTable {
        /// Name of the operation whose table was empty.
        operation: String,
    },

    /// An operation name did not match `insert`, `find`, or `remove`.
    #[error("Unknown operation '{0}' (expected insert, find, or remove)")]
    UnknownOperation(String),
}

/// Convenience type alias for `Result` with `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_limit_display() {
        let err = CoreError::RowLimit {
            limit: 1_000_000,
            actual: 1_500_000,
        };
        assert_eq!(
            err.to_string(),
            "Row limit exceeded: row count 1500000 exceeds maximum 1000000"
        );
    }

    #[test]
    fn test_empty_table_display() {
        let err = CoreError::EmptyTable {
            operation: "insert".to_string(),
        };
        assert_eq!(err.to_string(), "No data rows for insert benchmark");
    }

    #[test]
    fn test_unknown_operation_display() {
        let err = CoreError::UnknownOperation("sort".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown operation 'sort' (expected insert, find, or remove)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CoreError::from(io_err);
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }

    #[test]
    fn test_error_debug() {
        let err = CoreError::UnknownOperation("sort".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("UnknownOperation"));
        assert!(debug.contains("sort"));
    }
}
