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

//! Error types for chart rendering.

use thiserror::Error;

/// Chart rendering error types.
///
/// The `plotters` drawing error is generic over the backend, so it is
/// stringified at this boundary rather than carried as a source.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A table with no data rows cannot be plotted.
    #[error("No data rows to plot for {operation} benchmark")]
    EmptyTable {
        /// Name of the operation whose table was empty.
        operation: String,
    },

    /// The combined figure was given no tables.
    #[error("No tables to plot")]
    NoTables,

    /// Error reported by the drawing backend.
    #[error("Chart rendering error: {0}")]
    Backend(String),
}

/// Convenience type alias for `Result` with `ChartError`.
pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_display() {
        let err = ChartError::EmptyTable {
            operation: "find".to_string(),
        };
        assert_eq!(err.to_string(), "No data rows to plot for find benchmark");
    }

    #[test]
    fn test_no_tables_display() {
        assert_eq!(ChartError::NoTables.to_string(), "No tables to plot");
    }

    #[test]
    fn test_backend_display() {
        let err = ChartError::Backend("font not found".to_string());
        assert_eq!(err.to_string(), "Chart rendering error: font not found");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChartError>();
    }
}
