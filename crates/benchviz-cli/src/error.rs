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

//! Structured error types for the BenchViz CLI.
//!
//! All CLI operations return `Result<T, CliError>` for consistent error
//! reporting. Implements `Clone` so errors can cross the parallel rendering
//! path in the report command.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for BenchViz CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use benchviz_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or directory creation).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Benchmark data could not be loaded or summarized.
    ///
    /// This wraps errors from `benchviz-core` (CSV parsing, typing, empty
    /// tables).
    #[error("Data error: {0}")]
    Data(String),

    /// Chart rendering failed.
    ///
    /// This wraps errors from `benchviz-chart`.
    #[error("Render error: {0}")]
    Render(String),

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Invalid input provided by the user.
    ///
    /// This covers unknown operation names, image formats, output formats,
    /// and shells.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    ///
    /// # Arguments
    ///
    /// * `path` - The file path that caused the error
    /// * `source` - The underlying I/O error
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    ///
    /// # Arguments
    ///
    /// * `msg` - Description of the invalid input
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<benchviz_core::CoreError> for CliError {
    fn from(source: benchviz_core::CoreError) -> Self {
        Self::Data(source.to_string())
    }
}

impl From<benchviz_chart::ChartError> for CliError {
    fn from(source: benchviz_chart::ChartError) -> Self {
        Self::Render(source.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
