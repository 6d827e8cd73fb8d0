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

//! Load benchmark CSV files into [`LatencyTable`]s.
//!
//! The harness writes one file per operation with the header
//! `size,best,average,worst`. Parsing and typing are delegated to the `csv`
//! crate with serde deserialization; malformed input surfaces as the
//! library's own errors.

use crate::error::{CoreError, Result};
use crate::operation::Operation;
use crate::table::{LatencyRow, LatencyTable};
use std::io;
use std::path::Path;

/// Default maximum number of rows to read from one file.
///
/// Prevents unbounded memory allocation from a runaway or corrupt input
/// file. A real benchmark sweep has a few dozen rows, so the limit is far
/// above anything legitimate.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for CSV reading.
///
/// # Examples
///
/// ```
/// use benchviz_core::ReadConfig;
///
/// let config = ReadConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.has_headers);
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
///
/// ## Tab-delimited input
///
/// ```
/// use benchviz_core::ReadConfig;
///
/// let config = ReadConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ReadConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether the first row contains column headers (default: `true`).
    ///
    /// When `false`, fields are read positionally as
    /// size, best, average, worst.
    pub has_headers: bool,

    /// Whether to trim leading/trailing whitespace from fields
    /// (default: `true`).
    pub trim: bool,

    /// Maximum number of rows to read (default: 1,000,000).
    pub max_rows: usize,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Read one benchmark CSV file with the default configuration.
///
/// # Arguments
///
/// * `path` - Path to the CSV file
/// * `operation` - The operation the file measures
///
/// # Errors
///
/// Returns `Err` if the file cannot be opened, a record is malformed, a
/// field fails to parse as its column type, or the row limit is exceeded.
///
/// # Examples
///
/// ```no_run
/// use benchviz_core::{read_table, Operation};
///
/// # fn main() -> benchviz_core::Result<()> {
/// let table = read_table("benchmark_find.csv", Operation::Find)?;
/// println!("{} sizes measured", table.len());
/// # Ok(())
/// # }
/// ```
pub fn read_table<P: AsRef<Path>>(path: P, operation: Operation) -> Result<LatencyTable> {
    read_table_with_config(path, operation, &ReadConfig::default())
}

/// Read one benchmark CSV file with a custom configuration.
pub fn read_table_with_config<P: AsRef<Path>>(
    path: P,
    operation: Operation,
    config: &ReadConfig,
) -> Result<LatencyTable> {
    let reader = reader_builder(config).from_path(path.as_ref())?;
    collect_rows(reader, operation, config)
}

/// Read benchmark CSV data from any reader.
///
/// Useful for tests and for data that does not live in a file.
pub fn read_table_from_reader<R: io::Read>(
    rdr: R,
    operation: Operation,
    config: &ReadConfig,
) -> Result<LatencyTable> {
    let reader = reader_builder(config).from_reader(rdr);
    collect_rows(reader, operation, config)
}

fn reader_builder(config: &ReadConfig) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        });
    builder
}

fn collect_rows<R: io::Read>(
    mut reader: csv::Reader<R>,
    operation: Operation,
    config: &ReadConfig,
) -> Result<LatencyTable> {
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        if rows.len() >= config.max_rows {
            return Err(CoreError::RowLimit {
                limit: config.max_rows,
                actual: rows.len() + 1,
            });
        }
        let row: LatencyRow = result?;
        rows.push(row);
    }
    Ok(LatencyTable::new(operation, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Case;
    use std::io::Cursor;

    const SAMPLE: &str = "size,best,average,worst\n10,12.5,20.0,30.5\n100,11.0,25.0,45.0\n";

    #[test]
    fn test_read_from_reader() {
        let table =
            read_table_from_reader(Cursor::new(SAMPLE), Operation::Insert, &ReadConfig::default())
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.operation(), Operation::Insert);
        assert_eq!(table.rows()[0].size, 10);
        assert_eq!(table.rows()[0].best, 12.5);
        assert_eq!(table.rows()[1].worst, 45.0);
    }

    #[test]
    fn test_read_trims_whitespace() {
        let data = "size,best,average,worst\n10, 12.5 , 20.0 , 30.5\n";
        let table =
            read_table_from_reader(Cursor::new(data), Operation::Find, &ReadConfig::default())
                .unwrap();
        assert_eq!(table.rows()[0].average, 20.0);
    }

    #[test]
    fn test_read_tab_delimited() {
        let data = "size\tbest\taverage\tworst\n10\t1.0\t2.0\t3.0\n";
        let config = ReadConfig {
            delimiter: b'\t',
            ..Default::default()
        };
        let table = read_table_from_reader(Cursor::new(data), Operation::Find, &config).unwrap();
        assert_eq!(table.series(Case::Average), vec![(10, 2.0)]);
    }

    #[test]
    fn test_read_without_headers_is_positional() {
        let data = "10,1.0,2.0,3.0\n50,4.0,5.0,6.0\n";
        let config = ReadConfig {
            has_headers: false,
            ..Default::default()
        };
        let table = read_table_from_reader(Cursor::new(data), Operation::Remove, &config).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].size, 50);
    }

    #[test]
    fn test_read_header_only_is_empty_table() {
        let data = "size,best,average,worst\n";
        let table =
            read_table_from_reader(Cursor::new(data), Operation::Insert, &ReadConfig::default())
                .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_read_rejects_non_numeric_field() {
        let data = "size,best,average,worst\n10,fast,20.0,30.0\n";
        let result =
            read_table_from_reader(Cursor::new(data), Operation::Insert, &ReadConfig::default());
        assert!(matches!(result, Err(CoreError::Csv(_))));
    }

    #[test]
    fn test_read_rejects_missing_column() {
        let data = "size,best,average\n10,1.0,2.0\n";
        let result =
            read_table_from_reader(Cursor::new(data), Operation::Insert, &ReadConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_read_enforces_row_limit() {
        let data = "size,best,average,worst\n10,1.0,2.0,3.0\n20,1.0,2.0,3.0\n30,1.0,2.0,3.0\n";
        let config = ReadConfig {
            max_rows: 2,
            ..Default::default()
        };
        let result = read_table_from_reader(Cursor::new(data), Operation::Insert, &config);
        assert!(matches!(
            result,
            Err(CoreError::RowLimit {
                limit: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_read_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("benchmark_insert.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        let table = read_table(&path, Operation::Insert).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let result = read_table("/nonexistent/benchmark_insert.csv", Operation::Insert);
        assert!(result.is_err());
    }
}
