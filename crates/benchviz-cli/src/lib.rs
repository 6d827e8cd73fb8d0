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

//! BenchViz CLI library for command-line parsing and execution.
//!
//! This library provides the command implementations behind the `benchviz`
//! binary, which turns the AVL H-Tree benchmark harness's CSV output into
//! charts and a statistics report.
//!
//! # Commands
//!
//! ## Rendering
//!
//! - **chart**: Render one line chart per operation (insert, find, remove)
//! - **combined**: Render the side-by-side comparison figure
//!
//! ## Analysis & Statistics
//!
//! - **stats**: Write the min/max/ratio summary report (text or JSON)
//!
//! ## Everything at once
//!
//! - **report**: Charts, combined figure, and statistics in one run
//!
//! ## Utilities
//!
//! - **completions**: Generate shell completion scripts (bash, zsh, fish,
//!   powershell, elvish)
//!
//! # Examples
//!
//! ```no_run
//! use benchviz_cli::commands::report;
//!
//! # fn main() -> Result<(), benchviz_cli::error::CliError> {
//! // Render everything from the CSVs in ./results into ./results
//! report("results", None, "png")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Command functions return `Result<(), CliError>`; the dispatcher in
//! [`cli`] flattens errors to strings for the binary's single
//! `Error: <message>` reporting path.

pub mod cli;
pub mod commands;
pub mod error;
