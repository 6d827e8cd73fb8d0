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

//! Shell completion generation - Tab completion for various shells

use crate::cli::Cli;
use crate::error::CliError;
use clap::{Command, CommandFactory};
use clap_complete::shells::{Bash, Elvish, Fish, PowerShell, Zsh};
use clap_complete::{generate, Generator};
use std::io;

/// Generate a shell completion script to stdout.
///
/// # Arguments
///
/// * `shell` - The target shell name (bash, zsh, fish, powershell/pwsh,
///   elvish), case-insensitive
///
/// # Errors
///
/// Returns `Err` if the shell is not supported.
pub fn completions(shell: &str) -> Result<(), CliError> {
    let mut cmd = Cli::command();
    match shell.to_lowercase().as_str() {
        "bash" => generate_for(Bash, &mut cmd),
        "zsh" => generate_for(Zsh, &mut cmd),
        "fish" => generate_for(Fish, &mut cmd),
        "powershell" | "pwsh" => generate_for(PowerShell, &mut cmd),
        "elvish" => generate_for(Elvish, &mut cmd),
        other => Err(CliError::invalid_input(format!(
            "Unsupported shell: '{}'. Supported shells: bash, zsh, fish, powershell, elvish",
            other
        ))),
    }
}

fn generate_for<G: Generator>(generator: G, cmd: &mut Command) -> Result<(), CliError> {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
    Ok(())
}
