// benchplot - csParallelTask benchmark log visualizer
//
// Copyright (c) 2026 benchplot contributors.
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

//! benchplot command line interface.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Plot csParallelTask benchmark output as a two-panel PNG chart.
///
/// Reads the benchmark program's text output from a file or from standard
/// input, extracts per-section sequential/parallel timings and reported
/// speedups, and saves a grouped-bar comparison chart.
///
/// # Examples
///
/// ```bash
/// # From a captured log file
/// benchplot bench_output.txt
///
/// # Piped straight from the benchmark program
/// csParallelTask_test | benchplot
/// ```
#[derive(Parser)]
#[command(name = "benchplot")]
#[command(author, version, about = "Plot csParallelTask benchmark output", long_about = None)]
struct Cli {
    /// Benchmark log file to read; standard input when omitted
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match benchplot_cli::run(cli.input.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
