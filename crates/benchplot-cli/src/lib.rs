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

//! benchplot CLI library: input selection, host probe, and pipeline wiring.
//!
//! The flow is read -> parse -> probe -> render. Parsing and host probing
//! never fail; an input stream with no plottable records skips rendering
//! with a message and still counts as success.

pub mod error;
pub mod host;
pub mod input;

use std::env;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::error::CliError;

/// Fixed output filename, kept from the producing program's convention.
pub const OUTPUT_FILENAME: &str = "csParallelTask_benchmark.png";

/// Compute the output path: [`OUTPUT_FILENAME`] two directories above the
/// running executable (next to the project the binary was installed into),
/// falling back to the current directory when the executable path is
/// unavailable.
pub fn output_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.parent()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
        })
        .unwrap_or_else(|| PathBuf::from("."))
        .join(OUTPUT_FILENAME)
}

/// Run the full pipeline for the given input source.
///
/// `input` of `None` reads standard input to end. Returns `Ok(())` both on
/// a saved figure and on the no-data case; only input I/O and rendering can
/// fail.
pub fn run(input: Option<&Path>) -> Result<(), CliError> {
    let text = input::read_input(input)?;
    let parsed = benchplot_core::parse(&text);
    let host = host::probe();

    if parsed.plottable().is_empty() {
        println!("{}", "Aucune donnée à afficher.".yellow());
        return Ok(());
    }

    let out_path = output_path();
    benchplot_render::render_chart(&parsed.header, &host, &parsed.records, &out_path)?;
    println!(
        "{}",
        format!("Figure sauvegardée : {}", out_path.display()).green()
    );
    Ok(())
}
