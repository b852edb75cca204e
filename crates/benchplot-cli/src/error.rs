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

//! Structured error types for the benchplot CLI.
//!
//! Only two things can fail at this level: reading the input and writing
//! the chart. Malformed benchmark text and host-probe failures are not
//! errors anywhere in the pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for benchplot CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (input file or stdin read).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path (or `<stdin>`) that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Chart rendering failed (drawing backend or output file).
    #[error("Render error: {0}")]
    Render(String),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<benchplot_render::RenderError> for CliError {
    fn from(source: benchplot_render::RenderError) -> Self {
        Self::Render(source.to_string())
    }
}
