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

//! Error types for chart rendering.

use thiserror::Error;

/// Result alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while producing the chart image.
///
/// Parsing tolerates everything, so these are the only failure paths in the
/// pipeline besides input I/O: the drawing backend and the output file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No record carried any timing data, so there is nothing to draw.
    ///
    /// Callers normally check [`ParsedRun::plottable`] first and skip
    /// rendering with a message instead of hitting this.
    ///
    /// [`ParsedRun::plottable`]: benchplot_core::ParsedRun::plottable
    #[error("no records with timing data to plot")]
    NoData,

    /// The drawing backend or output file reported an error.
    #[error("chart rendering failed: {0}")]
    Draw(String),
}

impl RenderError {
    /// Wrap any backend error into [`RenderError::Draw`].
    pub fn draw(source: impl std::fmt::Display) -> Self {
        Self::Draw(source.to_string())
    }
}
