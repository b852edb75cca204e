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

//! Chart rendering for parsed csParallelTask benchmark runs.
//!
//! Produces a single PNG with two stacked panels: grouped sequential vs.
//! parallel time bars, and reported-speedup bars with a 1.0 reference line.
//! The chart annotates itself with the run header (thread count, problem
//! size) and a best-effort host description; it never recomputes a speedup.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use benchplot_core::HostInfo;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), benchplot_render::RenderError> {
//! let run = benchplot_core::parse("1. Sort\nTemps seq : 500 us\nTemps par : 150 us\n");
//! benchplot_render::render_chart(
//!     &run.header,
//!     &HostInfo::default(),
//!     &run.records,
//!     Path::new("benchmark.png"),
//! )?;
//! # Ok(())
//! # }
//! ```

mod chart;
mod error;

pub use chart::{compose_caption, render_chart, truncate_label, IMAGE_SIZE, MAX_LABEL_CHARS};
pub use error::{RenderError, Result};
