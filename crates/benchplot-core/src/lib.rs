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

//! Record parser and data model for csParallelTask benchmark logs.
//!
//! The csParallelTask harness prints loosely-formatted, human-readable text:
//! a thread-count banner, a problem-size announcement, numbered sections with
//! `Temps seq` / `Temps par` / `Speedup` lines, and an alternate inline
//! `execute(name) : N us` reporting style, all interleaved with decorative
//! banners and validation output. This crate turns that text into structured
//! [`BenchmarkRecord`]s plus a [`RunHeader`], with a single forward pass and
//! no failure mode: malformed input degrades to unknown headers and fewer
//! records, never an error.
//!
//! # Quick Start
//!
//! ```rust
//! let run = benchplot_core::parse("1. Sort\nTemps seq : 500 us\nTemps par : 150 us\n");
//! assert_eq!(run.records[0].name, "Sort");
//! assert_eq!(run.records[0].t_seq, Some(500));
//! ```
//!
//! # Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` on the data model types.

mod classify;
mod parser;
mod record;

pub use classify::{classify, LineKind};
pub use parser::{parse, INLINE_EXEC_NAME};
pub use record::{BenchmarkRecord, HostInfo, ParsedRun, RunHeader};
