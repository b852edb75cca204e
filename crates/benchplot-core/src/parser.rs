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

//! Single-pass record parser for csParallelTask log text.
//!
//! The parser walks the input line by line, classifies each line once via
//! [`classify`], and dispatches on the result. At most one record is open at
//! a time; it is sealed when the next boundary line (section title or inline
//! execution) appears, or when input ends. Field lines overwrite earlier
//! values for the same open record, and header lines overwrite earlier
//! header values, so the last occurrence always wins.
//!
//! The parser never fails. Malformed or truncated input degrades to unknown
//! headers and/or fewer records; a field line with no open record to attach
//! to is silently discarded.

use crate::classify::{classify, LineKind};
use crate::record::{BenchmarkRecord, ParsedRun, RunHeader};

/// Name given to records produced by the inline `execute(...)` style, which
/// reports timings without numbered sections.
pub const INLINE_EXEC_NAME: &str = "execution by name";

/// Parser working state: the run headers, the sealed records, and the single
/// open record threaded through the scan.
#[derive(Debug, Default)]
struct ParserState {
    header: RunHeader,
    records: Vec<BenchmarkRecord>,
    open: Option<BenchmarkRecord>,
}

impl ParserState {
    /// Seal the open record, if any, appending it to the output sequence.
    fn seal(&mut self) {
        if let Some(record) = self.open.take() {
            self.records.push(record);
        }
    }

    /// Record boundary: seal the previous record, then open a fresh one.
    fn open_record(&mut self, name: &str, t_par: Option<u64>) {
        self.seal();
        self.open = Some(BenchmarkRecord {
            name: name.to_string(),
            t_seq: None,
            t_par,
            speedup: None,
        });
    }

    fn dispatch(&mut self, kind: LineKind<'_>) {
        match kind {
            LineKind::Threads(n) => self.header.n_threads = Some(n),
            LineKind::ProblemSize(n) => self.header.problem_size = Some(n),
            LineKind::Section(title) => self.open_record(title, None),
            LineKind::SeqTime(us) => {
                if let Some(open) = self.open.as_mut() {
                    open.t_seq = Some(us);
                }
            }
            LineKind::ParTime(us) => {
                if let Some(open) = self.open.as_mut() {
                    open.t_par = Some(us);
                }
            }
            LineKind::Speedup(ratio) => {
                if let Some(open) = self.open.as_mut() {
                    open.speedup = Some(ratio);
                }
            }
            // Boundary-opening, not seal-on-sight: the synthetic record
            // stays open so a trailing seq/speedup line can still attach.
            LineKind::InlineExec(us) => self.open_record(INLINE_EXEC_NAME, Some(us)),
            LineKind::Other => {}
        }
    }
}

/// Parse the full log text into headers and an ordered record sequence.
///
/// Pure function of the input: the same text always yields the same
/// [`ParsedRun`], and no input can make it fail.
///
/// # Examples
///
/// ```rust
/// let run = benchplot_core::parse(
///     "csParallelTask - 4 threads\n\
///      N = 100\n\
///      1. Sort\n\
///      Temps seq : 500 us\n\
///      Temps par : 150 us\n\
///      Speedup : 3.33x\n",
/// );
/// assert_eq!(run.header.n_threads, Some(4));
/// assert_eq!(run.header.problem_size, Some(100));
/// assert_eq!(run.records.len(), 1);
/// assert_eq!(run.records[0].name, "Sort");
/// assert_eq!(run.records[0].t_seq, Some(500));
/// assert_eq!(run.records[0].t_par, Some(150));
/// assert_eq!(run.records[0].speedup, Some(3.33));
/// ```
pub fn parse(text: &str) -> ParsedRun {
    let mut state = ParserState::default();
    for line in text.lines() {
        state.dispatch(classify(line));
    }
    // Flush-on-end: the final record has no following boundary to seal it.
    state.seal();
    ParsedRun {
        header: state.header,
        records: state.records,
    }
}
