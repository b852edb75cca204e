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

//! Data model for parsed benchmark runs.
//!
//! Every numeric field is optional: the producing program's output format is
//! not contractually guaranteed, so absence is an ordinary data state rather
//! than an error. Times are microseconds as reported; `speedup` is only ever
//! the ratio the log itself printed, never recomputed here.

/// One measured unit of work extracted from the log.
///
/// A record is structurally valid with any subset of its optional fields
/// populated. Records lacking both `t_seq` and `t_par` survive parsing but
/// are dropped by [`ParsedRun::plottable`] before rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkRecord {
    /// Section title (or the fixed inline-execution label).
    pub name: String,
    /// Sequential execution time in microseconds, as reported.
    pub t_seq: Option<u64>,
    /// Parallel execution time in microseconds, as reported.
    pub t_par: Option<u64>,
    /// Reported seq/par ratio. Never recomputed from the times.
    pub speedup: Option<f64>,
}

impl BenchmarkRecord {
    /// True when at least one of the two timing fields is present.
    pub fn has_timing(&self) -> bool {
        self.t_seq.is_some() || self.t_par.is_some()
    }
}

/// Process-wide scalars describing the whole benchmark run.
///
/// Each is set at most once conceptually; when the corresponding header line
/// appears multiple times in the log, the last occurrence wins. `None` means
/// the log never announced the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunHeader {
    /// Thread count used by the benchmarked program.
    pub n_threads: Option<u64>,
    /// Problem size N.
    pub problem_size: Option<u64>,
}

/// Complete parser output: run headers plus the ordered record sequence.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedRun {
    /// Run-wide scalars (thread count, problem size).
    pub header: RunHeader,
    /// Records in the order their boundaries appeared in the log.
    pub records: Vec<BenchmarkRecord>,
}

impl ParsedRun {
    /// Records with at least one timing field, original order preserved.
    ///
    /// This is the renderer's input contract: records with neither `t_seq`
    /// nor `t_par` carry nothing to plot.
    pub fn plottable(&self) -> Vec<&BenchmarkRecord> {
        self.records.iter().filter(|r| r.has_timing()).collect()
    }
}

/// Read-only host snapshot used for chart annotation only.
///
/// Purely descriptive; never participates in parsing. Every lookup behind
/// the optional fields is best-effort, so `None` means "unknown", never an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostInfo {
    /// OS family, e.g. `linux`, `windows`, `macos`.
    pub system: String,
    /// Machine architecture, e.g. `x86_64`, `aarch64`.
    pub machine: String,
    /// Network host name, when discoverable.
    pub hostname: Option<String>,
    /// Coarse processor label (architecture-level, not the retail name).
    pub processor: Option<String>,
    /// Logical core count.
    pub cpu_count: Option<usize>,
    /// Human-readable CPU model name from the platform lookup chain.
    pub cpu_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, t_seq: Option<u64>, t_par: Option<u64>) -> BenchmarkRecord {
        BenchmarkRecord {
            name: name.to_string(),
            t_seq,
            t_par,
            speedup: None,
        }
    }

    #[test]
    fn test_has_timing() {
        assert!(record("a", Some(1), None).has_timing());
        assert!(record("b", None, Some(1)).has_timing());
        assert!(record("c", Some(1), Some(2)).has_timing());
        assert!(!record("d", None, None).has_timing());
    }

    #[test]
    fn test_plottable_filters_and_preserves_order() {
        let run = ParsedRun {
            header: RunHeader::default(),
            records: vec![
                record("first", Some(10), Some(5)),
                record("empty", None, None),
                record("second", None, Some(7)),
            ],
        };
        let kept = run.plottable();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, "first");
        assert_eq!(kept[1].name, "second");
    }

    #[test]
    fn test_plottable_empty_run() {
        let run = ParsedRun::default();
        assert!(run.plottable().is_empty());
    }

    #[test]
    fn test_header_defaults_unknown() {
        let header = RunHeader::default();
        assert_eq!(header.n_threads, None);
        assert_eq!(header.problem_size, None);
    }
}
