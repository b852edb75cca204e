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

//! Line classification for csParallelTask log output.
//!
//! The log has no schema: header announcements, numbered section titles,
//! labelled timing lines, and an alternate inline reporting style all appear
//! interleaved with free-form text. Each line is classified exactly once
//! against the rule kinds below, first match wins, and the result drives a
//! single dispatch in the parser.
//!
//! All matchers are substring searches (a matching fragment may sit anywhere
//! in the line) except [`LineKind::Section`], which is anchored to the whole
//! line. Matchers tolerate arbitrary internal whitespace around `:` and
//! before the `us` unit, matching what the producer actually prints.

/// Classification of a single log line.
///
/// Variants are listed in match priority order; [`classify`] returns the
/// first kind whose matcher accepts the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind<'a> {
    /// `csParallelTask - <n> threads` run header.
    Threads(u64),
    /// `N = <n>` problem-size header.
    ProblemSize(u64),
    /// `<digits>. <title>` numbered section title, trimmed. Record boundary.
    Section(&'a str),
    /// `Temps seq : <n> us` sequential time.
    SeqTime(u64),
    /// `Temps par : <n> us` parallel time.
    ParTime(u64),
    /// `Speedup : <f>x` reported ratio.
    Speedup(f64),
    /// `execute(<name>) : <n> us` inline named execution. Record boundary.
    InlineExec(u64),
    /// Anything else; ignored by the parser.
    Other,
}

/// Classify one line, first matching rule wins.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(n) = match_threads(line) {
        LineKind::Threads(n)
    } else if let Some(n) = match_problem_size(line) {
        LineKind::ProblemSize(n)
    } else if let Some(title) = match_section(line) {
        LineKind::Section(title)
    } else if let Some(us) = match_time_after(line, "Temps seq") {
        LineKind::SeqTime(us)
    } else if let Some(us) = match_time_after(line, "Temps par") {
        LineKind::ParTime(us)
    } else if let Some(ratio) = match_speedup(line) {
        LineKind::Speedup(ratio)
    } else if let Some(us) = match_inline_exec(line) {
        LineKind::InlineExec(us)
    } else {
        LineKind::Other
    }
}

/// Consume a run of ASCII digits from the front of `s`.
///
/// Accumulates saturating, so pathological digit strings clamp to `u64::MAX`
/// instead of introducing a numeric error path.
fn take_digits(s: &str) -> Option<(u64, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let mut value: u64 = 0;
    for &b in s.as_bytes()[..end].iter() {
        value = value.saturating_mul(10).saturating_add(u64::from(b - b'0'));
    }
    Some((value, &s[end..]))
}

fn match_threads(line: &str) -> Option<u64> {
    const NEEDLE: &str = "csParallelTask - ";
    for (start, _) in line.match_indices(NEEDLE) {
        if let Some((value, rest)) = take_digits(&line[start + NEEDLE.len()..]) {
            if rest.starts_with(" threads") {
                return Some(value);
            }
        }
    }
    None
}

fn match_problem_size(line: &str) -> Option<u64> {
    const NEEDLE: &str = "N = ";
    for (start, _) in line.match_indices(NEEDLE) {
        if let Some((value, _)) = take_digits(&line[start + NEEDLE.len()..]) {
            return Some(value);
        }
    }
    None
}

/// Anchored: optional leading whitespace, digits, `.`, at least one
/// whitespace character, then at least one more character of title. The
/// title keeps its raw text minus surrounding whitespace.
fn match_section(line: &str) -> Option<&str> {
    let rest = line.trim_start();
    let (_, rest) = take_digits(rest)?;
    let rest = rest.strip_prefix('.')?;
    let mut chars = rest.chars();
    if !chars.next()?.is_whitespace() || chars.next().is_none() {
        return None;
    }
    Some(rest.trim())
}

/// `<label><ws>:<ws><digits><ws>us`, searched from every occurrence of the
/// label so stray earlier mentions cannot mask a later well-formed one.
fn match_time_after(line: &str, label: &str) -> Option<u64> {
    for (start, _) in line.match_indices(label) {
        let rest = line[start + label.len()..].trim_start();
        let Some(rest) = rest.strip_prefix(':') else {
            continue;
        };
        if let Some((value, rest)) = take_digits(rest.trim_start()) {
            if rest.trim_start().starts_with("us") {
                return Some(value);
            }
        }
    }
    None
}

/// `Speedup<ws>:<ws><float>x`. The float is a digits-and-dots run; runs that
/// do not form a valid number (e.g. `1.2.3`) are treated as unrecognized, so
/// a matched line can never fail to parse.
fn match_speedup(line: &str) -> Option<f64> {
    const NEEDLE: &str = "Speedup";
    for (start, _) in line.match_indices(NEEDLE) {
        let rest = line[start + NEEDLE.len()..].trim_start();
        let Some(rest) = rest.strip_prefix(':') else {
            continue;
        };
        let rest = rest.trim_start();
        let end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        if end == 0 || !rest[end..].starts_with('x') {
            continue;
        }
        if let Ok(value) = rest[..end].parse::<f64>() {
            return Some(value);
        }
    }
    None
}

/// `execute(<non-empty, no ')'>)<ws>:<ws><digits><ws>us`.
fn match_inline_exec(line: &str) -> Option<u64> {
    const NEEDLE: &str = "execute(";
    for (start, _) in line.match_indices(NEEDLE) {
        let rest = &line[start + NEEDLE.len()..];
        let Some(close) = rest.find(')') else {
            continue;
        };
        if close == 0 {
            continue;
        }
        let rest = rest[close + 1..].trim_start();
        let Some(rest) = rest.strip_prefix(':') else {
            continue;
        };
        if let Some((value, rest)) = take_digits(rest.trim_start()) {
            if rest.trim_start().starts_with("us") {
                return Some(value);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Header lines ====================

    #[test]
    fn test_threads_line() {
        assert_eq!(
            classify("csParallelTask - 8 threads"),
            LineKind::Threads(8)
        );
    }

    #[test]
    fn test_threads_line_embedded() {
        assert_eq!(
            classify(">>> csParallelTask - 16 threads <<<"),
            LineKind::Threads(16)
        );
    }

    #[test]
    fn test_threads_requires_suffix() {
        assert_eq!(classify("csParallelTask - 8 thread"), LineKind::Other);
        assert_eq!(classify("csParallelTask - threads"), LineKind::Other);
    }

    #[test]
    fn test_problem_size_line() {
        assert_eq!(classify("  N = 10000000"), LineKind::ProblemSize(10_000_000));
    }

    #[test]
    fn test_problem_size_requires_digits() {
        assert_eq!(classify("N = x"), LineKind::Other);
    }

    #[test]
    fn test_threads_beats_problem_size() {
        // Both fragments on one line: rule 1 outranks rule 2.
        assert_eq!(
            classify("csParallelTask - 4 threads, N = 100"),
            LineKind::Threads(4)
        );
    }

    // ==================== Section titles ====================

    #[test]
    fn test_section_line() {
        assert_eq!(classify("1. Somme des elements"), LineKind::Section("Somme des elements"));
    }

    #[test]
    fn test_section_leading_whitespace() {
        assert_eq!(classify("  12. Produit scalaire"), LineKind::Section("Produit scalaire"));
    }

    #[test]
    fn test_section_is_anchored() {
        // Digits-dot in the middle of a line is not a section title.
        assert_eq!(classify("see item 3. below maybe"), LineKind::Other);
    }

    #[test]
    fn test_section_needs_space_after_dot() {
        assert_eq!(classify("1.Sort"), LineKind::Other);
    }

    #[test]
    fn test_section_needs_title_text() {
        assert_eq!(classify("1. "), LineKind::Other);
    }

    #[test]
    fn test_decimal_number_is_not_section() {
        assert_eq!(classify("  12.5. foo"), LineKind::Other);
    }

    #[test]
    fn test_section_outranks_timing() {
        // A numbered line whose title looks like a timing line is still a
        // section boundary: rule 3 runs before rule 4.
        assert_eq!(
            classify("1. Temps seq : 5 us"),
            LineKind::Section("Temps seq : 5 us")
        );
    }

    // ==================== Timing lines ====================

    #[test]
    fn test_seq_time_line() {
        assert_eq!(classify("  Temps seq : 500 us"), LineKind::SeqTime(500));
    }

    #[test]
    fn test_par_time_line() {
        assert_eq!(classify("  Temps par : 150 us"), LineKind::ParTime(150));
    }

    #[test]
    fn test_time_spacing_tolerance() {
        assert_eq!(classify("Temps seq:42us"), LineKind::SeqTime(42));
        assert_eq!(classify("Temps seq   :   42   us"), LineKind::SeqTime(42));
    }

    #[test]
    fn test_time_requires_unit() {
        assert_eq!(classify("Temps seq : 42"), LineKind::Other);
        assert_eq!(classify("Temps seq : 42 ms"), LineKind::Other);
    }

    #[test]
    fn test_time_retries_later_occurrence() {
        assert_eq!(
            classify("Temps seq mentioned; Temps seq : 9 us"),
            LineKind::SeqTime(9)
        );
    }

    // ==================== Speedup lines ====================

    #[test]
    fn test_speedup_line() {
        assert_eq!(classify("  Speedup : 3.33x"), LineKind::Speedup(3.33));
    }

    #[test]
    fn test_speedup_integer() {
        assert_eq!(classify("Speedup : 4x"), LineKind::Speedup(4.0));
    }

    #[test]
    fn test_speedup_requires_x() {
        assert_eq!(classify("Speedup : 3.33"), LineKind::Other);
    }

    #[test]
    fn test_speedup_malformed_float_ignored() {
        // `1.2.3` is a digits-and-dots run but not a number; the line falls
        // through to Other instead of producing a parse failure.
        assert_eq!(classify("Speedup : 1.2.3x"), LineKind::Other);
        assert_eq!(classify("Speedup : .x"), LineKind::Other);
    }

    // ==================== Inline execution lines ====================

    #[test]
    fn test_inline_exec_line() {
        assert_eq!(
            classify("  execute(\"scale_by_name\") : 42 us"),
            LineKind::InlineExec(42)
        );
    }

    #[test]
    fn test_inline_exec_compact() {
        assert_eq!(classify("execute(foo): 42 us"), LineKind::InlineExec(42));
    }

    #[test]
    fn test_inline_exec_empty_parens_rejected() {
        assert_eq!(classify("execute() : 42 us"), LineKind::Other);
    }

    #[test]
    fn test_inline_exec_second_occurrence() {
        assert_eq!(
            classify("execute(a) returned, execute(b) : 7 us"),
            LineKind::InlineExec(7)
        );
    }

    // ==================== Misc ====================

    #[test]
    fn test_unrecognized_lines() {
        assert_eq!(classify(""), LineKind::Other);
        assert_eq!(classify("============"), LineKind::Other);
        assert_eq!(classify("Maximum difference between results: 0"), LineKind::Other);
    }

    #[test]
    fn test_take_digits_saturates() {
        let (value, rest) = take_digits("99999999999999999999999999 tail").unwrap();
        assert_eq!(value, u64::MAX);
        assert_eq!(rest, " tail");
    }

    #[test]
    fn test_take_digits_plain() {
        assert_eq!(take_digits("123abc"), Some((123, "abc")));
        assert_eq!(take_digits("abc"), None);
        assert_eq!(take_digits(""), None);
    }
}
