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

//! Best-effort host metadata probe.
//!
//! Supplies display metadata for the chart caption only; nothing here feeds
//! back into parsing. Every lookup is a fallback chain ending in `None`:
//! on Windows the CPU name comes from `wmic`, elsewhere from
//! `/proc/cpuinfo` with `lscpu` as the fallback. Subprocess calls run under
//! a fixed timeout; a timeout counts as failure, never as a fatal error.

use std::env;
use std::process::Command;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use benchplot_core::HostInfo;

/// Upper bound on any external lookup subprocess.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Snapshot the host: OS family, architecture, host name, core count, and
/// the CPU model name when any lookup in the chain succeeds.
pub fn probe() -> HostInfo {
    HostInfo {
        system: env::consts::OS.to_string(),
        machine: env::consts::ARCH.to_string(),
        hostname: hostname(),
        processor: Some(env::consts::ARCH.to_string()),
        cpu_count: thread::available_parallelism().ok().map(|n| n.get()),
        cpu_name: cpu_name(),
    }
}

/// Host name chain: `HOSTNAME` env, then `/etc/hostname`, then the
/// `COMPUTERNAME` env Windows uses. Empty values fall through to the next
/// stage.
fn hostname() -> Option<String> {
    env::var("HOSTNAME")
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| {
            std::fs::read_to_string("/etc/hostname")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
        .or_else(|| env::var("COMPUTERNAME").ok().filter(|s| !s.is_empty()))
}

/// Run a command to completion, bounded by [`COMMAND_TIMEOUT`].
///
/// The child is driven from a helper thread; if the timeout elapses the
/// thread is abandoned and the lookup reports failure.
fn command_stdout(program: &'static str, args: &'static [&'static str]) -> Option<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let output = Command::new(program).args(args).output();
        let _ = tx.send(output);
    });
    match rx.recv_timeout(COMMAND_TIMEOUT) {
        Ok(Ok(output)) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        _ => None,
    }
}

/// Extract the value of the first line where `line -> Some(value)`.
fn first_match(text: &str, extract: impl Fn(&str) -> Option<String>) -> Option<String> {
    text.lines()
        .find_map(|line| extract(line))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(target_os = "windows")]
fn cpu_name() -> Option<String> {
    let out = command_stdout("wmic", &["cpu", "get", "name", "/value"])?;
    first_match(&out, |line| {
        line.trim().strip_prefix("Name=").map(str::to_string)
    })
}

#[cfg(not(target_os = "windows"))]
fn cpu_name() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string("/proc/cpuinfo") {
        if let Some(name) = first_match(&content, |line| {
            if line.trim_start().starts_with("model name") {
                line.split(':').nth(1).map(str::to_string)
            } else {
                None
            }
        }) {
            return Some(name);
        }
    }
    let out = command_stdout("lscpu", &[])?;
    first_match(&out, |line| {
        if line.contains("Model name:") {
            line.split(':').nth(1).map(str::to_string)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_never_panics_and_fills_constants() {
        let info = probe();
        assert!(!info.system.is_empty());
        assert!(!info.machine.is_empty());
        // Everything else is best-effort and may legitimately be None.
    }

    #[test]
    fn test_first_match_takes_first_hit() {
        let text = "noise\nmodel name : CPU A\nmodel name : CPU B\n";
        let name = first_match(text, |line| {
            if line.starts_with("model name") {
                line.split(':').nth(1).map(str::to_string)
            } else {
                None
            }
        });
        assert_eq!(name.as_deref(), Some("CPU A"));
    }

    #[test]
    fn test_first_match_filters_empty_values() {
        let name = first_match("Name=\n", |line| {
            line.strip_prefix("Name=").map(str::to_string)
        });
        assert_eq!(name, None);
    }

    #[test]
    fn test_hostname_env_takes_precedence() {
        // The env var heads the chain, ahead of /etc/hostname.
        env::set_var("HOSTNAME", "bench-host-under-test");
        assert_eq!(hostname().as_deref(), Some("bench-host-under-test"));
        env::remove_var("HOSTNAME");
    }

    #[test]
    fn test_command_timeout_is_failure() {
        // A command that cannot exist resolves to None quickly.
        assert_eq!(command_stdout("benchplot-no-such-binary", &[]), None);
    }
}
