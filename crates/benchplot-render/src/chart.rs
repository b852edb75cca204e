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

//! Two-panel benchmark chart.
//!
//! Panel 1: grouped bars of sequential vs. parallel time per record.
//! Panel 2: reported speedup per record with a reference line at 1.0.
//! Records without a reported speedup get a zero-height gray bar so their
//! position stays aligned with panel 1. Nothing is recomputed here; the
//! chart displays exactly what the parser extracted.

use std::path::Path;

use benchplot_core::{BenchmarkRecord, HostInfo, RunHeader};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::error::{RenderError, Result};

/// Output raster size in pixels (the original's 12x10 in at 150 dpi).
pub const IMAGE_SIZE: (u32, u32) = (1800, 1500);

/// Record names longer than this are cut with a continuation marker.
pub const MAX_LABEL_CHARS: usize = 25;

const SEQ_COLOR: RGBColor = RGBColor(70, 130, 180); // steel blue
const PAR_COLOR: RGBColor = RGBColor(255, 127, 80); // coral
const SPEEDUP_COLOR: RGBColor = RGBColor(46, 139, 87); // sea green
const NO_SPEEDUP_COLOR: RGBColor = RGBColor(211, 211, 211); // light gray

/// Render the two-panel chart to `out_path`, overwriting any existing file.
///
/// Records without any timing data are filtered out here (original order
/// preserved); if none survive, [`RenderError::NoData`] is returned.
pub fn render_chart(
    header: &RunHeader,
    host: &HostInfo,
    records: &[BenchmarkRecord],
    out_path: &Path,
) -> Result<()> {
    let data: Vec<&BenchmarkRecord> = records.iter().filter(|r| r.has_timing()).collect();
    if data.is_empty() {
        return Err(RenderError::NoData);
    }

    let labels: Vec<String> = data.iter().map(|r| truncate_label(&r.name)).collect();
    let caption = compose_caption(header, host);

    let root = BitMapBackend::new(out_path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(RenderError::draw)?;
    let root = root
        .titled(&caption, ("sans-serif", 28))
        .map_err(RenderError::draw)?;

    // Same 1.2:1 height ratio between the panels as the original layout.
    let (_, height) = root.dim_in_pixel();
    let (upper, lower) = root.split_vertically(height * 55 / 100);

    draw_time_panel(&upper, &data, &labels)?;
    draw_speedup_panel(&lower, &data, &labels)?;

    root.present().map_err(RenderError::draw)?;
    Ok(())
}

fn draw_time_panel(
    area: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    data: &[&BenchmarkRecord],
    labels: &[String],
) -> Result<()> {
    let n = data.len();
    let y_max = data
        .iter()
        .flat_map(|r| [r.t_seq.unwrap_or(0), r.t_par.unwrap_or(0)])
        .max()
        .unwrap_or(0) as f64
        * 1.1;
    let y_max = y_max.max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption("Temps d'execution sequentiel vs parallele", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.6..(n as f64 - 0.4), 0.0..y_max)
        .map_err(RenderError::draw)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Temps (us)")
        .x_desc("Benchmark")
        .x_labels(n)
        .x_label_formatter(&|x| index_label(labels, *x))
        .draw()
        .map_err(RenderError::draw)?;

    chart
        .draw_series(data.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            bar((x - 0.35, x), r.t_seq.unwrap_or(0) as f64, SEQ_COLOR)
        }))
        .map_err(RenderError::draw)?
        .label("Temps seq (us)")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], SEQ_COLOR.filled()));

    chart
        .draw_series(data.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            bar((x, x + 0.35), r.t_par.unwrap_or(0) as f64, PAR_COLOR)
        }))
        .map_err(RenderError::draw)?
        .label("Temps par (us)")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], PAR_COLOR.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(RenderError::draw)?;
    Ok(())
}

fn draw_speedup_panel(
    area: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
    data: &[&BenchmarkRecord],
    labels: &[String],
) -> Result<()> {
    let n = data.len();
    let y_max = data
        .iter()
        .filter_map(|r| r.speedup)
        .fold(0.0f64, f64::max)
        * 1.1;
    // Keep the 1.0 reference line inside the viewport even when every
    // speedup is missing or below one.
    let y_max = y_max.max(1.2);

    let mut chart = ChartBuilder::on(area)
        .caption("Speedup (Temps seq / Temps par)", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.6..(n as f64 - 0.4), 0.0..y_max)
        .map_err(RenderError::draw)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Speedup (x)")
        .x_desc("Benchmark")
        .x_labels(n)
        .x_label_formatter(&|x| index_label(labels, *x))
        .draw()
        .map_err(RenderError::draw)?;

    chart
        .draw_series(data.iter().enumerate().map(|(i, r)| {
            let x = i as f64;
            let color = if r.speedup.is_some() {
                SPEEDUP_COLOR
            } else {
                NO_SPEEDUP_COLOR
            };
            bar((x - 0.3, x + 0.3), r.speedup.unwrap_or(0.0), color)
        }))
        .map_err(RenderError::draw)?;

    chart
        .draw_series(DashedLineSeries::new(
            [(-0.6, 1.0), (n as f64 - 0.4, 1.0)],
            6,
            4,
            RGBColor(128, 128, 128).stroke_width(1),
        ))
        .map_err(RenderError::draw)?;
    Ok(())
}

fn bar(span: (f64, f64), height: f64, color: RGBColor) -> Rectangle<(f64, f64)> {
    Rectangle::new([(span.0, 0.0), (span.1, height)], color.filled())
}

/// Tick label for the bar at fractional axis position `x`; ticks that do not
/// land on a bar index stay empty.
fn index_label(labels: &[String], x: f64) -> String {
    let i = x.round();
    if (x - i).abs() > 0.01 || i < 0.0 {
        return String::new();
    }
    labels.get(i as usize).cloned().unwrap_or_default()
}

/// Cut a record name to [`MAX_LABEL_CHARS`] characters, marking the cut.
pub fn truncate_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        let cut: String = name.chars().take(MAX_LABEL_CHARS).collect();
        format!("{}...", cut)
    } else {
        name.to_string()
    }
}

/// Compose the chart-wide caption line.
///
/// Unknown scalars display as `?`; the CPU descriptor falls back through
/// `cpu_name -> processor -> "CPU"`.
pub fn compose_caption(header: &RunHeader, host: &HostInfo) -> String {
    let threads = header
        .n_threads
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());
    let problem_size = header
        .problem_size
        .map(group_thousands)
        .unwrap_or_else(|| "?".to_string());
    let hostname = host.hostname.as_deref().unwrap_or("?");
    let cpu = host
        .cpu_name
        .as_deref()
        .or(host.processor.as_deref())
        .unwrap_or("CPU");
    let cores = host
        .cpu_count
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());
    format!(
        "csParallelTask — {} threads, N = {}  |  {}  |  {}  ({} logical cores)",
        threads, problem_size, hostname, cpu, cores
    )
}

/// Thousands-grouped decimal rendering, e.g. `10000000` -> `10,000,000`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, t_seq: Option<u64>, t_par: Option<u64>, speedup: Option<f64>) -> BenchmarkRecord {
        BenchmarkRecord {
            name: name.to_string(),
            t_seq,
            t_par,
            speedup,
        }
    }

    // ==================== Label truncation ====================

    #[test]
    fn test_truncate_short_name_unchanged() {
        assert_eq!(truncate_label("Sort"), "Sort");
    }

    #[test]
    fn test_truncate_at_exact_limit() {
        let name = "x".repeat(25);
        assert_eq!(truncate_label(&name), name);
    }

    #[test]
    fn test_truncate_long_name() {
        let name = "a very long benchmark section title";
        let label = truncate_label(name);
        assert_eq!(label, "a very long benchmark sec...");
        assert_eq!(label.chars().count(), 28);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let name = "é".repeat(30);
        assert_eq!(truncate_label(&name), format!("{}...", "é".repeat(25)));
    }

    // ==================== Caption composition ====================

    #[test]
    fn test_caption_all_known() {
        let header = RunHeader {
            n_threads: Some(8),
            problem_size: Some(10_000_000),
        };
        let host = HostInfo {
            system: "linux".to_string(),
            machine: "x86_64".to_string(),
            hostname: Some("buildbox".to_string()),
            processor: Some("x86_64".to_string()),
            cpu_count: Some(16),
            cpu_name: Some("AMD Ryzen 7 5800X".to_string()),
        };
        assert_eq!(
            compose_caption(&header, &host),
            "csParallelTask — 8 threads, N = 10,000,000  |  buildbox  |  AMD Ryzen 7 5800X  (16 logical cores)"
        );
    }

    #[test]
    fn test_caption_unknowns_fall_back() {
        let caption = compose_caption(&RunHeader::default(), &HostInfo::default());
        assert_eq!(
            caption,
            "csParallelTask — ? threads, N = ?  |  ?  |  CPU  (? logical cores)"
        );
    }

    #[test]
    fn test_caption_cpu_falls_back_to_processor() {
        let host = HostInfo {
            processor: Some("aarch64".to_string()),
            ..HostInfo::default()
        };
        assert!(compose_caption(&RunHeader::default(), &host).contains("|  aarch64  ("));
    }

    // ==================== Thousands grouping ====================

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(10_000_000), "10,000,000");
    }

    // ==================== Render input contract ====================

    #[test]
    fn test_render_rejects_timing_less_records() {
        let records = vec![record("empty", None, None, Some(2.0))];
        let out = std::env::temp_dir().join("benchplot_render_nodata.png");
        let result = render_chart(&RunHeader::default(), &HostInfo::default(), &records, &out);
        assert_eq!(result, Err(RenderError::NoData));
    }

    #[test]
    fn test_index_label_snaps_to_bars_only() {
        let labels = vec!["a".to_string(), "b".to_string()];
        assert_eq!(index_label(&labels, 0.0), "a");
        assert_eq!(index_label(&labels, 1.0), "b");
        assert_eq!(index_label(&labels, 0.5), "");
        assert_eq!(index_label(&labels, -1.0), "");
        assert_eq!(index_label(&labels, 2.0), "");
    }
}
