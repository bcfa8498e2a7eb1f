//! Pipeline diagnostics: timing and counts for each stage.
//!
//! [`process_with_diagnostics`] runs the same stages as
//! [`process`](crate::process) and records what each one produced.
//! Timestamps come from an injected [`Clock`], so this crate stays free
//! of any platform time source.
//!
//! Durations are serialized as fractional seconds (`f64`) for JSON
//! compatibility, since `std::time::Duration` does not implement serde
//! traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::pipeline::Pipeline;
use crate::types::{Color, IdenticonState};

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Source of timestamps for stage timing.
pub trait Clock {
    /// Opaque point in time.
    type Instant;

    /// The current time.
    fn now(&self) -> Self::Instant;

    /// Time elapsed since `since`.
    fn elapsed(&self, since: &Self::Instant) -> Duration;
}

/// Diagnostics collected from a single pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDiagnostics {
    /// Stage 1: hashing.
    pub hash: StageDiagnostics,
    /// Stage 2: grid construction.
    pub grid: StageDiagnostics,
    /// Stage 3: parity filter.
    pub filter: StageDiagnostics,
    /// Stage 4: pixel mapping.
    pub pixel_map: StageDiagnostics,
    /// Stage 5: rasterization.
    pub raster: StageDiagnostics,
    /// Total wall-clock duration of the entire pipeline (seconds).
    #[serde(with = "duration_serde")]
    pub total_duration: Duration,
    /// Summary across all stages.
    pub summary: PipelineSummary,
}

/// Diagnostics for a single pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDiagnostics {
    /// Wall-clock duration of this stage (seconds).
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Stage-specific metrics.
    pub metrics: StageMetrics,
}

/// Stage-specific metrics that vary by pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StageMetrics {
    /// Hashing metrics.
    Hash {
        /// Length of the input in bytes.
        input_bytes: usize,
        /// Digest as lowercase hex.
        digest_hex: String,
    },
    /// Grid construction metrics.
    Grid {
        /// Number of cells produced.
        cell_count: usize,
    },
    /// Parity filter metrics.
    Filter {
        /// Cells before filtering.
        cells_before: usize,
        /// Cells after filtering.
        cells_after: usize,
    },
    /// Pixel mapping metrics.
    PixelMap {
        /// Number of rectangles produced.
        rectangle_count: usize,
    },
    /// Rasterization metrics.
    Raster {
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
        /// Pixels that differ from the background.
        filled_pixel_count: u64,
    },
}

/// High-level summary of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Digest as lowercase hex.
    pub digest_hex: String,
    /// Fill color.
    pub color: Color,
    /// Number of drawn cells.
    pub drawn_cells: usize,
    /// Pixels that differ from the background.
    pub filled_pixel_count: u64,
}

impl PipelineDiagnostics {
    /// Format diagnostics as a human-readable report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Identicon Diagnostics Report\n{}", "=".repeat(60)));
        lines.push(format!("Digest: {}", self.summary.digest_hex));
        lines.push(format!(
            "Color: rgb({}, {}, {})",
            self.summary.color.red, self.summary.color.green, self.summary.color.blue,
        ));
        lines.push(format!(
            "Total duration: {:.3}ms",
            duration_ms(self.total_duration),
        ));
        lines.push(String::new());

        lines.push(format!(
            "{:<16} {:>10} {:>10}  {}",
            "Stage", "Duration", "% Total", "Details"
        ));
        lines.push("-".repeat(72));

        let total_ms = duration_ms(self.total_duration);
        let stages = [
            ("Hash", &self.hash),
            ("Grid", &self.grid),
            ("Filter", &self.filter),
            ("Pixel Map", &self.pixel_map),
            ("Raster", &self.raster),
        ];

        for (name, diag) in stages {
            let ms = duration_ms(diag.duration);
            let pct = if total_ms > 0.0 {
                ms / total_ms * 100.0
            } else {
                0.0
            };
            let details = format_metrics(&diag.metrics);
            lines.push(format!("{name:<16} {ms:>8.3}ms {pct:>9.1}%  {details}"));
        }

        lines.push(String::new());
        lines.push(format!(
            "Drawn cells: {}  |  Filled pixels: {}",
            self.summary.drawn_cells, self.summary.filled_pixel_count,
        ));

        lines.join("\n")
    }
}

/// Run the full pipeline, timing each stage with `clock`.
///
/// Produces exactly the same [`IdenticonState`] as
/// [`process`](crate::process).
pub fn process_with_diagnostics<C: Clock>(
    input: &str,
    clock: &C,
) -> (IdenticonState, PipelineDiagnostics) {
    let start = clock.now();

    let t = clock.now();
    let hashed = Pipeline::new(input).hash();
    let hash = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Hash {
            input_bytes: input.len(),
            digest_hex: hashed.digest().to_hex(),
        },
    };

    let t = clock.now();
    let built = hashed.build_grid();
    let grid = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Grid {
            cell_count: built.grid().len(),
        },
    };
    let cells_before = built.grid().len();

    let t = clock.now();
    let filtered = built.filter();
    let filter = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::Filter {
            cells_before,
            cells_after: filtered.filtered().len(),
        },
    };

    let t = clock.now();
    let mapped = filtered.map_pixels();
    let pixel_map = StageDiagnostics {
        duration: clock.elapsed(&t),
        metrics: StageMetrics::PixelMap {
            rectangle_count: mapped.pixel_map().len(),
        },
    };

    let t = clock.now();
    let rasterized = mapped.rasterize();
    let raster_duration = clock.elapsed(&t);
    let filled_pixel_count = crate::raster::filled_pixel_count(rasterized.image());
    let raster = StageDiagnostics {
        duration: raster_duration,
        metrics: StageMetrics::Raster {
            width: rasterized.image().width(),
            height: rasterized.image().height(),
            filled_pixel_count,
        },
    };

    let state = rasterized.into_result();
    let total_duration = clock.elapsed(&start);

    let summary = PipelineSummary {
        digest_hex: state.digest.to_hex(),
        color: state.color,
        drawn_cells: state.filtered.len(),
        filled_pixel_count,
    };

    let diagnostics = PipelineDiagnostics {
        hash,
        grid,
        filter,
        pixel_map,
        raster,
        total_duration,
        summary,
    };
    (state, diagnostics)
}

/// Convert a `Duration` to milliseconds as `f64`.
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Format stage metrics into a compact detail string.
fn format_metrics(metrics: &StageMetrics) -> String {
    match metrics {
        StageMetrics::Hash {
            input_bytes,
            digest_hex,
        } => format!("{input_bytes} bytes -> {digest_hex}"),
        StageMetrics::Grid { cell_count } => format!("{cell_count} cells"),
        StageMetrics::Filter {
            cells_before,
            cells_after,
        } => format!("{cells_before} -> {cells_after} cells"),
        StageMetrics::PixelMap { rectangle_count } => format!("{rectangle_count} rectangles"),
        StageMetrics::Raster {
            width,
            height,
            filled_pixel_count,
        } => format!("{width}x{height}, {filled_pixel_count} filled px"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Clock that advances one millisecond every time it is read.
    struct SteppingClock {
        ticks: Cell<u64>,
    }

    impl SteppingClock {
        const fn new() -> Self {
            Self {
                ticks: Cell::new(0),
            }
        }
    }

    impl Clock for SteppingClock {
        type Instant = u64;

        fn now(&self) -> u64 {
            let t = self.ticks.get();
            self.ticks.set(t + 1);
            t
        }

        fn elapsed(&self, since: &u64) -> Duration {
            Duration::from_millis(self.now() - since)
        }
    }

    #[test]
    fn duration_ms_converts_correctly() {
        let d = Duration::from_millis(1234);
        let ms = duration_ms(d);
        assert!((ms - 1234.0).abs() < 0.01);
    }

    #[test]
    fn diagnostics_match_plain_process() {
        let (state, _) = process_with_diagnostics("asdf", &SteppingClock::new());
        assert_eq!(state, crate::process("asdf"));
    }

    #[test]
    fn metrics_for_known_vector() {
        let (_, diag) = process_with_diagnostics("asdf", &SteppingClock::new());

        assert!(matches!(
            diag.filter.metrics,
            StageMetrics::Filter {
                cells_before: 25,
                cells_after: 12
            }
        ));
        assert!(matches!(
            diag.pixel_map.metrics,
            StageMetrics::PixelMap {
                rectangle_count: 12
            }
        ));
        assert_eq!(diag.summary.digest_hex, "912ec803b2ce49e4a541068d495ab570");
        assert_eq!(diag.summary.drawn_cells, 12);
        assert_eq!(diag.summary.filled_pixel_count, 12 * 50 * 50);
        assert!(diag.total_duration >= diag.hash.duration);
    }

    #[test]
    fn report_mentions_every_stage() {
        let (_, diag) = process_with_diagnostics("asdf", &SteppingClock::new());
        let report = diag.report();
        assert!(report.contains("Identicon Diagnostics Report"));
        for stage in ["Hash", "Grid", "Filter", "Pixel Map", "Raster"] {
            assert!(report.contains(stage), "missing {stage}");
        }
        assert!(report.contains("rgb(145, 46, 200)"));
    }

    #[test]
    fn serializes_durations_as_seconds() {
        let (_, diag) = process_with_diagnostics("", &SteppingClock::new());
        let json: serde_json::Value = serde_json::to_value(&diag).unwrap();
        assert!(json["total_duration"].is_f64());
        assert_eq!(json["summary"]["drawn_cells"], 16);

        let back: PipelineDiagnostics = serde_json::from_value(json).unwrap();
        assert_eq!(back.summary.drawn_cells, 16);
    }
}
