//! Tick-to-seconds conversion.
//!
//! Metrical files are converted piecewise: every `Tempo` meta event on the
//! first track starts a new segment with its own seconds-per-tick rate.
//! Timecode files have a fixed rate and ignore tempo events.

use midly::{MetaMessage, Smf, Timing, TrackEventKind};

/// Tempo assumed before the first `Tempo` event (120 BPM).
pub const DEFAULT_MICROS_PER_QUARTER: u32 = 500_000;

/// A span of ticks played at a constant rate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TempoSegment {
    /// Absolute tick the segment starts at.
    tick: u64,
    /// Absolute time of `tick` in seconds.
    seconds: f64,
    /// Length of one tick in seconds.
    seconds_per_tick: f64,
}

/// Piecewise-linear mapping from absolute ticks to seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TempoMap {
    segments: Vec<TempoSegment>,
}

impl TempoMap {
    /// A map with a single constant rate.
    pub fn constant(seconds_per_tick: f64) -> Self {
        Self {
            segments: vec![TempoSegment {
                tick: 0,
                seconds: 0.0,
                seconds_per_tick,
            }],
        }
    }

    /// Build the tempo map for a parsed file.
    pub fn from_smf(smf: &Smf<'_>) -> Self {
        match smf.header.timing {
            Timing::Metrical(tpq) => {
                let ticks_per_quarter = f64::from(tpq.as_int().max(1));
                let mut changes = Vec::new();
                if let Some(track) = smf.tracks.first() {
                    let mut tick: u64 = 0;
                    for event in track {
                        tick += u64::from(event.delta.as_int());
                        if let TrackEventKind::Meta(MetaMessage::Tempo(tempo)) = event.kind {
                            changes.push((tick, tempo.as_int()));
                        }
                    }
                }
                Self::metrical(ticks_per_quarter, &changes)
            }
            Timing::Timecode(fps, subframes) => {
                let ticks_per_second = f64::from(fps.as_f32()) * f64::from(subframes.max(1));
                Self::constant(1.0 / ticks_per_second)
            }
        }
    }

    /// Build a metrical map from `(tick, microseconds per quarter)` changes.
    ///
    /// `changes` must be in tick order; a later change on the same tick
    /// replaces an earlier one.
    pub fn metrical(ticks_per_quarter: f64, changes: &[(u64, u32)]) -> Self {
        let rate = |micros: u32| f64::from(micros) / 1_000_000.0 / ticks_per_quarter;
        let mut map = Self::constant(rate(DEFAULT_MICROS_PER_QUARTER));

        for &(tick, micros) in changes {
            let last = map.segments[map.segments.len() - 1];
            if last.tick == tick {
                let idx = map.segments.len() - 1;
                map.segments[idx].seconds_per_tick = rate(micros);
            } else {
                map.segments.push(TempoSegment {
                    tick,
                    seconds: last.seconds + (tick - last.tick) as f64 * last.seconds_per_tick,
                    seconds_per_tick: rate(micros),
                });
            }
        }

        tracing::trace!(segments = map.segments.len(), "built tempo map");
        map
    }

    /// Absolute time of `tick` in seconds.
    pub fn seconds_at(&self, tick: u64) -> f64 {
        let idx = self
            .segments
            .partition_point(|segment| segment.tick <= tick)
            .saturating_sub(1);
        let segment = &self.segments[idx];
        segment.seconds + (tick - segment.tick) as f64 * segment.seconds_per_tick
    }

    /// Number of constant-rate segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
