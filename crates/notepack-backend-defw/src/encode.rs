//! The encoding pass.
//!
//! Encoding runs in three steps:
//!
//! 1. Validate the track and derive the rest scale from the longest note.
//! 2. Walk the notes in order, emitting a rest word before any note that
//!    starts after the previous note ended, then a note word carrying the
//!    highest pitch sounding from that start onward.
//! 3. Emit the sentinel.
//!
//! Step 2 is lazy: [`WordStream`] yields words as it walks, holding at most
//! one buffered word.
//!
//! Note durations are always quantized at the fixed resolution. Only rest
//! gaps are compressed by the scale, so tracks with long notes keep their
//! note lengths clamped while their silences shrink.

use std::collections::HashSet;

use notepack_midi::NoteEvent;
use ordered_float::OrderedFloat;

use crate::config::EncoderConfig;
use crate::error::EncodeError;
use crate::word::EncodedWord;


/// Highest valid MIDI note number.
const MAX_PITCH: u8 = 127;

/// `(start, end)` key for the set of intervals already emitted.
type Interval = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Scale applied to rest gaps for a track whose longest note is
/// `max_duration` time units long.
pub fn rest_scale(max_duration: f64, config: &EncoderConfig) -> f64 {
    let limit = config.max_unscaled_duration();
    if max_duration > limit {
        limit / max_duration
    } else {
        1.0
    }
}

/// The pitch encoded for each note.
///
/// Notes are grouped into runs sharing an exact `start`. Within a run, each
/// note takes the maximum pitch of itself and every later note in the run.
pub fn chord_pitches(events: &[NoteEvent]) -> Vec<u8> {
    let mut pitches = Vec::with_capacity(events.len());
    // Exact comparison: runs are formed from identical timestamps only.
    for run in events.chunk_by(|a, b| a.start == b.start) {
        let start = pitches.len();
        pitches.extend(run.iter().map(|event| event.pitch));
        let mut highest = 0;
        for pitch in pitches[start..].iter_mut().rev() {
            highest = highest.max(*pitch);
            *pitch = highest;
        }
    }
    pitches
}

/// Encodes note tracks into word streams.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Validate `events` and start a lazy word stream over them.
    ///
    /// `events` must be in non-decreasing `start` order. All validation
    /// happens here, so the returned stream cannot fail part-way.
    pub fn encode<'a>(&self, events: &'a [NoteEvent]) -> Result<WordStream<'a>, EncodeError> {
        if events.is_empty() {
            return Err(EncodeError::EmptyTrack);
        }
        if let Some((index, event)) = events
            .iter()
            .enumerate()
            .find(|(_, event)| event.pitch > MAX_PITCH)
        {
            return Err(EncodeError::PitchOutOfRange {
                index,
                pitch: event.pitch,
            });
        }

        let max_duration = events
            .iter()
            .map(NoteEvent::duration)
            .fold(f64::NEG_INFINITY, f64::max);
        let scale = rest_scale(max_duration, &self.config);

        tracing::debug!(
            notes = events.len(),
            max_duration,
            scale,
            "starting encode pass"
        );

        Ok(WordStream {
            events,
            chord_pitches: chord_pitches(events),
            config: self.config,
            scale,
            position: 0,
            last_note_end: 0.0,
            emitted: HashSet::new(),
            pending: None,
            finished: false,
        })
    }
}

/// Encode a track with the default constants and collect every word,
/// including the trailing sentinel.
pub fn encode_track(events: &[NoteEvent]) -> Result<Vec<EncodedWord>, EncodeError> {
    Ok(Encoder::default().encode(events)?.collect())
}

/// Lazy sequence of words for one track, ending with the sentinel.
#[derive(Debug)]
pub struct WordStream<'a> {
    events: &'a [NoteEvent],
    chord_pitches: Vec<u8>,
    config: EncoderConfig,
    scale: f64,
    position: usize,
    last_note_end: f64,
    emitted: HashSet<Interval>,
    pending: Option<EncodedWord>,
    finished: bool,
}

impl WordStream<'_> {
    /// Scale applied to rest gaps in this stream.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn rest_before(&self, event: &NoteEvent) -> Option<EncodedWord> {
        if event.start <= self.last_note_end
            || self.config.is_close(event.start, self.last_note_end)
        {
            return None;
        }
        let gap = event.start - self.last_note_end;
        let word = EncodedWord::rest(self.config.quantize(gap * self.scale));
        // A gap that rounds to nothing would read as the sentinel.
        (!word.is_sentinel()).then_some(word)
    }

    fn note_for(&mut self, event: &NoteEvent, pitch: u8) -> Option<EncodedWord> {
        self.last_note_end = event.end;

        let interval = (OrderedFloat(event.start), OrderedFloat(event.end));
        if !self.emitted.insert(interval) {
            return None;
        }

        let word = EncodedWord::note(self.config.quantize(event.duration()), pitch);
        if word.is_sentinel() {
            tracing::warn!(
                start = event.start,
                end = event.end,
                "skipping pitch 0 note shorter than one step, it would encode as the sentinel"
            );
            return None;
        }
        Some(word)
    }
}

impl Iterator for WordStream<'_> {
    type Item = EncodedWord;

    fn next(&mut self) -> Option<EncodedWord> {
        loop {
            if let Some(word) = self.pending.take() {
                tracing::trace!(word = word.raw(), "note");
                return Some(word);
            }

            let events = self.events;
            let Some(event) = events.get(self.position) else {
                if self.finished {
                    return None;
                }
                self.finished = true;
                return Some(EncodedWord::SENTINEL);
            };
            let pitch = self.chord_pitches[self.position];
            self.position += 1;

            let rest = self.rest_before(event);
            self.pending = self.note_for(event, pitch);
            if let Some(word) = rest {
                tracing::trace!(word = word.raw(), "rest");
                return Some(word);
            }
        }
    }
}
