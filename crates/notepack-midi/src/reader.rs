//! Standard MIDI File reader.
//!
//! Walks every track, pairs note-on/note-off messages into [`NoteEvent`]s and
//! groups them into instruments keyed by `(track, channel, program)`.
//!
//! Pairing rules:
//! - `NoteOn` with velocity 0 is treated as `NoteOff`.
//! - A note-off closes every open note on the same channel and key that
//!   started on an earlier tick. Notes opened on the same tick as the
//!   note-off survive only when something else was closed; otherwise they
//!   are dropped as zero-length.
//! - Notes still sounding at the end of a track are dropped.
//!
//! Instruments are listed in the order their first note closed.

use std::collections::HashMap;
use std::path::Path;

use midly::{MidiMessage, Smf, TrackEvent, TrackEventKind};

use crate::error::MidiError;
use crate::event::{Instrument, NoteEvent};
use crate::tempo::TempoMap;


/// Key identifying an instrument while tracks are walked.
type InstrumentKey = (usize, u8, u8);

/// Accumulates instruments across all tracks of a file.
struct InstrumentCollector<'a> {
    tempo: &'a TempoMap,
    instruments: Vec<Instrument>,
    index: HashMap<InstrumentKey, usize>,
}

impl<'a> InstrumentCollector<'a> {
    fn new(tempo: &'a TempoMap) -> Self {
        Self {
            tempo,
            instruments: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn push_note(&mut self, key: InstrumentKey, pitch: u8, start_tick: u64, end_tick: u64) {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let (track, channel, program) = key;
                self.instruments
                    .push(Instrument::new(track, channel, program));
                self.index.insert(key, self.instruments.len() - 1);
                self.instruments.len() - 1
            }
        };
        self.instruments[idx].notes.push(NoteEvent::new(
            pitch,
            self.tempo.seconds_at(start_tick),
            self.tempo.seconds_at(end_tick),
        ));
    }

    fn collect_track(&mut self, track_idx: usize, track: &[TrackEvent<'_>]) {
        let mut programs = [0u8; 16];
        // (channel, key) -> ticks of notes still sounding
        let mut open: HashMap<(u8, u8), Vec<u64>> = HashMap::new();
        let mut tick: u64 = 0;

        for event in track {
            tick += u64::from(event.delta.as_int());

            let TrackEventKind::Midi { channel, message } = event.kind else {
                continue;
            };
            let channel = channel.as_int();

            match message {
                MidiMessage::ProgramChange { program } => {
                    programs[usize::from(channel)] = program.as_int();
                }
                MidiMessage::NoteOn { key, vel } if vel.as_int() > 0 => {
                    open.entry((channel, key.as_int())).or_default().push(tick);
                }
                MidiMessage::NoteOn { key, .. } | MidiMessage::NoteOff { key, .. } => {
                    let key = key.as_int();
                    let Some(starts) = open.remove(&(channel, key)) else {
                        continue;
                    };
                    let (same_tick, earlier): (Vec<u64>, Vec<u64>) =
                        starts.into_iter().partition(|&start| start == tick);

                    let instrument = (track_idx, channel, programs[usize::from(channel)]);
                    for &start in &earlier {
                        self.push_note(instrument, key, start, tick);
                    }
                    if !earlier.is_empty() && !same_tick.is_empty() {
                        open.insert((channel, key), same_tick);
                    }
                }
                _ => {}
            }
        }

        if !open.is_empty() {
            tracing::debug!(
                track = track_idx,
                unterminated = open.values().map(Vec::len).sum::<usize>(),
                "dropping notes still sounding at end of track"
            );
        }
    }

    fn finish(mut self) -> Vec<Instrument> {
        for instrument in &mut self.instruments {
            instrument.sort_notes();
        }
        self.instruments
    }
}

/// Parse SMF bytes and return every instrument that has at least one note.
pub fn read_instruments(bytes: &[u8]) -> Result<Vec<Instrument>, MidiError> {
    let smf = Smf::parse(bytes)?;
    let tempo = TempoMap::from_smf(&smf);

    let mut collector = InstrumentCollector::new(&tempo);
    for (track_idx, track) in smf.tracks.iter().enumerate() {
        collector.collect_track(track_idx, track);
    }
    let instruments = collector.finish();

    tracing::debug!(
        tracks = smf.tracks.len(),
        instruments = instruments.len(),
        tempo_segments = tempo.segment_count(),
        "parsed MIDI data"
    );
    Ok(instruments)
}

/// Parse SMF bytes and return the notes of instrument `index`.
///
/// The notes are in non-decreasing `start` order.
pub fn read_instrument(bytes: &[u8], index: usize) -> Result<Vec<NoteEvent>, MidiError> {
    let mut instruments = read_instruments(bytes)?;
    if instruments.is_empty() {
        return Err(MidiError::NoInstruments);
    }
    if index >= instruments.len() {
        return Err(MidiError::InstrumentOutOfRange {
            index,
            available: instruments.len(),
        });
    }

    let instrument = instruments.swap_remove(index);
    tracing::debug!(
        index,
        track = instrument.track,
        channel = instrument.channel,
        program = instrument.program,
        notes = instrument.notes.len(),
        "selected instrument"
    );
    Ok(instrument.notes)
}

/// Read a MIDI file from disk and return the notes of instrument `index`.
pub fn read_file(path: impl AsRef<Path>, index: usize) -> Result<Vec<NoteEvent>, MidiError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| MidiError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_instrument(&bytes, index)
}
