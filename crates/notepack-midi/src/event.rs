//! Note event and instrument types.

/// MIDI channel reserved for percussion (channel 10, zero-based 9).
pub const DRUM_CHANNEL: u8 = 9;

/// A single note with absolute timing in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    /// MIDI note number (0-127 when produced by the reader).
    pub pitch: u8,
    /// Note-on time in seconds.
    pub start: f64,
    /// Note-off time in seconds, never before `start`.
    pub end: f64,
}

impl NoteEvent {
    /// Create a new note event.
    pub fn new(pitch: u8, start: f64, end: f64) -> Self {
        Self { pitch, start, end }
    }

    /// Length of the note in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Notes sharing a track, channel and program.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    /// Index of the SMF track the notes came from.
    pub track: usize,
    /// Zero-based MIDI channel.
    pub channel: u8,
    /// General MIDI program number in effect when the notes closed.
    pub program: u8,
    /// True when the notes were played on the percussion channel.
    pub is_drum: bool,
    /// Notes in non-decreasing `start` order.
    pub notes: Vec<NoteEvent>,
}

impl Instrument {
    pub(crate) fn new(track: usize, channel: u8, program: u8) -> Self {
        Self {
            track,
            channel,
            program,
            is_drum: channel == DRUM_CHANNEL,
            notes: Vec::new(),
        }
    }

    /// Stable sort by start time; notes starting together keep close order.
    pub(crate) fn sort_notes(&mut self) {
        self.notes.sort_by(|a, b| a.start.total_cmp(&b.start));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let note = NoteEvent::new(60, 0.25, 1.0);
        assert_eq!(note.duration(), 0.75);
    }

    #[test]
    fn test_drum_flag() {
        assert!(Instrument::new(0, 9, 0).is_drum);
        assert!(!Instrument::new(0, 0, 0).is_drum);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut inst = Instrument::new(0, 0, 0);
        inst.notes = vec![
            NoteEvent::new(64, 1.0, 2.0),
            NoteEvent::new(60, 0.0, 1.0),
            NoteEvent::new(67, 1.0, 1.5),
        ];
        inst.sort_notes();
        let pitches: Vec<u8> = inst.notes.iter().map(|n| n.pitch).collect();
        assert_eq!(pitches, vec![60, 64, 67]);
    }
}
