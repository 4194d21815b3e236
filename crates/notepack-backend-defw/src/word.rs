//! Packed 16-bit note words.

use std::fmt;

/// Note names indexed by semitone, as used in driver source listings.
pub const NOTE_LABELS: [&str; 12] = [
    "C", "CS", "D", "DS", "E", "F", "FS", "G", "GS", "A", "AS", "B",
];

/// Bit offset of the duration nibble.
const DURATION_SHIFT: u16 = 8;

/// Bit offset of the octave nibble.
const OCTAVE_SHIFT: u16 = 4;

const NIBBLE: u16 = 0x0F;

/// One entry of the driver's note table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncodedWord(u16);

impl EncodedWord {
    /// End-of-table marker.
    pub const SENTINEL: EncodedWord = EncodedWord(0);

    /// Pack three nibbles into a word. Each field is masked to 4 bits.
    pub fn pack(duration: u8, octave: u8, semitone: u8) -> Self {
        let field = |value: u8| u16::from(value) & NIBBLE;
        EncodedWord(
            field(duration) << DURATION_SHIFT | field(octave) << OCTAVE_SHIFT | field(semitone),
        )
    }

    /// A note word for a MIDI pitch. Pitches up to 191 fit the octave nibble.
    pub fn note(duration: u8, pitch: u8) -> Self {
        Self::pack(duration, pitch / 12, pitch % 12)
    }

    /// A silent word of the given duration.
    pub fn rest(duration: u8) -> Self {
        Self::pack(duration, 0, 0)
    }

    /// Wrap a raw table value.
    pub const fn from_raw(raw: u16) -> Self {
        EncodedWord(raw)
    }

    /// The raw table value.
    pub const fn raw(self) -> u16 {
        self.0
    }

    pub fn duration(self) -> u8 {
        ((self.0 >> DURATION_SHIFT) & NIBBLE) as u8
    }

    pub fn octave(self) -> u8 {
        ((self.0 >> OCTAVE_SHIFT) & NIBBLE) as u8
    }

    pub fn semitone(self) -> u8 {
        (self.0 & NIBBLE) as u8
    }

    /// MIDI pitch recovered from the octave and semitone fields.
    pub fn pitch(self) -> u8 {
        self.octave() * 12 + self.semitone()
    }

    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }

    /// True for zero-pitch words other than the sentinel.
    ///
    /// A note at MIDI pitch 0 packs identically and is read back as a rest.
    pub fn is_rest(self) -> bool {
        !self.is_sentinel() && self.octave() == 0 && self.semitone() == 0
    }

    /// Note name with octave, e.g. `"C5"` for pitch 60. `None` for rests and
    /// the sentinel, or when the semitone field holds 12..=15.
    pub fn label(self) -> Option<String> {
        if self.is_sentinel() || self.is_rest() {
            return None;
        }
        NOTE_LABELS
            .get(usize::from(self.semitone()))
            .map(|name| format!("{}{}", name, self.octave()))
    }
}

impl From<EncodedWord> for u16 {
    fn from(word: EncodedWord) -> Self {
        word.raw()
    }
}

impl fmt::Display for EncodedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DEFW 0x{:04x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_layout() {
        assert_eq!(EncodedWord::pack(4, 5, 0).raw(), 0x0450);
        assert_eq!(EncodedWord::pack(15, 10, 7).raw(), 0x0fa7);
        assert_eq!(EncodedWord::rest(4).raw(), 0x0400);
    }

    #[test]
    fn test_note_decomposes_pitch() {
        let word = EncodedWord::note(2, 67);
        assert_eq!(word.octave(), 5);
        assert_eq!(word.semitone(), 7);
        assert_eq!(word.pitch(), 67);
        assert_eq!(word.duration(), 2);
    }

    #[test]
    fn test_pitch_decomposition_all_midi_notes() {
        for pitch in 0..=127u8 {
            let word = EncodedWord::note(1, pitch);
            assert!(word.semitone() <= 11);
            assert_eq!(word.octave() * 12 + word.semitone(), pitch);
        }
    }

    #[test]
    fn test_sentinel_and_rest() {
        assert!(EncodedWord::SENTINEL.is_sentinel());
        assert!(!EncodedWord::SENTINEL.is_rest());
        assert!(EncodedWord::rest(3).is_rest());
        assert!(!EncodedWord::note(3, 61).is_rest());
        // Zero-duration rest collides with the sentinel.
        assert!(EncodedWord::rest(0).is_sentinel());
    }

    #[test]
    fn test_label() {
        assert_eq!(EncodedWord::note(4, 60).label().as_deref(), Some("C5"));
        assert_eq!(EncodedWord::note(4, 70).label().as_deref(), Some("AS5"));
        assert_eq!(EncodedWord::rest(4).label(), None);
        assert_eq!(EncodedWord::from_raw(0x040e).label(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(EncodedWord::from_raw(0x0457).to_string(), "DEFW 0x0457");
        assert_eq!(EncodedWord::SENTINEL.to_string(), "DEFW 0x0000");
        assert_eq!(EncodedWord::from_raw(0x0fab).to_string(), "DEFW 0x0fab");
    }
}
