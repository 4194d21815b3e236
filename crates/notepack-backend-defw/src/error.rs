//! Error types for the DEFW backend.

use notepack_midi::CodedError;
use thiserror::Error;

/// Errors that can occur while encoding or writing a word table.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The track has no notes, so no scale can be derived.
    #[error("track has no note events to encode")]
    EmptyTrack,

    /// A pitch does not fit the octave/semitone fields.
    #[error("note {index} has pitch {pitch}, outside the MIDI range 0-127")]
    PitchOutOfRange { index: usize, pitch: u8 },

    /// Writing the listing failed.
    #[error("failed to write listing: {0}")]
    Io(#[from] std::io::Error),
}

impl CodedError for EncodeError {
    fn code(&self) -> &'static str {
        match self {
            EncodeError::EmptyTrack => "DEFW_001",
            EncodeError::PitchOutOfRange { .. } => "DEFW_002",
            EncodeError::Io(_) => "DEFW_003",
        }
    }

    fn category(&self) -> &'static str {
        "defw"
    }
}
