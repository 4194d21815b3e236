//! Error types for MIDI reading.

use std::path::PathBuf;

use thiserror::Error;

/// Trait for errors that carry a stable reporting code.
///
/// Every library error in the workspace implements this so the CLI can print
/// a code alongside the message without knowing which crate produced it.
pub trait CodedError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "MIDI_001" or "DEFW_002". These codes are
    /// stable and can be matched on by scripts wrapping the CLI.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

/// Errors that can occur while reading a MIDI file.
#[derive(Debug, Error)]
pub enum MidiError {
    /// The file could not be opened or read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a valid Standard MIDI File.
    #[error("failed to parse MIDI data: {0}")]
    Parse(String),

    /// The file contains no completed notes on any track.
    #[error("no note events found in any instrument track")]
    NoInstruments,

    /// The requested instrument index does not exist.
    #[error("instrument {index} not found (file has {available} instrument(s))")]
    InstrumentOutOfRange { index: usize, available: usize },
}

impl From<midly::Error> for MidiError {
    fn from(err: midly::Error) -> Self {
        MidiError::Parse(err.to_string())
    }
}

impl CodedError for MidiError {
    fn code(&self) -> &'static str {
        match self {
            MidiError::Io { .. } => "MIDI_001",
            MidiError::Parse(_) => "MIDI_002",
            MidiError::NoInstruments => "MIDI_003",
            MidiError::InstrumentOutOfRange { .. } => "MIDI_004",
        }
    }

    fn category(&self) -> &'static str {
        "midi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            MidiError::Io {
                path: PathBuf::from("missing.mid"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            },
            MidiError::Parse("bad header".to_string()),
            MidiError::NoInstruments,
            MidiError::InstrumentOutOfRange {
                index: 3,
                available: 1,
            },
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(errors.iter().all(|e| e.category() == "midi"));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = MidiError::Io {
            path: PathBuf::from("songs/theme.mid"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.message().contains("songs/theme.mid"));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = MidiError::InstrumentOutOfRange {
            index: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "instrument 2 not found (file has 1 instrument(s))"
        );
    }
}
