//! notepack CLI library.
//!
//! Wires the MIDI reader to the DEFW encoder and owns the process-level
//! concerns of the `notepack` binary: logging setup and error reporting.

pub mod commands;
pub mod logging;

use notepack_backend_defw::EncodeError;
use notepack_midi::{CodedError, MidiError};

/// Find the reporting code of the first library error in `err`'s chain.
pub fn error_code(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        if let Some(midi) = cause.downcast_ref::<MidiError>() {
            return Some(midi.code());
        }
        cause.downcast_ref::<EncodeError>().map(CodedError::code)
    })
}
