//! notepack MIDI Reader
//!
//! This crate turns a Standard MIDI File into the flat, ordered note lists the
//! encoder consumes. It owns everything that depends on the container format:
//! SMF parsing (via `midly`), tick-to-seconds conversion, note-on/note-off
//! pairing and instrument grouping.
//!
//! # Example
//!
//! ```no_run
//! use notepack_midi::read_file;
//!
//! let notes = read_file("melody.mid", 0)?;
//! for note in &notes {
//!     println!("{} {:.3}..{:.3}", note.pitch, note.start, note.end);
//! }
//! # Ok::<(), notepack_midi::MidiError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`event`]: `NoteEvent` and `Instrument`
//! - [`tempo`]: Tick-to-seconds tempo map
//! - [`reader`]: SMF walking and instrument extraction
//! - [`error`]: Error type and the shared `CodedError` reporting trait

pub mod error;
pub mod event;
pub mod reader;
pub mod tempo;

pub use error::{CodedError, MidiError};
pub use event::{Instrument, NoteEvent, DRUM_CHANNEL};
pub use reader::{read_file, read_instrument, read_instruments};
pub use tempo::{TempoMap, DEFAULT_MICROS_PER_QUARTER};

/// Crate version for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
