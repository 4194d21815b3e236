//! notepack DEFW Backend - Note Events to Sound Driver Words
//!
//! This crate packs a single melodic line into the 16-bit word table used by
//! small sound drivers, and renders the table as `DEFW` assembler directives.
//!
//! # Word Layout
//!
//! ```text
//!  15    12 11     8 7      4 3      0
//! +--------+--------+--------+--------+
//! | unused |duration| octave |semitone|
//! +--------+--------+--------+--------+
//! ```
//!
//! - **duration**: length in eighths of a time unit, clamped to 15
//! - **octave / semitone**: `pitch / 12` and `pitch % 12`
//! - A word with octave and semitone both 0 is a rest
//! - `0x0000` terminates the table and is never emitted anywhere else
//!
//! # Example
//!
//! ```
//! use notepack_backend_defw::{encode_track, render_listing, ListingStyle};
//! use notepack_midi::NoteEvent;
//!
//! let notes = [NoteEvent::new(60, 0.0, 0.5), NoteEvent::new(67, 1.0, 1.5)];
//! let words = encode_track(&notes)?;
//! assert_eq!(
//!     render_listing(&words, ListingStyle::Plain),
//!     "DEFW 0x0450\nDEFW 0x0400\nDEFW 0x0457\nDEFW 0x0000\n"
//! );
//! # Ok::<(), notepack_backend_defw::EncodeError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`word`]: `EncodedWord` packing and field access
//! - [`config`]: Quantization constants
//! - [`encode`]: The encoding pass
//! - [`listing`]: `DEFW` text output
//! - [`error`]: Error type

pub mod config;
pub mod encode;
pub mod error;
pub mod listing;
pub mod word;

// Re-export main types
pub use config::EncoderConfig;
pub use encode::{chord_pitches, encode_track, rest_scale, Encoder, WordStream};
pub use error::EncodeError;
pub use listing::{format_line, render_listing, write_listing, ListingStyle};
pub use word::{EncodedWord, NOTE_LABELS};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend identifier used in diagnostics.
pub const BACKEND_ID: &str = "notepack-backend-defw";
