//! Convert command implementation
//!
//! Reads one instrument from a MIDI file, encodes it and writes the `DEFW`
//! listing to stdout or a file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;

use notepack_backend_defw::{encode_track, render_listing, write_listing, EncodedWord, ListingStyle};
use notepack_midi::read_file;

/// Read and encode one instrument, returning every word including the
/// sentinel.
pub fn encode_file(input: &Path, instrument: usize) -> Result<Vec<EncodedWord>> {
    let notes = read_file(input, instrument)?;
    tracing::debug!(
        input = %input.display(),
        instrument,
        notes = notes.len(),
        "read instrument"
    );

    let words = encode_track(&notes)
        .with_context(|| format!("failed to encode instrument {}", instrument))?;
    Ok(words)
}

/// Render the listing for one instrument without writing anything.
pub fn convert(input: &Path, instrument: usize, style: ListingStyle) -> Result<String> {
    let words = encode_file(input, instrument)?;
    Ok(render_listing(&words, style))
}

/// Run the convert command
///
/// # Arguments
/// * `input` - Path to the MIDI file
/// * `instrument` - Instrument index within the file
/// * `output` - Output file path (default: stdout)
/// * `annotate` - Use the annotated listing style
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &Path, instrument: usize, output: Option<&Path>, annotate: bool) -> Result<ExitCode> {
    let style = if annotate {
        ListingStyle::Annotated
    } else {
        ListingStyle::Plain
    };

    // Encode everything before opening the destination so failures leave
    // no partial listing behind.
    let words = encode_file(input, instrument)?;

    let lines = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file '{}'", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_listing(&mut writer, words, style)
                .with_context(|| format!("failed to write '{}'", path.display()))?
        }
        None => {
            let mut writer = io::stdout().lock();
            write_listing(&mut writer, words, style)?
        }
    };

    tracing::info!(lines, "listing written");
    Ok(ExitCode::SUCCESS)
}
