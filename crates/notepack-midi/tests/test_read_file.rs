//! Integration tests for reading MIDI files from disk.

use midly::num::{u15, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};
use notepack_midi::{read_file, CodedError, MidiError, NoteEvent};

fn note_event(delta: u32, key: u8, vel: u8) -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(delta),
        kind: TrackEventKind::Midi {
            channel: u4::new(0),
            message: MidiMessage::NoteOn {
                key: u7::new(key),
                vel: u7::new(vel),
            },
        },
    }
}

/// Write a single-track file at 96 ticks per quarter (default 120 BPM).
fn write_fixture(
    dir: &tempfile::TempDir,
    name: &str,
    events: Vec<TrackEvent<'static>>,
) -> std::path::PathBuf {
    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(96)),
    ));
    let mut track = events;
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    smf.tracks.push(track);

    let path = dir.path().join(name);
    smf.save(&path).unwrap();
    path
}

#[test]
fn test_read_file_roundtrips_timing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "scale.mid",
        vec![
            note_event(0, 60, 90),
            note_event(48, 60, 0),
            note_event(0, 62, 90),
            note_event(48, 62, 0),
            note_event(96, 64, 90),
            note_event(192, 64, 0),
        ],
    );

    let notes = read_file(&path, 0).unwrap();
    let expected = [
        NoteEvent::new(60, 0.0, 0.25),
        NoteEvent::new(62, 0.25, 0.5),
        NoteEvent::new(64, 1.0, 2.0),
    ];
    assert_eq!(notes.len(), expected.len());
    for (note, want) in notes.iter().zip(expected.iter()) {
        assert_eq!(note.pitch, want.pitch);
        assert!((note.start - want.start).abs() < 1e-9, "{:?}", note);
        assert!((note.end - want.end).abs() < 1e-9, "{:?}", note);
    }
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.mid");

    let err = read_file(&path, 0).unwrap_err();
    assert!(matches!(err, MidiError::Io { .. }));
    assert_eq!(err.code(), "MIDI_001");
    assert!(err.to_string().contains("does-not-exist.mid"));
}

#[test]
fn test_non_midi_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "C4 D4 E4 F4").unwrap();

    let err = read_file(&path, 0).unwrap_err();
    assert_eq!(err.code(), "MIDI_002");
}
