//! `DEFW` assembler listing output.

use std::io::Write;

use crate::error::EncodeError;
use crate::word::EncodedWord;

/// How each listing line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingStyle {
    /// `DEFW 0x0450`
    #[default]
    Plain,
    /// `DEFW 0x0450 ; C5 len 4`
    Annotated,
}

/// Render one word as a listing line, without the trailing newline.
pub fn format_line(word: EncodedWord, style: ListingStyle) -> String {
    match style {
        ListingStyle::Plain => word.to_string(),
        ListingStyle::Annotated => {
            let comment = if word.is_sentinel() {
                "end".to_string()
            } else if word.is_rest() {
                format!("rest len {}", word.duration())
            } else {
                let name = word
                    .label()
                    .unwrap_or_else(|| format!("pitch {}", word.pitch()));
                format!("{} len {}", name, word.duration())
            };
            format!("{} ; {}", word, comment)
        }
    }
}

/// Write one line per word. Returns the number of lines written.
pub fn write_listing<W, I>(writer: &mut W, words: I, style: ListingStyle) -> Result<usize, EncodeError>
where
    W: Write,
    I: IntoIterator<Item = EncodedWord>,
{
    let mut lines = 0;
    for word in words {
        writeln!(writer, "{}", format_line(word, style))?;
        lines += 1;
    }
    writer.flush()?;
    Ok(lines)
}

/// Render a complete listing into a string.
pub fn render_listing(words: &[EncodedWord], style: ListingStyle) -> String {
    let mut out = String::with_capacity(words.len() * 12);
    for word in words {
        out.push_str(&format_line(*word, style));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<EncodedWord> {
        vec![
            EncodedWord::note(4, 60),
            EncodedWord::rest(4),
            EncodedWord::note(4, 67),
            EncodedWord::SENTINEL,
        ]
    }

    #[test]
    fn test_plain_listing() {
        assert_eq!(
            render_listing(&sample(), ListingStyle::Plain),
            "DEFW 0x0450\nDEFW 0x0400\nDEFW 0x0457\nDEFW 0x0000\n"
        );
    }

    #[test]
    fn test_annotated_listing() {
        assert_eq!(
            render_listing(&sample(), ListingStyle::Annotated),
            "DEFW 0x0450 ; C5 len 4\n\
             DEFW 0x0400 ; rest len 4\n\
             DEFW 0x0457 ; G5 len 4\n\
             DEFW 0x0000 ; end\n"
        );
    }

    #[test]
    fn test_annotated_unlabelled_word() {
        let word = EncodedWord::from_raw(0x013d);
        assert_eq!(
            format_line(word, ListingStyle::Annotated),
            "DEFW 0x013d ; pitch 49 len 1"
        );
    }

    #[test]
    fn test_write_listing_counts_lines() {
        let mut buf = Vec::new();
        let lines = write_listing(&mut buf, sample(), ListingStyle::Plain).unwrap();
        assert_eq!(lines, 4);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            render_listing(&sample(), ListingStyle::Plain)
        );
    }
}
