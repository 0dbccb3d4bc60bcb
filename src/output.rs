//! Output formatting module
//!
//! Writes qualifying anagram groups as aligned columns, one group per line,
//! members contiguous. Long signatures switch the whole group to a wider
//! column so big compound words still line up.

use crate::normalize::Signature;
use std::io::{self, Write};

/// Signature length at which the wide column layout kicks in.
pub const WIDE_SIGNATURE_LEN: usize = 18;

const NARROW_COLUMN: usize = 20;
const WIDE_COLUMN: usize = 40;

/// Column-aligned group writer.
pub struct Presenter<W: Write> {
    out: W,
    groups_written: u64,
    words_written: u64,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            groups_written: 0,
            words_written: 0,
        }
    }

    /// Write one group: every member padded to the column width, then a
    /// newline. Words longer than the column run on with a single trailing
    /// space so members stay separable.
    pub fn emit(&mut self, signature: &Signature, members: &[String]) -> io::Result<()> {
        let width = if signature.char_len() >= WIDE_SIGNATURE_LEN {
            WIDE_COLUMN
        } else {
            NARROW_COLUMN
        };

        for word in members {
            if word.chars().count() >= width {
                write!(self.out, "{} ", word)?;
            } else {
                write!(self.out, "{:<width$}", word)?;
            }
            self.words_written += 1;
        }
        writeln!(self.out)?;
        self.groups_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn groups_written(&self) -> u64 {
        self.groups_written
    }

    pub fn words_written(&self) -> u64 {
        self.words_written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_to_string(signature: &str, members: &[&str]) -> String {
        let mut buf = Vec::new();
        let mut presenter = Presenter::new(&mut buf);
        let members: Vec<String> = members.iter().map(|m| m.to_string()).collect();
        presenter
            .emit(&Signature::raw(signature), &members)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_narrow_columns() {
        let line = emit_to_string("opst", &["pots", "stop"]);
        assert_eq!(line, format!("{:<20}{:<20}\n", "pots", "stop"));
    }

    #[test]
    fn test_wide_columns_for_long_signatures() {
        let sig = "aaaaaaaaaaaaaaaaaa"; // 18 chars: at the wide threshold
        let line = emit_to_string(sig, &["abcdefghijklmnopqr"]);
        assert_eq!(line, format!("{:<40}\n", "abcdefghijklmnopqr"));
    }

    #[test]
    fn test_counters() {
        let mut buf = Vec::new();
        let mut presenter = Presenter::new(&mut buf);
        let group: Vec<String> = vec!["pots".into(), "stop".into()];
        presenter.emit(&Signature::raw("opst"), &group).unwrap();
        presenter.emit(&Signature::raw("opt"), &["pot".into()]).unwrap();

        assert_eq!(presenter.groups_written(), 2);
        assert_eq!(presenter.words_written(), 3);
    }
}
