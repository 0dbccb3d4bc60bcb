//! Encoding detection and word list line decoding
//!
//! The bundled language lists declare their encoding up front (only the
//! German hunspell list is not UTF-8); user-supplied word lists get automatic
//! detection via BOM sniffing and chardetng.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Detect the encoding of a word list by sampling its head.
pub fn detect_encoding(path: &Path) -> anyhow::Result<&'static Encoding> {
    let mut file = File::open(path)?;

    // First 64KB is plenty for flat word lists.
    let mut sample = vec![0u8; 64 * 1024];
    let bytes_read = file.read(&mut sample)?;
    sample.truncate(bytes_read);

    if bytes_read == 0 {
        return Ok(encoding_rs::UTF_8);
    }

    if let Some(encoding) = detect_bom(&sample) {
        return Ok(encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&sample, true);
    let encoding = detector.guess(None, true);
    log::debug!("detected encoding {} for {:?}", encoding.name(), path);
    Ok(encoding)
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.len() >= 3 && content[0..3] == [0xEF, 0xBB, 0xBF] {
        return Some(encoding_rs::UTF_8);
    }
    if content.len() >= 2 {
        if content[0..2] == [0xFE, 0xFF] {
            return Some(encoding_rs::UTF_16BE);
        }
        if content[0..2] == [0xFF, 0xFE] {
            return Some(encoding_rs::UTF_16LE);
        }
    }
    None
}

/// Memory-mapped line iterator over a word list file.
///
/// Yields one decoded line per iteration with the trailing newline/carriage
/// return removed. Decoding errors fall back to lossy conversion; a flat
/// word list with a stray bad byte should not abort the whole run.
pub struct WordlistReader {
    // None for zero-length files; mmap(2) rejects empty mappings.
    mmap: Option<memmap2::Mmap>,
    encoding: &'static Encoding,
    position: usize,
}

impl WordlistReader {
    /// Open a word list, detecting its encoding.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let encoding = detect_encoding(path)?;
        Self::with_encoding(path, encoding)
    }

    /// Open a word list whose encoding is known up front.
    pub fn with_encoding(path: &Path, encoding: &'static Encoding) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Self {
                mmap: None,
                encoding,
                position: 0,
            });
        }
        let mmap = unsafe { memmap2::Mmap::map(&file)? };

        // Skip BOM if present
        let position = if mmap.len() >= 3 && mmap[0..3] == [0xEF, 0xBB, 0xBF] {
            3
        } else if mmap.len() >= 2 && (mmap[0..2] == [0xFE, 0xFF] || mmap[0..2] == [0xFF, 0xFE]) {
            2
        } else {
            0
        };

        Ok(Self {
            mmap: Some(mmap),
            encoding,
            position,
        })
    }

    /// Total size of the underlying file in bytes.
    pub fn size(&self) -> usize {
        self.mmap.as_ref().map_or(0, |m| m.len())
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

impl Iterator for WordlistReader {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mmap = self.mmap.as_ref()?;
        if self.position >= mmap.len() {
            return None;
        }

        let remaining = &mmap[self.position..];
        let line_end = memchr::memchr(b'\n', remaining)
            .map(|i| i + 1)
            .unwrap_or(remaining.len());

        let line_bytes = &remaining[..line_end];
        self.position += line_end;

        let line_bytes = line_bytes.strip_suffix(b"\n").unwrap_or(line_bytes);
        let line_bytes = line_bytes.strip_suffix(b"\r").unwrap_or(line_bytes);

        if self.encoding == encoding_rs::UTF_8 {
            match std::str::from_utf8(line_bytes) {
                Ok(s) => Some(s.to_string()),
                Err(_) => Some(String::from_utf8_lossy(line_bytes).into_owned()),
            }
        } else {
            let (decoded, _, had_errors) = self.encoding.decode(line_bytes);
            if had_errors {
                log::warn!("encoding errors in line, using lossy conversion");
            }
            Some(decoded.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_utf8_detection() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "appel").unwrap();
        writeln!(file, "reëel").unwrap();
        file.flush().unwrap();

        let encoding = detect_encoding(file.path()).unwrap();
        assert_eq!(encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_reads_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "stop\npots\r\ntops").unwrap();
        file.flush().unwrap();

        let lines: Vec<_> = WordlistReader::open(file.path()).unwrap().collect();
        assert_eq!(lines, vec!["stop", "pots", "tops"]);
    }

    #[test]
    fn test_latin1_decoding() {
        let mut file = NamedTempFile::new().unwrap();
        // "Bär\nÖl\n" in ISO-8859-1
        file.write_all(&[0x42, 0xE4, 0x72, 0x0A, 0xD6, 0x6C, 0x0A]).unwrap();
        file.flush().unwrap();

        let reader =
            WordlistReader::with_encoding(file.path(), encoding_rs::WINDOWS_1252).unwrap();
        let lines: Vec<_> = reader.collect();
        assert_eq!(lines, vec!["Bär", "Öl"]);
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let mut reader = WordlistReader::open(file.path()).unwrap();
        assert_eq!(reader.size(), 0);
        assert!(reader.next().is_none());
    }
}
