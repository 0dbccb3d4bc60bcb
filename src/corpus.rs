//! Corpus loading module
//!
//! Maps each selectable language to its on-disk word list and cleanup rules,
//! reads the selected lists plus any user-supplied extra files, and merges
//! everything into one deduplicated, sorted word sequence.

use crate::encoding::{detect_encoding, WordlistReader};
use bytesize::ByteSize;
use encoding_rs::Encoding;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A selectable word list language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    American,
    British,
    Dutch,
    French,
    German,
    Italian,
    Spanish,
}

impl Language {
    /// Every bundled language, in flag order.
    pub const ALL: [Language; 7] = [
        Language::American,
        Language::British,
        Language::Dutch,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Spanish,
    ];

    pub fn spec(self) -> &'static SourceSpec {
        &SOURCES[self as usize]
    }
}

/// Static description of one word list source: where it lives and which
/// cleanup the raw lines need before they count as words.
pub struct SourceSpec {
    pub language: Language,
    pub name: &'static str,
    pub path: &'static str,
    pub encoding: &'static Encoding,
    /// Lines starting with this marker are skipped entirely.
    pub comment_marker: Option<char>,
    /// Strip a trailing `/...` annotation (hunspell affix flags).
    pub strip_annotations: bool,
}

/// One entry per `Language`, indexed by discriminant.
/// The German hunspell list is the odd one out: ISO-8859-1 encoded, with
/// comment lines and affix annotations after a slash.
pub static SOURCES: [SourceSpec; 7] = [
    SourceSpec {
        language: Language::American,
        name: "american-english",
        path: "/usr/share/dict/american-english",
        encoding: &encoding_rs::UTF_8_INIT,
        comment_marker: None,
        strip_annotations: false,
    },
    SourceSpec {
        language: Language::British,
        name: "british-english",
        path: "/usr/share/dict/british-english",
        encoding: &encoding_rs::UTF_8_INIT,
        comment_marker: None,
        strip_annotations: false,
    },
    SourceSpec {
        language: Language::Dutch,
        name: "dutch",
        path: "/usr/share/dict/dutch",
        encoding: &encoding_rs::UTF_8_INIT,
        comment_marker: None,
        strip_annotations: false,
    },
    SourceSpec {
        language: Language::French,
        name: "french",
        path: "/usr/share/dict/french",
        encoding: &encoding_rs::UTF_8_INIT,
        comment_marker: None,
        strip_annotations: false,
    },
    SourceSpec {
        language: Language::German,
        name: "german",
        path: "/usr/share/hunspell/de_DE_frami.dic",
        encoding: &encoding_rs::WINDOWS_1252_INIT,
        comment_marker: Some('#'),
        strip_annotations: true,
    },
    SourceSpec {
        language: Language::Italian,
        name: "italian",
        path: "/usr/share/dict/italian",
        encoding: &encoding_rs::UTF_8_INIT,
        comment_marker: None,
        strip_annotations: false,
    },
    SourceSpec {
        language: Language::Spanish,
        name: "spanish",
        path: "/usr/share/dict/spanish",
        encoding: &encoding_rs::UTF_8_INIT,
        comment_marker: None,
        strip_annotations: false,
    },
];

/// Loads and merges the selected word list sources.
pub struct CorpusLoader {
    /// Base directory overriding the static table paths (file names kept).
    dict_dir: Option<PathBuf>,
    recursive: bool,
}

impl CorpusLoader {
    pub fn new(dict_dir: Option<PathBuf>, recursive: bool) -> Self {
        Self {
            dict_dir,
            recursive,
        }
    }

    /// Load the selected languages plus any extra word list files and merge
    /// them into one deduplicated, lexicographically sorted word sequence.
    ///
    /// An unreadable source is logged and skipped; a run over zero readable
    /// sources yields an empty corpus, which is valid input downstream.
    pub fn load(&self, languages: &[Language], extra: &[PathBuf]) -> anyhow::Result<Vec<String>> {
        let mut words = BTreeSet::new();
        let mut sources_read = 0usize;

        for &language in languages {
            let spec = language.spec();
            let path = self.resolve(spec);
            match self.load_source(&path, spec, &mut words) {
                Ok(count) => {
                    sources_read += 1;
                    log::debug!("{}: {} lines from {:?}", spec.name, count, path);
                }
                Err(e) => {
                    log::warn!("skipping {} ({:?}): {}", spec.name, path, e);
                }
            }
        }

        for path in self.expand_wordlists(extra) {
            match self.load_extra(&path, &mut words) {
                Ok(count) => {
                    sources_read += 1;
                    log::debug!("wordlist {:?}: {} lines", path, count);
                }
                Err(e) => {
                    log::warn!("skipping wordlist {:?}: {}", path, e);
                }
            }
        }

        if sources_read == 0 {
            log::warn!("no readable word list sources; the corpus is empty");
        }

        Ok(words.into_iter().collect())
    }

    /// Resolve a table path, honoring the `--dict-dir` override.
    fn resolve(&self, spec: &SourceSpec) -> PathBuf {
        match &self.dict_dir {
            Some(dir) => {
                let file_name = Path::new(spec.path).file_name().unwrap_or_default();
                dir.join(file_name)
            }
            None => PathBuf::from(spec.path),
        }
    }

    /// Read one bundled source with its declared encoding and cleanup rules.
    fn load_source(
        &self,
        path: &Path,
        spec: &SourceSpec,
        words: &mut BTreeSet<String>,
    ) -> anyhow::Result<usize> {
        let reader = WordlistReader::with_encoding(path, spec.encoding)?;
        log::info!(
            "reading {} ({}) from {:?}",
            spec.name,
            ByteSize(reader.size() as u64),
            path
        );

        let mut count = 0usize;
        for mut line in reader {
            count += 1;
            if let Some(marker) = spec.comment_marker {
                if line.starts_with(marker) {
                    continue;
                }
            }
            if spec.strip_annotations {
                if let Some(idx) = line.find('/') {
                    line.truncate(idx);
                }
            }
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        Ok(count)
    }

    /// Read a user-supplied word list with auto-detected encoding.
    fn load_extra(&self, path: &Path, words: &mut BTreeSet<String>) -> anyhow::Result<usize> {
        let encoding = detect_encoding(path)?;
        let reader = WordlistReader::with_encoding(path, encoding)?;
        log::info!(
            "reading wordlist {:?} ({}, {})",
            path,
            ByteSize(reader.size() as u64),
            reader.encoding().name()
        );

        let mut count = 0usize;
        for line in reader {
            count += 1;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        Ok(count)
    }

    /// Expand `--wordlist` arguments: files are taken as-is, directories are
    /// scanned for `.txt` files (one level deep unless `--recursive`).
    fn expand_wordlists(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_file() {
                files.push(path.clone());
            } else if path.is_dir() {
                let walker = if self.recursive {
                    WalkDir::new(path)
                } else {
                    WalkDir::new(path).max_depth(1)
                };
                for entry in walker.into_iter().filter_map(|e| e.ok()) {
                    let p = entry.path();
                    if p.is_file()
                        && p.extension()
                            .and_then(|e| e.to_str())
                            .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
                    {
                        files.push(p.to_path_buf());
                    }
                }
            } else {
                log::warn!("wordlist path does not exist: {:?}", path);
            }
        }

        files.sort();
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn loader_for(dir: &TempDir) -> CorpusLoader {
        CorpusLoader::new(Some(dir.path().to_path_buf()), false)
    }

    #[test]
    fn test_dedup_and_sort() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("dutch"), "pots\nstop\npots\ntops\n").unwrap();

        let words = loader_for(&dir).load(&[Language::Dutch], &[]).unwrap();
        assert_eq!(words, vec!["pots", "stop", "tops"]);
    }

    #[test]
    fn test_german_cleanup() {
        let dir = TempDir::new().unwrap();
        let mut file = fs::File::create(dir.path().join("de_DE_frami.dic")).unwrap();
        // ISO-8859-1 content with a comment line and affix annotations;
        // 0xE4 is 'ä'.
        file.write_all(b"# comment line\nB\xE4r/NE\nlos\n").unwrap();

        let words = loader_for(&dir).load(&[Language::German], &[]).unwrap();
        assert_eq!(words, vec!["Bär", "los"]);
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("dutch"), "appel\n").unwrap();

        // French list absent: warn and continue.
        let words = loader_for(&dir)
            .load(&[Language::Dutch, Language::French], &[])
            .unwrap();
        assert_eq!(words, vec!["appel"]);
    }

    #[test]
    fn test_all_sources_missing_yields_empty_corpus() {
        let dir = TempDir::new().unwrap();
        let words = loader_for(&dir).load(&[Language::Spanish], &[]).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_merges_languages() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("dutch"), "kat\nhond\n").unwrap();
        fs::write(dir.path().join("french"), "chat\nhond\n").unwrap();

        let words = loader_for(&dir)
            .load(&[Language::Dutch, Language::French], &[])
            .unwrap();
        assert_eq!(words, vec!["chat", "hond", "kat"]);
    }

    #[test]
    fn test_extra_wordlist_directory() {
        let dir = TempDir::new().unwrap();
        let lists = TempDir::new().unwrap();
        fs::write(lists.path().join("one.txt"), "alpha\n").unwrap();
        fs::write(lists.path().join("two.txt"), "beta\n").unwrap();
        fs::write(lists.path().join("skip.md"), "gamma\n").unwrap();

        let words = loader_for(&dir)
            .load(&[], &[lists.path().to_path_buf()])
            .unwrap();
        assert_eq!(words, vec!["alpha", "beta"]);
    }
}
