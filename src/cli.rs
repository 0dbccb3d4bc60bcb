//! Command-line interface definition for anagram-finder
//!
//! Provides argument parsing and selection helpers for the anagram tool.

use crate::corpus::Language;
use clap::Parser;
use std::path::PathBuf;

/// Anagram finder for system word lists
///
/// Group dictionary words into anagram sets and filter the sets by target
/// word, size, length and character content.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "anagram-finder",
    version,
    about = "Find anagrams in the word lists installed on the system",
    long_about = r#"
Group the words of one or more language word lists into anagram sets: words
sharing the same characters in any order. With WORD arguments, only the set
matching that (possibly fictitious) combination of words is printed.

EXAMPLES:
    # Every anagram set in the Dutch word list (the default)
    anagram-finder

    # English anagrams of "stop"
    anagram-finder -ab stop

    # Anagram sets of exactly 7-letter words, at least 3 words per set
    anagram-finder -a -l 7 -m 3

    # Sets whose words contain both 'p' and 'q' but no 'z'
    anagram-finder -c -I pq -x z

    # Use your own word list instead of the system ones
    anagram-finder -w my_words.txt
"#
)]
pub struct Args {
    /// Word(s) to find anagrams for; concatenated into one combination
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// American-English word list
    #[arg(short = 'a', long)]
    pub american: bool,

    /// British-English word list
    #[arg(short = 'b', long)]
    pub british: bool,

    /// Dutch word list (the default when no list is selected)
    #[arg(short = 'd', long)]
    pub dutch: bool,

    /// French word list
    #[arg(short = 'f', long)]
    pub french: bool,

    /// German word list
    #[arg(short = 'g', long)]
    pub german: bool,

    /// Italian word list
    #[arg(short = 'i', long)]
    pub italian: bool,

    /// Spanish word list
    #[arg(short = 's', long)]
    pub spanish: bool,

    /// All languages combined
    #[arg(short = 'c', long)]
    pub all_languages: bool,

    /// Only print sets of words with exactly this length
    #[arg(short = 'l', long, value_name = "LENGTH")]
    pub length: Option<usize>,

    /// Only print sets with at least this many anagrams
    /// (default 2, or 1 when WORD arguments are given)
    #[arg(short = 'm', long, value_name = "QTY")]
    pub min: Option<usize>,

    /// Only print sets with at most this many anagrams (default 100)
    #[arg(short = 'M', long, value_name = "QTY")]
    pub max: Option<usize>,

    /// Only print words containing all of these characters
    #[arg(short = 'I', long, value_name = "CHARS", default_value = "")]
    pub include: String,

    /// Exclude words containing any of these characters
    #[arg(short = 'x', long, value_name = "CHARS", default_value = "")]
    pub exclude: String,

    /// Extra word list file, or a directory of .txt word lists (repeatable)
    #[arg(short = 'w', long, value_name = "PATH")]
    pub wordlist: Vec<PathBuf>,

    /// Scan word list directories recursively
    #[arg(short = 'r', long, default_value_t = false)]
    pub recursive: bool,

    /// Directory holding the language word lists (overrides the built-in
    /// system paths; file names stay the same)
    #[arg(long, value_name = "DIR")]
    pub dict_dir: Option<PathBuf>,

    /// Show run statistics after the output
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Languages selected by flags. `-c` wins; with nothing selected and no
    /// custom word list, Dutch is the historical default.
    pub fn selected_languages(&self) -> Vec<Language> {
        if self.all_languages {
            return Language::ALL.to_vec();
        }

        let flags = [
            (self.american, Language::American),
            (self.british, Language::British),
            (self.dutch, Language::Dutch),
            (self.french, Language::French),
            (self.german, Language::German),
            (self.italian, Language::Italian),
            (self.spanish, Language::Spanish),
        ];
        let selected: Vec<Language> = flags
            .into_iter()
            .filter_map(|(on, lang)| on.then_some(lang))
            .collect();

        if selected.is_empty() && self.wordlist.is_empty() {
            vec![Language::Dutch]
        } else {
            selected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("anagram-finder").chain(argv.iter().copied()))
    }

    #[test]
    fn test_default_language_is_dutch() {
        let args = parse(&[]);
        assert_eq!(args.selected_languages(), vec![Language::Dutch]);
    }

    #[test]
    fn test_language_flags_combine() {
        let args = parse(&["-a", "-b", "-s"]);
        assert_eq!(
            args.selected_languages(),
            vec![Language::American, Language::British, Language::Spanish]
        );
    }

    #[test]
    fn test_all_languages_flag() {
        let args = parse(&["-c"]);
        assert_eq!(args.selected_languages().len(), 7);
    }

    #[test]
    fn test_custom_wordlist_suppresses_default() {
        let args = parse(&["-w", "words.txt"]);
        assert!(args.selected_languages().is_empty());
        assert_eq!(args.wordlist, vec![PathBuf::from("words.txt")]);
    }

    #[test]
    fn test_target_words_are_positional() {
        let args = parse(&["-a", "stop", "pot"]);
        assert_eq!(args.words, vec!["stop", "pot"]);
        assert!(args.american);
    }

    #[test]
    fn test_filter_flags() {
        let args = parse(&["-l", "7", "-m", "3", "-M", "10", "-I", "pq", "-x", "z"]);
        assert_eq!(args.length, Some(7));
        assert_eq!(args.min, Some(3));
        assert_eq!(args.max, Some(10));
        assert_eq!(args.include, "pq");
        assert_eq!(args.exclude, "z");
    }
}
