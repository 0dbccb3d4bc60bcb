//! # Anagram Finder
//!
//! Groups the words of one or more natural-language word lists into anagram
//! sets and filters the sets before printing.
//!
//! ## Features
//!
//! - **Signature normalization**: accents folded, punctuation stripped,
//!   characters sorted, so "Léon" and "Noel" share a group
//! - **Multi-language corpora**: any combination of the system word lists,
//!   including the ISO-8859-1 German hunspell list, plus custom files
//! - **Target matching**: restrict output to the anagrams of a given
//!   (possibly fictitious) word combination
//! - **Set filters**: member count bounds, exact word length, required and
//!   excluded characters
//!
//! ## Usage
//!
//! ```bash
//! # All anagram sets in the American and British lists
//! anagram-finder -ab
//!
//! # Anagrams of "stop", custom word list
//! anagram-finder -w words.txt stop
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use anagram_finder::corpus::Language;
//! use anagram_finder::filter::FilterCriteria;
//! use anagram_finder::processor::{Pipeline, PipelineConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = PipelineConfig {
//!     languages: vec![Language::American],
//!     wordlists: Vec::new(),
//!     recursive: false,
//!     dict_dir: None,
//!     criteria: FilterCriteria::new(&[], None, None, None, "", "")?,
//!     quiet: true,
//! };
//!
//! let stats = Pipeline::new(config).run(std::io::stdout().lock())?;
//! eprintln!("{} groups", stats.groups_printed);
//! # Ok(()) }
//! ```

pub mod cli;
pub mod corpus;
pub mod encoding;
pub mod filter;
pub mod group;
pub mod normalize;
pub mod output;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use normalize::Signature;
pub use processor::{Pipeline, PipelineConfig};
