//! Core processing engine
//!
//! Wires the stages together: load the corpus, group by signature, filter
//! the groups, hand qualifying groups to the presenter. One pass over the
//! corpus, one pass over the groups, fully synchronous.

use crate::cli::Args;
use crate::corpus::{CorpusLoader, Language};
use crate::filter::FilterCriteria;
use crate::group::AnagramGroups;
use crate::output::Presenter;
use crate::progress::{create_spinner, print_warning, RunStats};

use std::io::Write;
use std::path::PathBuf;

/// Pipeline configuration, built once from the parsed arguments.
pub struct PipelineConfig {
    pub languages: Vec<Language>,
    pub wordlists: Vec<PathBuf>,
    pub recursive: bool,
    pub dict_dir: Option<PathBuf>,
    pub criteria: FilterCriteria,
    pub quiet: bool,
}

impl PipelineConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let criteria = FilterCriteria::new(
            &args.words,
            args.min,
            args.max,
            args.length,
            &args.include,
            &args.exclude,
        )?;

        Ok(Self {
            languages: args.selected_languages(),
            wordlists: args.wordlist.clone(),
            recursive: args.recursive,
            dict_dir: args.dict_dir.clone(),
            criteria,
            quiet: args.quiet,
        })
    }
}

/// The anagram pipeline.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline, writing qualifying groups to `out`.
    pub fn run<W: Write>(&self, out: W) -> anyhow::Result<RunStats> {
        let mut stats = RunStats::new();

        let spinner = if self.config.quiet {
            indicatif::ProgressBar::hidden()
        } else {
            create_spinner("One moment, the output is being prepared...")
        };

        let loader = CorpusLoader::new(self.config.dict_dir.clone(), self.config.recursive);
        let words = loader.load(&self.config.languages, &self.config.wordlists)?;
        stats.words_loaded = words.len() as u64;

        let empty_corpus = words.is_empty();
        let groups = AnagramGroups::build(words);
        stats.groups_total = groups.len() as u64;

        spinner.finish_and_clear();

        if empty_corpus && !self.config.quiet {
            print_warning("No word list could be read; nothing to search.");
        }

        let mut presenter = Presenter::new(out);
        for (signature, members) in groups.iter_sorted() {
            if self.config.criteria.matches(signature, members.len()) {
                presenter.emit(signature, members)?;
            }
        }
        presenter.flush()?;

        stats.groups_printed = presenter.groups_written();
        stats.words_printed = presenter.words_written();

        Ok(stats)
    }
}
