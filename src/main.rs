//! Anagram Finder - anagram search over system word lists
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::io;
use std::process;

use anagram_finder::cli::Args;
use anagram_finder::processor::{Pipeline, PipelineConfig};
use anagram_finder::progress::{print_banner, print_error, print_header, print_info};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    // Configuration errors abort here, before any word is read.
    let config = PipelineConfig::from_args(&args)?;

    if !args.quiet && args.verbose {
        print_config(&args, &config);
    }

    let stdout = io::stdout();
    let pipeline = Pipeline::new(config);
    let stats = pipeline.run(io::BufWriter::new(stdout.lock()))?;

    if args.stats && !args.quiet {
        stats.print_summary();
    }

    Ok(())
}

/// Print configuration summary
fn print_config(args: &Args, config: &PipelineConfig) {
    print_header("Configuration");

    let names: Vec<&str> = config
        .languages
        .iter()
        .map(|l| l.spec().name)
        .collect();
    print_info(&format!("Languages:    {}", names.join(", ")));

    if !config.wordlists.is_empty() {
        print_info(&format!("Word lists:   {:?}", config.wordlists));
    }
    if let Some(ref dir) = config.dict_dir {
        print_info(&format!("Dict dir:     {:?}", dir));
    }

    if !config.criteria.target().is_empty() {
        print_info(&format!("Target:       {}", config.criteria.target()));
    }
    print_info(&format!(
        "Group size:   {}..={}",
        config.criteria.min_count(),
        config.criteria.max_count()
    ));
    if let Some(length) = args.length {
        print_info(&format!("Word length:  {}", length));
    }
    if !args.include.is_empty() {
        print_info(&format!("Include:      {}", args.include));
    }
    if !args.exclude.is_empty() {
        print_info(&format!("Exclude:      {}", args.exclude));
    }
}
