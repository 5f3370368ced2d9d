// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the shakesearch command-line interface.
//!
//! Three subcommands: `serve` to run the HTTP search service, `search` to
//! query a corpus from the terminal, and `inspect` to print corpus and index
//! statistics. All three load and index the corpus the same way, so the
//! engine flags live in one shared [`EngineArgs`] group.

pub mod display;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use shakesearch::{LoadError, SearchConfig, Searcher, DEFAULT_PAGE_SIZE, DEFAULT_PREVIEW_RADIUS};

#[derive(Parser)]
#[command(
    name = "shakesearch",
    about = "Case-insensitive search over a single text corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the search API and the static frontend over HTTP
    #[cfg(feature = "server")]
    Serve {
        #[command(flatten)]
        engine: EngineArgs,

        /// Directory served for every path other than /search
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: std::net::IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 3001)]
        port: u16,
    },

    /// Search the corpus and print one page of results
    Search {
        #[command(flatten)]
        engine: EngineArgs,

        /// Case-insensitive regular expression
        query: String,

        /// Index of the first match to show
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        /// Keep paging until every match has been printed
        #[arg(long)]
        all: bool,

        /// Print each page as JSON instead of highlighted previews
        #[arg(long)]
        json: bool,
    },

    /// Print corpus and index statistics
    Inspect {
        #[command(flatten)]
        engine: EngineArgs,
    },
}

/// Flags shared by every subcommand that loads a corpus.
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Path to the corpus text file
    #[arg(short, long, default_value = "completeworks.txt")]
    pub corpus: PathBuf,

    /// Bytes of context on each side of a match
    #[arg(long, default_value_t = DEFAULT_PREVIEW_RADIUS)]
    pub radius: usize,

    /// Matches per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Rewrite CRLF and lone CR line endings to LF before indexing
    #[arg(long)]
    pub normalize_newlines: bool,
}

impl EngineArgs {
    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            page_size: self.page_size,
            preview_radius: self.radius,
            normalize_line_endings: self.normalize_newlines,
            ..SearchConfig::default()
        }
    }

    /// Load and index the corpus, with a spinner on interactive terminals.
    pub fn load(&self) -> Result<Searcher, LoadError> {
        let started = Instant::now();

        #[cfg(feature = "parallel")]
        let spinner = start_spinner(&self.corpus);

        let result = Searcher::load(&self.corpus, self.config());

        #[cfg(feature = "parallel")]
        clear_spinner(spinner);

        let searcher = result?;
        tracing::info!(
            corpus = %self.corpus.display(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "corpus ready"
        );
        Ok(searcher)
    }
}

#[cfg(feature = "parallel")]
fn start_spinner(path: &std::path::Path) -> Option<ProgressBar> {
    if !atty::is(atty::Stream::Stderr) {
        return None;
    }
    let style = ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} {msg} {elapsed:.dim}")
        .ok()?
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");
    let spinner = ProgressBar::new_spinner()
        .with_style(style)
        .with_prefix("indexing")
        .with_message(path.display().to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    Some(spinner)
}

#[cfg(feature = "parallel")]
fn clear_spinner(spinner: Option<ProgressBar>) {
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
}
