// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cvscan command-line interface.
//!
//! Two subcommands: `search` ranks a corpus against a keyword list, `tree`
//! shows how a directory corpus is laid out (roles and their documents).
//! Flags given on the command line override values from `--config`.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use cvscan::StrategyId;

#[derive(Parser)]
#[command(
    name = "cvscan",
    about = "Exact-match keyword search and ranking over applicant documents",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the documents of a corpus by keyword occurrences
    Search {
        /// Corpus directory (ROLE/file layout) or JSON manifest
        corpus: PathBuf,

        /// Comma-separated keywords, e.g. "React, Express, HTML"
        #[arg(short, long)]
        keywords: String,

        /// Matching algorithm
        #[arg(short, long, value_enum, ignore_case = true, default_value = "kmp")]
        algorithm: StrategyId,

        /// Maximum number of results (defaults to the config value)
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Stop scanning after this many milliseconds and rank what was found
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Worker threads (0 = one per core)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Match case exactly instead of case-folding document text
        #[arg(long)]
        case_sensitive: bool,

        /// Show a progress bar while scanning
        #[arg(long)]
        progress: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Scan configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the role/document tree of a corpus directory
    Tree {
        /// Corpus directory
        dir: PathBuf,
    },
}
