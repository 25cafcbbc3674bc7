// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use cvscan::{
    open_corpus, parse_keywords, CorpusScanner, DirectoryCorpus, PlainTextExtractor, ScanConfig,
    StrategyId,
};

mod cli;
use cli::{display, Cli, Commands};

/// Flags from `cvscan search` that override the config file.
struct SearchArgs {
    keywords: String,
    algorithm: StrategyId,
    top: Option<usize>,
    timeout_ms: Option<u64>,
    workers: Option<usize>,
    case_sensitive: bool,
    progress: bool,
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            corpus,
            keywords,
            algorithm,
            top,
            timeout_ms,
            workers,
            case_sensitive,
            progress,
            json,
            config,
        } => run_search(
            &corpus,
            config.as_deref(),
            SearchArgs {
                keywords,
                algorithm,
                top,
                timeout_ms,
                workers,
                case_sensitive,
                progress,
                json,
            },
        ),
        Commands::Tree { dir } => run_tree(&dir),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>, args: &SearchArgs) -> Result<ScanConfig, String> {
    let mut config = match path {
        Some(path) => ScanConfig::from_file(path).map_err(|e| e.to_string())?,
        None => ScanConfig::default(),
    };
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if args.timeout_ms.is_some() {
        config.timeout_ms = args.timeout_ms;
    }
    if args.case_sensitive {
        config.fold_case = false;
    }
    if args.progress {
        config.progress = true;
    }
    debug!(?config, "effective scan config");
    Ok(config)
}

fn run_search(corpus_path: &Path, config_path: Option<&Path>, args: SearchArgs) -> Result<(), String> {
    if !corpus_path.exists() {
        return Err(format!("Corpus not found: {}", corpus_path.display()));
    }
    let config = load_config(config_path, &args)?;
    let top_n = args.top.unwrap_or(config.default_top_n);

    let keywords = parse_keywords(&args.keywords);
    if keywords.is_empty() {
        warn!("no keywords after normalization");
    }

    let corpus = open_corpus(corpus_path);
    let extractor = PlainTextExtractor::new();
    let scanner = CorpusScanner::new(config);
    let report = scanner
        .rank(corpus.as_ref(), &extractor, args.algorithm, &keywords, top_n)
        .map_err(|e| e.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize report: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    if report.results.is_empty() {
        display::print_no_results(&keywords);
    }
    for (i, result) in report.results.iter().enumerate() {
        display::print_result_card(i + 1, result);
    }
    display::print_summary(args.algorithm, &report.stats);
    Ok(())
}

fn run_tree(dir: &Path) -> Result<(), String> {
    if !dir.is_dir() {
        return Err(format!("Not a directory: {}", dir.display()));
    }
    let corpus = DirectoryCorpus::new(dir);
    display::print_tree(corpus.base(), &corpus.tree());
    Ok(())
}
