// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rayon worker pool for corpus scans.
//!
//! Each document is extracted and searched on whichever worker picks it up.
//! The compiled `PreparedQuery` is shared read-only across workers; the only
//! shared mutable state is the result collector and the atomic counters.
//!
//! `workers == 0` runs on rayon's global pool. Any other count builds a
//! dedicated pool of that size for the duration of the scan.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use rayon::prelude::*;
use std::sync::atomic::Ordering;

use super::{scan_entry, ScanControl, ScanTally};
use crate::config::ScanConfig;
use crate::corpus::TextExtractor;
use crate::error::ScanError;
use crate::search::PreparedQuery;
use crate::types::CorpusEntry;

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

fn progress_bar(len: usize, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::with_draw_target(Some(len as u64), ProgressDrawTarget::stderr());
    bar.set_style(progress_style());
    bar.set_prefix("Scanning");
    bar
}

/// Scan `entries` across a rayon pool sized by `config.workers`.
///
/// Fails only if the dedicated pool cannot be built; nothing has been
/// scanned in that case.
pub(crate) fn scan_parallel<E: TextExtractor + ?Sized>(
    entries: &[CorpusEntry],
    extractor: &E,
    query: &PreparedQuery,
    config: &ScanConfig,
    control: &ScanControl,
    tally: &ScanTally,
) -> Result<(), ScanError> {
    let progress = progress_bar(entries.len(), config.progress);
    let fold_case = config.fold_case;

    let run = || {
        entries.par_iter().enumerate().for_each(|(index, entry)| {
            if scan_entry(index, entry, extractor, query, fold_case, control, tally) {
                progress.inc(1);
            }
        });
    };

    if config.workers == 0 {
        run();
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("cvscan-worker-{i}"))
            .build()
            .map_err(|e| ScanError::WorkerPool(e.to_string()))?;
        pool.install(run);
    }

    if tally.cancelled.load(Ordering::Relaxed) {
        progress.abandon_with_message("cancelled");
    } else {
        progress.finish_with_message(format!("{} matched", tally.collector.len()));
    }
    Ok(())
}
