// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the cvscan CLI.
//!
//! Results are printed as one box per ranked applicant: name and role, how
//! many keywords matched, then a numbered line per keyword. A one-line scan
//! summary follows. OneDark colors for dark terminals, One Light for light
//! ones; plain text when stdout is not a TTY or `NO_COLOR` is set.
//!
//! # Theme detection order
//!
//! 1. `CVSCAN_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme
//!
//! The `format_*` functions build plain strings and carry no color, so they
//! are what the tests pin down.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use cvscan::{KeywordCount, RankedResult, ScanStats, StrategyId};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Background color index from `COLORFGBG` ("fg;bg"); 7+ except 8 is light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("CVSCAN_THEME").ok().and_then(|v| parse_theme(&v)) {
        return theme;
    }
    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| theme_from_colorfgbg(&v))
    {
        return theme;
    }
    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(glyphs: &str) -> String {
    themed(GRAY, &[], glyphs)
}

/// Visible length, excluding ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!("{} {}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// ┌─ LABEL ──────────┐
fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(BRIGHT_CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// "2 keywords matched"
pub fn format_keywords_matched(count: usize) -> String {
    format!("{} keywords matched", count)
}

/// "1. sales: 2 occurrences"
pub fn format_keyword_line(position: usize, hit: &KeywordCount) -> String {
    let noun = if hit.count == 1 {
        "occurrence"
    } else {
        "occurrences"
    };
    format!("{}. {}: {} {}", position, hit.keyword, hit.count, noun)
}

/// "Exact Match: 3 CVs scanned in 1.25 ms (KMP)"
pub fn format_summary(strategy: StrategyId, stats: &ScanStats) -> String {
    format!(
        "Exact Match: {} CVs scanned in {:.2} ms ({})",
        stats.scanned,
        stats.elapsed.as_secs_f64() * 1000.0,
        strategy.label()
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// One box per ranked result.
pub fn print_result_card(rank: usize, result: &RankedResult) {
    section_top(&format!("#{} {}", rank, result.entry.name));
    row(&themed(GRAY, &[], &result.entry.role));
    row(&themed(
        GREEN,
        &[BOLD],
        &format_keywords_matched(result.matches.len()),
    ));
    for (i, hit) in result.matches.iter().enumerate() {
        row(&format_keyword_line(i + 1, hit));
    }
    section_bot();
}

pub fn print_summary(strategy: StrategyId, stats: &ScanStats) {
    println!();
    println!("{}", themed(CYAN, &[BOLD], &format_summary(strategy, stats)));
    if stats.skipped > 0 {
        println!(
            "{}",
            themed(YELLOW, &[], &format!("⚠️  {} unreadable document(s) skipped", stats.skipped))
        );
    }
    if stats.cancelled {
        println!(
            "{}",
            themed(
                YELLOW,
                &[],
                &format!(
                    "⚠️  scan stopped early: {} of {} documents searched",
                    stats.scanned, stats.corpus_size
                )
            )
        );
    }
}

pub fn print_no_results(keywords: &[String]) {
    println!(
        "{}",
        themed(GRAY, &[], &format!("No documents matched: {}", keywords.join(", ")))
    );
}

/// Role/document tree of a directory corpus.
pub fn print_tree(base: &Path, tree: &BTreeMap<String, Vec<PathBuf>>) {
    println!("{}", themed(BRIGHT_CYAN, &[BOLD], &base.display().to_string()));
    let roles = tree.len();
    for (i, (role, files)) in tree.iter().enumerate() {
        let last_role = i + 1 == roles;
        let branch = if last_role { "└── " } else { "├── " };
        println!(
            "{}{} {}",
            border(branch),
            themed(CYAN, &[BOLD], role),
            themed(GRAY, &[], &format!("({})", files.len()))
        );
        let stem = if last_role { "    " } else { "│   " };
        for (j, file) in files.iter().enumerate() {
            let leaf = if j + 1 == files.len() { "└── " } else { "├── " };
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("{}{}", border(&format!("{}{}", stem, leaf)), name);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
