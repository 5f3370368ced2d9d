// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the shakesearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Search results print
//! as a rule per match followed by the preview with the match highlighted;
//! `inspect` prints a box-drawn report. Respects `NO_COLOR` and falls back to
//! plain text when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `SHAKESEARCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;

use shakesearch::{CorpusStats, SearchConfig, SearchPage};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SHAKESEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

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

theme_color!(RED);
theme_color!(GREEN);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
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

/// Border color and reset pair, empty when colors are off.
fn border() -> (String, &'static str) {
    if use_colors() {
        (GRAY(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Calculate visible length (excluding ANSI codes)
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

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Truncate a path to max_len, adding ... prefix if needed
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let count = path.chars().count();
    if count <= max_len {
        path.to_string()
    } else {
        let tail: String = path.chars().skip(count + 3 - max_len).collect();
        format!("...{}", tail)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (border, reset) = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset,
        content,
        " ".repeat(pad),
        border,
        reset
    );
}

/// Print a `label  value` row with the label column aligned.
pub fn field(label: &str, value: &str) {
    let label = themed(GRAY, &[], &pad_right(label, 18));
    row(&format!("  {}{}", label, value));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (border, reset) = border();
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (border, reset) = border();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset);
}

/// Print a horizontal rule with a left-aligned label: ── LABEL ─────────
pub fn rule(label: &str) {
    let (border, reset) = border();
    let remaining = (BOX_WIDTH + 2).saturating_sub(visible_len(label) + 4);
    println!(
        "{}──{} {} {}{}{}",
        border,
        reset,
        label,
        border,
        "─".repeat(remaining),
        reset
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH RESULTS
// ═══════════════════════════════════════════════════════════════════════════

/// Render a preview window with the matched bytes highlighted.
///
/// `window` and `matched` are byte ranges into `text`. The match is clipped
/// to the window; bytes outside valid UTF-8 decode as U+FFFD.
pub fn render_preview(text: &[u8], window: Range<usize>, matched: Range<usize>) -> String {
    let start = matched.start.clamp(window.start, window.end);
    let end = matched.end.clamp(start, window.end);

    let before = String::from_utf8_lossy(&text[window.start..start]);
    let hit = String::from_utf8_lossy(&text[start..end]);
    let after = String::from_utf8_lossy(&text[end..window.end]);

    format!(
        "{}{}{}",
        before,
        themed(BRIGHT_YELLOW, &[BOLD, UNDERLINE], &hit),
        after
    )
}

/// Print the rule that introduces the `n`-th match (1-based) at byte `pos`.
pub fn match_header(n: usize, pos: usize) {
    let label = format!(
        "{} {}",
        themed(GREEN, &[BOLD], &format!("#{}", n)),
        themed(GRAY, &[], &format!("byte {}", pos))
    );
    rule(&label);
}

/// Print the summary line that closes a page.
pub fn page_footer(query: &str, page: &SearchPage) {
    if page.total == 0 {
        println!("{}", themed(RED, &[], &format!("no matches for {:?}", query)));
        return;
    }
    if page.is_empty() {
        println!(
            "{}",
            themed(
                GRAY,
                &[],
                &format!("offset {} is past the last of {} matches", page.offset, page.total)
            )
        );
        return;
    }

    let shown = format!(
        "matches {}-{} of {}",
        page.offset + 1,
        page.offset + page.len(),
        page.total
    );
    let next = match page.next_offset() {
        Some(next) => format!(" · next page: --offset {}", next),
        None => String::new(),
    };
    println!("{}{}", themed(BLUE, &[BOLD], &shown), themed(GRAY, &[DIM], &next));
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT REPORT
// ═══════════════════════════════════════════════════════════════════════════

/// Print the corpus and index report for `inspect`.
pub fn inspect_report(path: &Path, stats: &CorpusStats, config: &SearchConfig) {
    let fold = if stats.ascii_fold_exact {
        themed(GREEN, &[], "exact")
    } else {
        themed(RED, &[], "inexact (literals with k/s use regex scan)")
    };

    section_top("CORPUS");
    field(
        "path",
        &truncate_path(&path.display().to_string(), BOX_WIDTH - 22),
    );
    field(
        "size",
        &format!("{} ({} bytes)", format_size(stats.corpus_bytes), stats.corpus_bytes),
    );
    field("lines", &stats.lines.to_string());
    field("crlf pairs", &stats.crlf_pairs.to_string());
    field("crc32", &format!("{:08x}", stats.fingerprint));
    section_bot();

    section_top("INDEX");
    field("suffix entries", &stats.suffix_entries.to_string());
    field("index size", &format_size(stats.index_bytes));
    field("ascii folding", &fold);
    section_bot();

    section_top("ENGINE");
    field("page size", &config.page_size.to_string());
    field("preview radius", &format!("{} bytes", config.preview_radius));
    field(
        "line endings",
        if config.normalize_line_endings {
            "normalized to LF"
        } else {
            "raw"
        },
    );
    field("regex limit", &format_size(config.regex_size_limit));
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
