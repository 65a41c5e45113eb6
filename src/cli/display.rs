// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the remedy CLI.
//!
//! Results go in a box, one entry per row with a one-line solution preview.
//! Styling is plain ANSI true color and is switched off entirely when stdout
//! is not a terminal or `NO_COLOR` is set, so piped output is bare text.

use remedy::Record;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";

/// Foreground colors used by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
    White,
    Gray,
}

impl Color {
    fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (224, 108, 117),
            Color::Green => (152, 195, 121),
            Color::Yellow => (229, 192, 123),
            Color::Cyan => (86, 182, 194),
            Color::White => (171, 178, 191),
            Color::Gray => (92, 99, 112),
        }
    }

    /// True color escape sequence for this color
    pub fn code(self) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Style stdout only when it is a terminal and `NO_COLOR` is unset
pub fn use_colors() -> bool {
    !no_color() && atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in a color and modifiers, or return it bare
pub fn paint(color: Color, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color.code(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off
fn border() -> String {
    if use_colors() {
        Color::Gray.code()
    } else {
        String::new()
    }
}

/// Reset code, or nothing when colors are off
fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
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

/// Cut plain text to `max` characters, ending with `…` when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let reset = reset();
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

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let reset = reset();
    let colored_label = paint(Color::Cyan, &[BOLD], label);
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

/// Print section divider: ├──────────────────┤
pub fn section_mid() {
    println!("{}├{}┤{}", border(), "─".repeat(BOX_WIDTH), reset());
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Render a label with matched character positions emphasized.
///
/// `positions` are character indices, ascending, as produced by
/// `remedy::find_match`. Without colors the label is returned unchanged.
pub fn highlight(label: &str, positions: &[usize]) -> String {
    if !use_colors() || positions.is_empty() {
        return label.to_string();
    }

    let hit = format!("{}{}{}", BOLD, UNDERLINE, Color::Yellow.code());
    let plain = Color::White.code();
    let mut out = String::with_capacity(label.len() * 2);
    let mut wanted = positions.iter().peekable();

    for (idx, c) in label.chars().enumerate() {
        if wanted.peek() == Some(&&idx) {
            wanted.next();
            out.push_str(&hit);
            out.push(c);
            out.push_str(RESET);
        } else {
            out.push_str(&plain);
            out.push(c);
        }
    }
    out.push_str(RESET);
    out
}

/// Right-aligned `#index` badge
pub fn index_badge(index: usize) -> String {
    paint(Color::Gray, &[], &format!("{:>4}", format!("#{}", index)))
}

/// Color-coded score value
pub fn score_value(score: f64) -> String {
    let text = format!("{:>5.0}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 150.0 {
        Color::Green
    } else if score >= 100.0 {
        Color::Yellow
    } else {
        Color::Gray
    };
    format!("{}{}{}", color.code(), text, RESET)
}

// ═══════════════════════════════════════════════════════════════════════════
// VIEWS
// ═══════════════════════════════════════════════════════════════════════════

/// One result line of a search or list view.
pub struct ResultLine<'a> {
    pub index: usize,
    pub record: &'a Record,
    pub positions: Vec<usize>,
    pub score: Option<f64>,
}

/// Print a boxed list of results with first-line solution previews.
///
/// `total` is the number of results before any limit; the "no matching
/// entries" row only appears when it is zero.
pub fn print_results(heading: &str, lines: &[ResultLine<'_>], total: usize) {
    section_top(heading);
    if total == 0 {
        row(&paint(Color::Gray, &[DIM], " no matching entries"));
    }

    for line in lines {
        // " #12  label ... score"
        let score_width = if line.score.is_some() { 6 } else { 0 };
        let label_room = BOX_WIDTH.saturating_sub(7 + score_width);
        let label = if line.record.label.chars().count() > label_room {
            truncate(&line.record.label, label_room)
        } else {
            highlight(&line.record.label, &line.positions)
        };

        let mut content = format!(" {}  {}", index_badge(line.index), label);
        if let Some(score) = line.score {
            let pad = BOX_WIDTH.saturating_sub(visible_len(&content) + score_width);
            content.push_str(&" ".repeat(pad));
            content.push_str(&score_value(score));
        }
        row(&content);

        let preview = line.record.solution.lines().next().unwrap_or("");
        if !preview.is_empty() {
            let preview = truncate(preview, BOX_WIDTH.saturating_sub(8));
            row(&format!("       {}", paint(Color::Gray, &[], &preview)));
        }
    }
    section_bot();
}

/// Print one record in full: label, divider, every solution line.
pub fn print_record(index: usize, record: &Record) {
    section_top(&format!("Entry #{}", index));
    for chunk in wrap(&record.label, BOX_WIDTH - 2) {
        row(&format!(" {}", paint(Color::White, &[BOLD], &chunk)));
    }
    section_mid();
    for line in record.solution.lines() {
        for chunk in wrap(line, BOX_WIDTH - 2) {
            row(&format!(" {}", paint(Color::Green, &[], &chunk)));
        }
    }
    section_bot();
}

/// Print a confirmation line for a newly added record.
pub fn print_added(index: usize, record: &Record, path: &str) {
    println!(
        "{} {} {} {}",
        paint(Color::Green, &[BOLD], "✓"),
        index_badge(index),
        record.label,
        paint(Color::Gray, &[], &format!("→ {}", path))
    );
}

/// Print an error message to stderr.
pub fn print_error(message: &str) {
    let marker = if !no_color() && atty::is(atty::Stream::Stderr) {
        format!("{}{}✗{}", BOLD, Color::Red.code(), RESET)
    } else {
        "✗".to_string()
    };
    eprintln!("{} {}", marker, message);
}

/// Split text into chunks of at most `width` characters.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
