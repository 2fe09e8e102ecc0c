// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for script reports.
//!
//! One box per run: the config, a row per operation with its outcome, the
//! final rendering, and the verification verdict. Colors follow OneDark on
//! dark terminals and One Light on light ones; `LINKSEQ_THEME` forces either,
//! `COLORFGBG` is used as a hint, and `NO_COLOR` or a non-TTY stdout turns
//! colors off entirely.

use std::sync::OnceLock;

use linkseq::script::{Outcome, ScriptReport, Step};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("LINKSEQ_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Ok,
    Err,
    Accent,
    Muted,
}

fn tone(tone: Tone) -> String {
    let palette = match (theme(), tone) {
        (Theme::Dark, Tone::Ok) => (152, 195, 121),
        (Theme::Dark, Tone::Err) => (224, 108, 117),
        (Theme::Dark, Tone::Accent) => (86, 182, 194),
        (Theme::Dark, Tone::Muted) => (92, 99, 112),
        (Theme::Light, Tone::Ok) => (80, 161, 79),
        (Theme::Light, Tone::Err) => (228, 86, 73),
        (Theme::Light, Tone::Accent) => (1, 132, 188),
        (Theme::Light, Tone::Muted) => (160, 161, 167),
    };
    rgb(palette)
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn paint(t: Tone, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, tone(t), text, RESET)
}

/// Visible length, ignoring ANSI escapes.
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

/// Cut `text` to at most `width` visible chars, marking the cut with `…`.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border(text: &str) -> String {
    paint(Tone::Muted, false, text)
}

fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

fn section_top(label: &str) {
    let label_part = format!("─ {} ", paint(Tone::Accent, true, label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}{}{}", border("┌"), label_part, border(&format!("{}┐", "─".repeat(remaining))));
}

fn section_mid(label: &str) {
    let label_part = format!("─ {} ", paint(Tone::Accent, true, label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}{}{}", border("├"), label_part, border(&format!("{}┤", "─".repeat(remaining))));
}

fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORT
// ═══════════════════════════════════════════════════════════════════════════

/// Plain text for an outcome plus whether it counts as a failure.
pub fn outcome_text(outcome: &Outcome) -> (String, bool) {
    match outcome {
        Outcome::Done => ("ok".to_string(), false),
        Outcome::Flag(flag) => (flag.to_string(), false),
        Outcome::Element(Some(value)) => (value.to_string(), false),
        Outcome::Element(None) => ("null".to_string(), false),
        Outcome::Count(count) => (count.to_string(), false),
        Outcome::Text(text) => (text.clone(), false),
        Outcome::Error(message) => (format!("error: {}", message), true),
    }
}

fn step_row(position: usize, step: &Step) {
    let op = serde_json::to_string(&step.op).unwrap_or_else(|_| format!("{:?}", step.op));
    let op = clip(&op, BOX_WIDTH / 2);
    let prefix = format!(" {:>3}  {:<width$} → ", position, op, width = BOX_WIDTH / 2);
    let room = BOX_WIDTH.saturating_sub(visible_len(&prefix) + 1);

    let (text, failed) = outcome_text(&step.outcome);
    let text = clip(&text, room);
    let painted = if failed {
        paint(Tone::Err, true, &text)
    } else {
        paint(Tone::Ok, false, &text)
    };
    row(&format!("{}{}", prefix, painted));
}

/// Print the boxed report for a script run.
pub fn print_report(report: &ScriptReport, source: &str) {
    section_top("SCRIPT");
    row(&format!(" source     {}", clip(source, BOX_WIDTH - 13)));
    row(&format!(" allowNull  {}", report.config.allow_null));
    row(&format!(
        " steps      {} ({} rejected)",
        report.steps.len(),
        report.failed_steps()
    ));

    section_mid("OPERATIONS");
    if report.steps.is_empty() {
        row(" (none)");
    }
    for (position, step) in report.steps.iter().enumerate() {
        step_row(position, step);
    }

    section_mid("RESULT");
    row(&format!(" {}", clip(&report.rendered, BOX_WIDTH - 2)));
    match (&report.verification, &report.violation) {
        (Some(verification), _) => {
            row(&format!(" {}", paint(Tone::Ok, false, &verification.to_string())))
        }
        (None, Some(violation)) => row(&format!(
            " {}",
            paint(Tone::Err, true, &format!("ill-formed: {}", violation))
        )),
        (None, None) => row(" (not verified)"),
    }
    section_bot();
}
