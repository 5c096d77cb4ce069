//! Terminal output utilities.
//!
//! Box drawing into frames, ANSI helpers.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const REVERSE: &str = "\x1b[7m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;36m";

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// A screenful of lines, built with box-drawing helpers and written in one go.
/// Lines end in `\r\n` when drawn so output stays aligned in raw mode.
#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Box top with optional title: ┌─ Title ───────────────────────────┐
    pub fn top(&mut self, title: &str) {
        if title.is_empty() {
            self.lines.push(format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = BOX_WIDTH.saturating_sub(2 + title_part.chars().count());
            self.lines
                .push(format!("┌{}{}┐", title_part, "─".repeat(remaining)));
        }
    }

    /// Box content line: │ content                                        │
    pub fn line(&mut self, content: &str) {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(console_width(content));
        self.lines
            .push(format!("│ {}{} │", content, " ".repeat(padding)));
    }

    /// Centered box content line: │          content          │
    pub fn line_center(&mut self, content: &str) {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.lines.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
    }

    /// Horizontal rule inside a box: ├──────┤
    pub fn rule(&mut self) {
        self.lines.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
    }

    /// Box bottom: └──────┘
    pub fn bottom(&mut self) {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
    }

    /// Unboxed line.
    pub fn text(&mut self, content: &str) {
        self.lines.push(content.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Clear the screen and write the frame.
    pub fn draw(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(b"\x1b[2J\x1b[H")?;
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\r\n")?;
        }
        out.flush()
    }
}

/// Display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
