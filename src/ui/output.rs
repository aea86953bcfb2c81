//! One-line status messages written to the shell's output sink

use crate::ui::Icons;
use owo_colors::{OwoColorize, Style};
use std::io::{self, Write};

/// Styles for status lines.
///
/// Colour is only used when the caller knows its sink is a terminal.
#[derive(Debug, Clone)]
pub struct Palette {
    success: Style,
    error: Style,
    info: Style,
    label: Style,
}

impl Palette {
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            info: Style::new(),
            label: Style::new(),
        }
    }

    pub fn colored() -> Self {
        Self {
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            label: Style::new().white().dimmed(),
        }
    }

    pub fn for_terminal(is_term: bool) -> Self {
        if is_term { Self::colored() } else { Self::plain() }
    }

    pub fn success(&self, out: &mut dyn Write, label: &str) -> io::Result<()> {
        writeln!(out, "{} {}", Icons::CHECK, label.style(self.success.clone()))
    }

    pub fn error(&self, out: &mut dyn Write, label: &str) -> io::Result<()> {
        writeln!(out, "{} {}", Icons::CROSS, label.style(self.error.clone()))
    }

    pub fn info(&self, out: &mut dyn Write, label: &str, value: &str) -> io::Result<()> {
        writeln!(
            out,
            "{} {}: {}",
            Icons::INFO.style(self.info.clone()),
            label.style(self.label.clone()),
            value
        )
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}
