//! ui::render
//!
//! Draws one menu frame: title, options with the selected one marked, and the
//! footer between two rules.
//!
//! All presentation choices come from [`DisplayConfig`]; nothing here reads
//! or changes process-wide terminal state other than what it writes.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use super::menu::Menu;
use crate::core::config::DisplayConfig;

/// Marker in front of the selected option.
pub const SELECTED_MARKER: &str = "> ";
/// Indent in front of the other options.
pub const UNSELECTED_MARKER: &str = "  ";
/// Heading above the footer block.
pub const FOOTER_HEADING: &str = "Command output:";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    config: DisplayConfig,
}

impl Renderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    /// Draw one frame.
    pub fn render(
        &self,
        out: &mut dyn Write,
        menu: &Menu,
        selected: usize,
        footer: &str,
    ) -> io::Result<()> {
        if self.config.clear_screen {
            out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        }

        let color = self.config.color;
        if color {
            writeln!(out, "{}", menu.title().cyan())?;
        } else {
            writeln!(out, "{}", menu.title())?;
        }

        for (idx, item) in menu.items().iter().enumerate() {
            if idx != selected {
                writeln!(out, "{UNSELECTED_MARKER}{}", item.label)?;
            } else if color {
                let line = format!("{SELECTED_MARKER}{}", item.label);
                writeln!(out, "{}", line.black().on_yellow())?;
            } else {
                writeln!(out, "{SELECTED_MARKER}{}", item.label)?;
            }
        }

        let rule = "-".repeat(self.config.rule_width);
        writeln!(out)?;
        if color {
            writeln!(out, "{}", FOOTER_HEADING.magenta())?;
            writeln!(out, "{}", rule.as_str().green())?;
            if !footer.is_empty() {
                writeln!(out, "{}", footer.green())?;
            }
            writeln!(out, "{}", rule.as_str().green())?;
        } else {
            writeln!(out, "{FOOTER_HEADING}")?;
            writeln!(out, "{rule}")?;
            if !footer.is_empty() {
                writeln!(out, "{footer}")?;
            }
            writeln!(out, "{rule}")?;
        }
        out.flush()
    }
}
