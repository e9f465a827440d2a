//! Terminal output for the markdown produced by `athlete_core::display`.
//!
//! Rich mode styles inline markdown through termimad and colors headings and
//! confirmations; plain mode writes the markdown unchanged.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);

        Self { rich_enabled, skin }
    }

    /// Writes markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        self.render_to(&mut stdout.lock(), markdown)
    }

    pub fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            return Ok(());
        }

        for line in markdown.lines() {
            match line_color(line) {
                // Headings keep their hashes so nesting stays visible.
                Some(color) => writeln!(out, "{color}{line}{RESET}")?,
                None => writeln!(out, "{}", self.skin.inline(line))?,
            }
        }
        Ok(())
    }
}

fn line_color(line: &str) -> Option<&'static str> {
    if line.starts_with('#') {
        Some(BLUE)
    } else if line.starts_with('✓') {
        Some(GREEN)
    } else {
        None
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(renderer: &TerminalRenderer, markdown: &str) -> String {
        let mut out = Vec::new();
        renderer.render_to(&mut out, markdown).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output_is_unchanged() {
        let renderer = TerminalRenderer::new(false);
        let markdown = "# Sat, Jun 1\n\n- **Core** 0/5\n";
        assert_eq!(rendered(&renderer, markdown), markdown);
    }

    #[test]
    fn test_rich_output_colors_headings_and_status() {
        let renderer = TerminalRenderer::new(true);
        let output = rendered(&renderer, "# Morning\n✓ Completed Planks\n- Sets: 3\n");

        assert!(output.contains("\x1b[34m# Morning\x1b[0m"));
        assert!(output.contains("\x1b[32m✓ Completed Planks\x1b[0m"));
        assert!(!output.contains("\x1b[34m- Sets"));
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}
