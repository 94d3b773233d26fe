//! Terminal rendering for markdown output
//!
//! Rich mode styles headers, bold text and inline code with termimad; plain
//! mode prints the markdown untouched, which is what tests and pipes see.

use std::fmt::Display;

use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Magenta);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_fg(Color::AnsiValue(244));

        Self { rich_enabled, skin }
    }

    /// Prints anything that formats itself as markdown.
    pub fn print(&self, value: &impl Display) {
        self.render(&value.to_string());
    }

    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }
        for line in markdown.lines() {
            // keep the hashes visible so nesting stays readable
            if line.starts_with('#') {
                println!("\x1b[35m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
