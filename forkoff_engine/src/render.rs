//! Renderer module.
//!
//! Turns a [`Response`] into terminal lines. Layout (wrapping, indentation) lives
//! in [`Renderer::lines`] so it can be checked without a terminal; [`Renderer::print`]
//! adds styling and the per-character scroll effect.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::info;
use textwrap::wrap;

use crate::response::{Message, RequestStatus, Response};
use crate::style::GameStyle;

pub const DISPLAY_WIDTH: usize = 80;
const INDENT: &str = "    ";
const ART_DELAY: Duration = Duration::from_millis(2);

/// Per-character output delay selected with the `scroll` command.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ScrollSpeed {
    Fast,
    #[default]
    Medium,
    Slow,
    Off,
}

impl ScrollSpeed {
    pub fn delay(self) -> Duration {
        match self {
            ScrollSpeed::Fast => Duration::from_millis(5),
            ScrollSpeed::Medium => Duration::from_millis(10),
            ScrollSpeed::Slow => Duration::from_millis(20),
            ScrollSpeed::Off => Duration::ZERO,
        }
    }

    /// Parse a settings-file speed name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "fast" => Some(ScrollSpeed::Fast),
            "medium" | "normal" => Some(ScrollSpeed::Medium),
            "slow" => Some(ScrollSpeed::Slow),
            "off" => Some(ScrollSpeed::Off),
            _ => None,
        }
    }
}

/// A laid-out line ready for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub text: String,
    pub is_art: bool,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    pub width: usize,
    /// Development mode prints instantly.
    pub development: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Renderer {
    pub fn new(development: bool) -> Self {
        Self {
            width: DISPLAY_WIDTH,
            development,
        }
    }

    /// Lay out a response as ordered, indented lines.
    pub fn lines(&self, response: &Response) -> Vec<RenderedLine> {
        let mut lines = Vec::new();
        for message in &response.messages {
            match message {
                Message::Blank => lines.push(RenderedLine {
                    text: String::new(),
                    is_art: false,
                }),
                Message::Line(text) if text.chars().count() <= self.width => lines.push(RenderedLine {
                    text: format!("{INDENT}{text}"),
                    is_art: false,
                }),
                Message::Line(text) | Message::Paragraph(text) => {
                    for wrapped in wrap(text, self.width) {
                        lines.push(RenderedLine {
                            text: format!("{INDENT}{wrapped}"),
                            is_art: false,
                        });
                    }
                },
                Message::Art(art) => lines.extend(art.iter().map(|line| RenderedLine {
                    text: format!("{INDENT}{line}"),
                    is_art: true,
                })),
            }
        }
        lines
    }

    /// Print a response with the given per-character delay.
    ///
    /// # Errors
    /// Returns an error if stdout cannot be written or flushed.
    pub fn print(&self, response: &Response, speed: ScrollSpeed) -> io::Result<()> {
        if response.status == RequestStatus::Error {
            info!("rendering unrecoverable error response");
        }
        let mut out = io::stdout().lock();
        for line in self.lines(response) {
            let styled = match (response.status, line.is_art) {
                (_, true) => line.text.as_str().art_style().to_string(),
                (RequestStatus::Success, false) => line.text.as_str().description_style().to_string(),
                (_, false) => line.text.as_str().failure_style().to_string(),
            };
            let delay = if self.development {
                Duration::ZERO
            } else if line.is_art {
                ART_DELAY
            } else {
                speed.delay()
            };
            scroll_print(&mut out, &styled, delay)?;
        }
        out.flush()
    }

    /// Print a prompt line (no trailing newline handling beyond the text itself).
    ///
    /// # Errors
    /// Returns an error if stdout cannot be written or flushed.
    pub fn print_prompt(&self, prompt: &str, speed: ScrollSpeed) -> io::Result<()> {
        let mut out = io::stdout().lock();
        let delay = if self.development { Duration::ZERO } else { speed.delay() };
        scroll_print(&mut out, &format!("\n{INDENT}{}", prompt.prompt_style()), delay)?;
        out.flush()
    }
}

fn scroll_print(out: &mut impl Write, text: &str, delay: Duration) -> io::Result<()> {
    if delay.is_zero() {
        return writeln!(out, "{text}");
    }
    for ch in text.chars() {
        write!(out, "{ch}")?;
        out.flush()?;
        thread::sleep(delay);
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_indented_not_wrapped() {
        let renderer = Renderer::new(true);
        let lines = renderer.lines(&Response::success("You see a fork."));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "");
        assert_eq!(lines[1].text, "    You see a fork.");
    }

    #[test]
    fn long_lines_and_paragraphs_wrap_at_display_width() {
        let renderer = Renderer::new(true);
        let long = "word ".repeat(40);
        let lines = renderer.lines(&Response::success(long.trim()));
        assert!(lines.len() > 2);
        assert!(lines.iter().all(|line| line.text.chars().count() <= DISPLAY_WIDTH + INDENT.len()));
    }

    #[test]
    fn art_is_never_wrapped() {
        let renderer = Renderer::new(true);
        let wide = "#".repeat(120);
        let lines = renderer.lines(&Response::art(vec![wide.clone()]));
        assert_eq!(lines.len(), 2);
        assert!(lines[1].is_art);
        assert_eq!(lines[1].text, format!("    {wide}"));
    }

    #[test]
    fn scroll_speeds_map_to_fixed_delays() {
        assert_eq!(ScrollSpeed::Fast.delay(), Duration::from_millis(5));
        assert_eq!(ScrollSpeed::Medium.delay(), Duration::from_millis(10));
        assert_eq!(ScrollSpeed::Slow.delay(), Duration::from_millis(20));
        assert!(ScrollSpeed::Off.delay().is_zero());
        assert_eq!(ScrollSpeed::from_name("Normal"), Some(ScrollSpeed::Medium));
    }

    #[test]
    fn scroll_print_writes_every_character() {
        let mut buffer = Vec::new();
        scroll_print(&mut buffer, "abc", Duration::from_micros(1)).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "abc\n");
    }
}
