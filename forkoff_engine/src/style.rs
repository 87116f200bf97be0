//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait applies ANSI styling via the `colored` crate.
//! Implementations for `&str` and `String` are provided so string literals can be
//! styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn description_style(&self) -> ColoredString;
    fn failure_style(&self) -> ColoredString;
    fn art_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn description_style(&self) -> ColoredString {
        self.truecolor(102, 208, 250)
    }
    fn failure_style(&self) -> ColoredString {
        self.italic().truecolor(200, 50, 50)
    }
    fn art_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn prompt_style(&self) -> ColoredString {
        self.bold().truecolor(230, 230, 30)
    }
}

impl GameStyle for String {
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn failure_style(&self) -> ColoredString {
        self.as_str().failure_style()
    }
    fn art_style(&self) -> ColoredString {
        self.as_str().art_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
}
