use std::str::FromStr;

use crate::error::{Error, Result};
use crate::infrastructure::constants::{ANSI_BRIGHT, ANSI_DIM, ANSI_RESET, ANSI_UNDERLINE};

/// Terminal colors available for foreground and background styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// ANSI escape sequence mappings
impl Color {
    pub const fn fg_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
        }
    }

    pub const fn bg_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[41m",
            Color::Green => "\x1b[42m",
            Color::Yellow => "\x1b[43m",
            Color::Blue => "\x1b[44m",
            Color::Magenta => "\x1b[45m",
            Color::Cyan => "\x1b[46m",
            Color::White => "\x1b[47m",
        }
    }

    pub const fn code(self, is_background: bool) -> &'static str {
        if is_background {
            self.bg_code()
        } else {
            self.fg_code()
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            _ => Err(Error::InvalidColor {
                name: s.to_string(),
            }),
        }
    }
}

/// Look up the escape sequence for a color name.
///
/// An absent or empty name yields an empty string, so callers can pass
/// optional colors straight through.
pub fn get_color(name: Option<&str>, is_background: bool) -> Result<&'static str> {
    match name {
        None | Some("") => Ok(""),
        Some(name) => Ok(name.parse::<Color>()?.code(is_background)),
    }
}

/// Styling applied to one text segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
}

impl TextStyle {
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// Wrap text in the escape sequences for `style`, ending with a full reset.
///
/// Bold and dim are exclusive: when both are set only bold is emitted.
pub fn format_text(text: &str, style: &TextStyle) -> String {
    let mut formatted = String::new();
    if let Some(fg) = style.fg {
        formatted.push_str(fg.fg_code());
    }
    if let Some(bg) = style.bg {
        formatted.push_str(bg.bg_code());
    }
    if style.bold {
        formatted.push_str(ANSI_BRIGHT);
    } else if style.dim {
        formatted.push_str(ANSI_DIM);
    }
    if style.underline {
        formatted.push_str(ANSI_UNDERLINE);
    }
    formatted.push_str(text);
    formatted.push_str(ANSI_RESET);
    formatted
}

/// Options for `cprint`
#[derive(Debug, Clone, Default)]
pub struct PrintOptions {
    pub style: TextStyle,
    /// Segment printed before the main text, sharing its colors
    pub prefix_text: String,
    pub bold_prefix: bool,
    pub dim_prefix: bool,
    pub underline_prefix: bool,
    /// Return the formatted string instead of printing it
    pub return_formatted: bool,
}

impl PrintOptions {
    pub fn new(style: TextStyle) -> Self {
        PrintOptions {
            style,
            ..PrintOptions::default()
        }
    }

    fn prefix_style(&self) -> TextStyle {
        TextStyle {
            fg: self.style.fg,
            bg: self.style.bg,
            bold: self.bold_prefix || self.style.bold,
            dim: self.dim_prefix || self.style.dim,
            underline: self.underline_prefix || self.style.underline,
        }
    }
}

/// Format `text` with an optional styled prefix.
pub fn format_with_prefix(text: &str, options: &PrintOptions) -> String {
    let mut output = String::new();
    if !options.prefix_text.is_empty() {
        output.push_str(&format_text(&options.prefix_text, &options.prefix_style()));
    }
    output.push_str(&format_text(text, &options.style));
    output
}

/// Print styled text to stdout, or return it when `return_formatted` is set
pub fn cprint(text: &str, options: &PrintOptions) -> Option<String> {
    let output = format_with_prefix(text, options);
    if options.return_formatted {
        return Some(output);
    }
    println!("{}", output);
    None
}

/// Apply a single foreground color to text
pub fn colorize(s: &str, color: Color) -> String {
    format_text(s, &TextStyle::default().fg(color))
}

pub fn red(s: &str) -> String {
    colorize(s, Color::Red)
}
