//! Style types for highlighted snippet lines
//!
//! `StyleSpan` is what the highlighter produces; `Color`, `Style` and
//! `Palette` are how a renderer turns it into terminal output.

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color from its config name (`"red"`, `"bright-blue"`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.trim().to_lowercase().replace('_', "-").as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "gray" | "grey" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        use crossterm::style::Color as Term;
        match color {
            Color::Default => Term::Reset,
            Color::Black => Term::Black,
            Color::Red => Term::DarkRed,
            Color::Green => Term::DarkGreen,
            Color::Yellow => Term::DarkYellow,
            Color::Blue => Term::DarkBlue,
            Color::Magenta => Term::DarkMagenta,
            Color::Cyan => Term::DarkCyan,
            Color::White => Term::Grey,
            Color::BrightBlack => Term::DarkGrey,
            Color::BrightRed => Term::Red,
            Color::BrightGreen => Term::Green,
            Color::BrightYellow => Term::Yellow,
            Color::BrightBlue => Term::Blue,
            Color::BrightMagenta => Term::Magenta,
            Color::BrightCyan => Term::Cyan,
            Color::BrightWhite => Term::White,
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// What a highlighted range of a line is.
///
/// Ordinary identifiers and punctuation have no style at all; they simply
/// get no span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightStyle {
    /// Line and block comments
    Comment,
    /// Numeric, character and string literals, plus `true`/`false`/`nullptr`
    Literal,
    /// Reserved words of the active language
    Keyword,
}

impl HighlightStyle {
    /// Get the default style for this highlight
    pub fn default_style(&self) -> Style {
        match self {
            HighlightStyle::Comment => Style::fg(Color::Magenta),
            HighlightStyle::Literal => Style::fg(Color::Red),
            HighlightStyle::Keyword => Style::fg(Color::Blue).with_bold(),
        }
    }

    /// Get a human-readable name for this highlight
    pub fn name(&self) -> &'static str {
        match self {
            HighlightStyle::Comment => "comment",
            HighlightStyle::Literal => "literal",
            HighlightStyle::Keyword => "keyword",
        }
    }

    /// Parse a highlight from its name (for config loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "comment" => Some(HighlightStyle::Comment),
            "literal" => Some(HighlightStyle::Literal),
            "keyword" => Some(HighlightStyle::Keyword),
            _ => None,
        }
    }
}

/// A highlighted column range within one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    /// Byte column where this span starts (inclusive, 0-based)
    pub start: u32,
    /// Byte column where this span ends (exclusive)
    pub end: u32,
    /// What the covered text is
    pub style: HighlightStyle,
}

impl StyleSpan {
    /// Create a new span
    pub fn new(start: u32, end: u32, style: HighlightStyle) -> Self {
        Self { start, end, style }
    }

    /// Check if this span contains a column
    pub fn contains(&self, col: u32) -> bool {
        col >= self.start && col < self.end
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Maps each highlight to the terminal style used to draw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub comment: Style,
    pub literal: Style,
    pub keyword: Style,
}

impl Palette {
    /// Style for a given highlight
    pub fn style_for(&self, highlight: HighlightStyle) -> Style {
        match highlight {
            HighlightStyle::Comment => self.comment,
            HighlightStyle::Literal => self.literal,
            HighlightStyle::Keyword => self.keyword,
        }
    }

    /// Replace the style of one highlight
    pub fn set(&mut self, highlight: HighlightStyle, style: Style) {
        match highlight {
            HighlightStyle::Comment => self.comment = style,
            HighlightStyle::Literal => self.literal = style,
            HighlightStyle::Keyword => self.keyword = style,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            comment: HighlightStyle::Comment.default_style(),
            literal: HighlightStyle::Literal.default_style(),
            keyword: HighlightStyle::Keyword.default_style(),
        }
    }
}
