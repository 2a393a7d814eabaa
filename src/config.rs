//! Configuration file support
//!
//! Loads settings from ~/.snipline.toml (or %USERPROFILE%\.snipline.toml on
//! Windows), or from a path given on the command line.
//!
//! Example:
//! ```toml
//! # snipline configuration
//! color = true
//! line-numbers = true
//! tab-width = 4
//! max-width = 120
//! save-interval = 64
//! standard = "c++17"
//!
//! [colors]
//! comment = "bright-black"
//! literal = "green"
//! keyword = { fg = "blue", bold = true }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::{Result, SnipError};
use crate::highlight::{Color, HighlightStyle, Palette, Style};
use crate::lang::LangStandard;

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether to emit terminal colors
    pub color: bool,
    /// Whether to show the line-number gutter
    pub show_line_numbers: bool,
    /// Tab width for display
    pub tab_width: usize,
    /// Maximum display width of a rendered line (0 = unlimited)
    pub max_width: usize,
    /// Lines between lexer save points
    pub save_interval: u32,
    /// Language standard; detected from the file extension when unset
    pub standard: Option<LangStandard>,
    /// Styles used for each kind of highlight
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            show_line_numbers: true,
            tab_width: 8,
            max_width: 0,
            save_interval: 64,
            standard: None,
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".snipline.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".snipline.toml"))
        }
    }

    /// Load configuration from the default path.
    ///
    /// A missing file gives the defaults; a broken one is reported.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        for (key, value) in table {
            match key.as_str() {
                "color" => self.color = expect_bool(key, value)?,
                "line-numbers" => self.show_line_numbers = expect_bool(key, value)?,
                "tab-width" => {
                    self.tab_width = expect_int(key, value)?.clamp(1, 16) as usize;
                }
                "max-width" => {
                    self.max_width = usize::try_from(expect_int(key, value)?)
                        .map_err(|_| invalid(key, value))?;
                }
                "save-interval" => {
                    self.save_interval = expect_int(key, value)?.clamp(1, i64::from(u32::MAX)) as u32;
                }
                "standard" => {
                    let name = expect_str(key, value)?;
                    let standard = LangStandard::from_name(name)
                        .ok_or_else(|| SnipError::UnknownStandard(name.to_string()))?;
                    self.standard = Some(standard);
                }
                "colors" => {
                    let Value::Table(colors) = value else {
                        return Err(invalid(key, value));
                    };
                    self.apply_colors(colors)?;
                }
                _ => tracing::debug!(key = key.as_str(), "ignoring unknown config key"),
            }
        }
        Ok(())
    }

    fn apply_colors(&mut self, colors: &Table) -> Result<()> {
        for (name, value) in colors {
            let highlight = HighlightStyle::from_name(name).ok_or_else(|| invalid(name, value))?;
            let style = match value {
                Value::String(color) => Style::fg(parse_color(name, color)?),
                Value::Table(fields) => {
                    let mut style = Style::default();
                    if let Some(fg) = fields.get("fg") {
                        style = style.with_fg(parse_color(name, expect_str(name, fg)?)?);
                    }
                    if let Some(bold) = fields.get("bold") {
                        style.bold = expect_bool(name, bold)?;
                    }
                    if let Some(italic) = fields.get("italic") {
                        style.italic = expect_bool(name, italic)?;
                    }
                    style
                }
                _ => return Err(invalid(name, value)),
            };
            self.palette.set(highlight, style);
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &Value) -> SnipError {
    SnipError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| invalid(key, value))
}

fn expect_int(key: &str, value: &Value) -> Result<i64> {
    value.as_integer().ok_or_else(|| invalid(key, value))
}

fn expect_str<'v>(key: &str, value: &'v Value) -> Result<&'v str> {
    value.as_str().ok_or_else(|| invalid(key, value))
}

fn parse_color(key: &str, name: &str) -> Result<Color> {
    Color::from_name(name).ok_or_else(|| SnipError::InvalidSetting {
        key: key.to_string(),
        value: name.to_string(),
    })
}
