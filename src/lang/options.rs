//! Language standards and options

use std::fmt;
use std::path::Path;

/// C and C++ language standards.
///
/// Variants are ordered by release within each family, so `>=` answers
/// "at least this standard" when both sides are from the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LangStandard {
    C89,
    C99,
    C11,
    C17,
    C23,
    Cxx98,
    Cxx11,
    Cxx14,
    Cxx17,
    Cxx20,
    Cxx23,
}

impl LangStandard {
    /// Parse a standard from its command-line spelling
    pub fn from_name(name: &str) -> Option<Self> {
        let standard = match name.trim().to_lowercase().as_str() {
            "c89" | "c90" | "ansi" => LangStandard::C89,
            "c99" => LangStandard::C99,
            "c11" => LangStandard::C11,
            "c17" | "c18" => LangStandard::C17,
            "c23" | "c2x" => LangStandard::C23,
            "c++98" | "c++03" => LangStandard::Cxx98,
            "c++11" | "c++0x" => LangStandard::Cxx11,
            "c++14" | "c++1y" => LangStandard::Cxx14,
            "c++17" | "c++1z" => LangStandard::Cxx17,
            "c++20" | "c++2a" => LangStandard::Cxx20,
            "c++23" | "c++2b" => LangStandard::Cxx23,
            _ => return None,
        };
        Some(standard)
    }

    pub fn name(&self) -> &'static str {
        match self {
            LangStandard::C89 => "c89",
            LangStandard::C99 => "c99",
            LangStandard::C11 => "c11",
            LangStandard::C17 => "c17",
            LangStandard::C23 => "c23",
            LangStandard::Cxx98 => "c++98",
            LangStandard::Cxx11 => "c++11",
            LangStandard::Cxx14 => "c++14",
            LangStandard::Cxx17 => "c++17",
            LangStandard::Cxx20 => "c++20",
            LangStandard::Cxx23 => "c++23",
        }
    }

    pub fn is_cplusplus(&self) -> bool {
        *self >= LangStandard::Cxx98
    }
}

impl fmt::Display for LangStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The active language configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LangOptions {
    pub standard: LangStandard,
}

impl LangOptions {
    pub fn new(standard: LangStandard) -> Self {
        Self { standard }
    }

    /// Guess the language from a file extension
    pub fn for_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        let standard = match ext.as_str() {
            "c" | "h" => LangStandard::C17,
            "cc" | "cpp" | "cxx" | "c++" | "hh" | "hpp" | "hxx" | "ipp" => LangStandard::Cxx17,
            _ => return None,
        };
        Some(Self::new(standard))
    }

    pub fn is_cplusplus(&self) -> bool {
        self.standard.is_cplusplus()
    }

    /// Whether `standard` is at least `min` within the active family
    pub fn at_least(&self, min: LangStandard) -> bool {
        self.is_cplusplus() == min.is_cplusplus() && self.standard >= min
    }

    /// `R"delim(...)delim"` literals
    pub fn raw_string_literals(&self) -> bool {
        self.at_least(LangStandard::Cxx11)
    }

    /// `1'000'000`
    pub fn digit_separators(&self) -> bool {
        self.at_least(LangStandard::Cxx14) || self.at_least(LangStandard::C23)
    }
}

impl Default for LangOptions {
    fn default() -> Self {
        Self::new(LangStandard::Cxx17)
    }
}
