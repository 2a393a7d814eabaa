//! C and C++ keyword table

use std::collections::HashMap;

use super::options::{LangOptions, LangStandard};
use crate::highlight::KeywordTable;

use LangStandard::{Cxx11, Cxx20, Cxx98, C11, C23, C89, C99};

/// A reserved word and the first standard of each family that reserves it
#[derive(Debug, Clone, Copy)]
struct Keyword {
    spelling: &'static str,
    c: Option<LangStandard>,
    cxx: Option<LangStandard>,
}

const fn both(spelling: &'static str) -> Keyword {
    Keyword { spelling, c: Some(C89), cxx: Some(Cxx98) }
}

const fn c_only(spelling: &'static str, since: LangStandard) -> Keyword {
    Keyword { spelling, c: Some(since), cxx: None }
}

const fn cxx_only(spelling: &'static str, since: LangStandard) -> Keyword {
    Keyword { spelling, c: None, cxx: Some(since) }
}

const fn since(spelling: &'static str, c: LangStandard, cxx: LangStandard) -> Keyword {
    Keyword { spelling, c: Some(c), cxx: Some(cxx) }
}

const KEYWORDS: &[Keyword] = &[
    both("auto"),
    both("break"),
    both("case"),
    both("char"),
    both("const"),
    both("continue"),
    both("default"),
    both("do"),
    both("double"),
    both("else"),
    both("enum"),
    both("extern"),
    both("float"),
    both("for"),
    both("goto"),
    both("if"),
    both("int"),
    both("long"),
    both("register"),
    both("return"),
    both("short"),
    both("signed"),
    both("sizeof"),
    both("static"),
    both("struct"),
    both("switch"),
    both("typedef"),
    both("union"),
    both("unsigned"),
    both("void"),
    both("volatile"),
    both("while"),
    since("inline", C99, Cxx98),
    c_only("restrict", C99),
    c_only("_Bool", C99),
    c_only("_Complex", C99),
    c_only("_Imaginary", C99),
    c_only("_Alignas", C11),
    c_only("_Alignof", C11),
    c_only("_Atomic", C11),
    c_only("_Generic", C11),
    c_only("_Noreturn", C11),
    c_only("_Static_assert", C11),
    c_only("_Thread_local", C11),
    c_only("typeof", C23),
    c_only("typeof_unqual", C23),
    c_only("_BitInt", C23),
    c_only("_Decimal32", C23),
    c_only("_Decimal64", C23),
    c_only("_Decimal128", C23),
    since("bool", C23, Cxx98),
    since("true", C23, Cxx98),
    since("false", C23, Cxx98),
    since("alignas", C23, Cxx11),
    since("alignof", C23, Cxx11),
    since("constexpr", C23, Cxx11),
    since("nullptr", C23, Cxx11),
    since("static_assert", C23, Cxx11),
    since("thread_local", C23, Cxx11),
    cxx_only("asm", Cxx98),
    cxx_only("catch", Cxx98),
    cxx_only("class", Cxx98),
    cxx_only("const_cast", Cxx98),
    cxx_only("delete", Cxx98),
    cxx_only("dynamic_cast", Cxx98),
    cxx_only("explicit", Cxx98),
    cxx_only("export", Cxx98),
    cxx_only("friend", Cxx98),
    cxx_only("mutable", Cxx98),
    cxx_only("namespace", Cxx98),
    cxx_only("new", Cxx98),
    cxx_only("operator", Cxx98),
    cxx_only("private", Cxx98),
    cxx_only("protected", Cxx98),
    cxx_only("public", Cxx98),
    cxx_only("reinterpret_cast", Cxx98),
    cxx_only("static_cast", Cxx98),
    cxx_only("template", Cxx98),
    cxx_only("this", Cxx98),
    cxx_only("throw", Cxx98),
    cxx_only("try", Cxx98),
    cxx_only("typeid", Cxx98),
    cxx_only("typename", Cxx98),
    cxx_only("using", Cxx98),
    cxx_only("virtual", Cxx98),
    cxx_only("wchar_t", Cxx98),
    cxx_only("and", Cxx98),
    cxx_only("and_eq", Cxx98),
    cxx_only("bitand", Cxx98),
    cxx_only("bitor", Cxx98),
    cxx_only("compl", Cxx98),
    cxx_only("not", Cxx98),
    cxx_only("not_eq", Cxx98),
    cxx_only("or", Cxx98),
    cxx_only("or_eq", Cxx98),
    cxx_only("xor", Cxx98),
    cxx_only("xor_eq", Cxx98),
    cxx_only("char16_t", Cxx11),
    cxx_only("char32_t", Cxx11),
    cxx_only("decltype", Cxx11),
    cxx_only("noexcept", Cxx11),
    cxx_only("char8_t", Cxx20),
    cxx_only("concept", Cxx20),
    cxx_only("consteval", Cxx20),
    cxx_only("constinit", Cxx20),
    cxx_only("co_await", Cxx20),
    cxx_only("co_return", Cxx20),
    cxx_only("co_yield", Cxx20),
    cxx_only("requires", Cxx20),
];

/// Keyword lookup for every C and C++ standard
#[derive(Debug)]
pub struct Keywords {
    table: HashMap<&'static str, Keyword>,
    external_lookup: bool,
}

impl Keywords {
    pub fn new() -> Self {
        Self {
            table: KEYWORDS.iter().map(|kw| (kw.spelling, *kw)).collect(),
            external_lookup: false,
        }
    }

    /// Mark identifiers as resolved through an external source (e.g. a
    /// precompiled module), where a lookup may itself produce diagnostics.
    pub fn with_external_lookup(mut self, external: bool) -> Self {
        self.external_lookup = external;
        self
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordTable for Keywords {
    fn is_keyword(&self, spelling: &str, lang: &LangOptions) -> bool {
        let Some(kw) = self.table.get(spelling) else {
            return false;
        };
        let since = if lang.is_cplusplus() { kw.cxx } else { kw.c };
        since.is_some_and(|min| lang.at_least(min))
    }

    fn supports_safe_lookup(&self) -> bool {
        !self.external_lookup
    }
}
