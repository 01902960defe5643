//! Token types for syntax highlighting.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::Error;

/// Semantic token categories produced by tokenizers.
///
/// Categories form a shallow hierarchy: `String.Double` is a kind of
/// `String`, `Name.Builtin` is a kind of `Name`. Matching never walks the
/// hierarchy; two kinds are equal only when they are the same variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Default
    Text,
    Whitespace,

    // Errors
    Error,

    // Keywords
    Keyword,
    KeywordConstant,

    // Identifiers
    Name,
    NameBuiltin,
    NameFunction,

    // Literals
    String,
    StringAffix,
    StringBacktick,
    StringDouble,
    StringSingle,
    StringEscape,
    StringRegex,
    Number,

    // Operators and punctuation
    Operator,
    Punctuation,

    // Comments
    Comment,

    // Generic output (prompts, tracebacks, diff markers)
    Generic,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::Text,
        Self::Whitespace,
        Self::Error,
        Self::Keyword,
        Self::KeywordConstant,
        Self::Name,
        Self::NameBuiltin,
        Self::NameFunction,
        Self::String,
        Self::StringAffix,
        Self::StringBacktick,
        Self::StringDouble,
        Self::StringSingle,
        Self::StringEscape,
        Self::StringRegex,
        Self::Number,
        Self::Operator,
        Self::Punctuation,
        Self::Comment,
        Self::Generic,
    ];

    /// Dotted category name, e.g. `String.Double`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Whitespace => "Whitespace",
            Self::Error => "Error",
            Self::Keyword => "Keyword",
            Self::KeywordConstant => "Keyword.Constant",
            Self::Name => "Name",
            Self::NameBuiltin => "Name.Builtin",
            Self::NameFunction => "Name.Function",
            Self::String => "String",
            Self::StringAffix => "String.Affix",
            Self::StringBacktick => "String.Backtick",
            Self::StringDouble => "String.Double",
            Self::StringSingle => "String.Single",
            Self::StringEscape => "String.Escape",
            Self::StringRegex => "String.Regex",
            Self::Number => "Number",
            Self::Operator => "Operator",
            Self::Punctuation => "Punctuation",
            Self::Comment => "Comment",
            Self::Generic => "Generic",
        }
    }

    /// Immediate supertype, or `None` for top-level categories.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::KeywordConstant => Some(Self::Keyword),
            Self::NameBuiltin | Self::NameFunction => Some(Self::Name),
            Self::StringAffix
            | Self::StringBacktick
            | Self::StringDouble
            | Self::StringSingle
            | Self::StringEscape
            | Self::StringRegex => Some(Self::String),
            _ => None,
        }
    }

    /// True when `ancestor` is this kind or one of its supertypes.
    #[must_use]
    pub fn is_subtype_of(self, ancestor: Self) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == trimmed)
            .ok_or_else(|| Error::UnknownKind(trimmed.to_string()))
    }
}

/// A token produced by a tokenizer: a category over a byte range of the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "token range must be start <= end");
        Self { kind, start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A token paired with its source text slice.
///
/// This is the `(category, text)` pair that verification compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenSpan<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> TokenSpan<'a> {
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    #[must_use]
    pub fn to_owned_span(&self) -> OwnedSpan {
        OwnedSpan {
            kind: self.kind,
            text: self.text.to_string(),
        }
    }
}

impl<'a> From<(TokenKind, &'a str)> for TokenSpan<'a> {
    fn from((kind, text): (TokenKind, &'a str)) -> Self {
        Self { kind, text }
    }
}

impl fmt::Display for TokenSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.kind, self.text)
    }
}

/// Owned `(category, text)` pair, used where spans must outlive the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OwnedSpan {
    pub kind: TokenKind,
    pub text: String,
}

impl OwnedSpan {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn as_span(&self) -> TokenSpan<'_> {
        TokenSpan::new(self.kind, &self.text)
    }
}

impl fmt::Display for OwnedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_span().fmt(f)
    }
}
