//! Ordered token-subsequence verification.
//!
//! A highlighting check names the tokens that matter and the order they must
//! appear in. Everything the tokenizer emits in between (whitespace, quotes,
//! flags) is ignored, so a check survives immaterial lexer changes:
//!
//! ```
//! use lexcheck::highlight::{Token, TokenKind, Tokenizer};
//! use lexcheck::verify::check_tokens;
//!
//! struct Fixed;
//!
//! impl Tokenizer for Fixed {
//!     fn name(&self) -> &'static str {
//!         "fixed"
//!     }
//!
//!     fn tokenize(&self, _code: &str) -> Vec<Token> {
//!         vec![
//!             Token::new(TokenKind::Keyword, 0, 2),
//!             Token::new(TokenKind::Text, 2, 3),
//!             Token::new(TokenKind::Text, 3, 6),
//!         ]
//!     }
//! }
//!
//! assert!(check_tokens(&Fixed, "ls -al", &[(TokenKind::Keyword, "ls")]).is_ok());
//! assert!(check_tokens(&Fixed, "ls -al", &[(TokenKind::Keyword, "-al")]).is_err());
//! ```

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::event::{LogLevel, emit_log};
use crate::highlight::{OwnedSpan, TokenKind, TokenSpan, Tokenizer, resolve_spans};

/// Position of the first expected item that could not be matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Missing {
    /// Index into the expected sequence.
    pub expected_index: usize,
    /// Cursor into the actual sequence where the failed search started.
    pub searched_from: usize,
}

/// Match `expected` as an ordered, possibly non-contiguous subsequence of `actual`.
///
/// A single cursor moves left to right through `actual`. Each matched item is
/// consumed, so repeated expected items need repeated actual items. Returns
/// the cursor after the last match.
pub fn find_subsequence<T: PartialEq>(actual: &[T], expected: &[T]) -> Result<usize, Missing> {
    let mut cursor = 0usize;
    for (expected_index, wanted) in expected.iter().enumerate() {
        match actual[cursor..].iter().position(|item| item == wanted) {
            Some(offset) => cursor += offset + 1,
            None => {
                return Err(Missing {
                    expected_index,
                    searched_from: cursor,
                });
            }
        }
    }
    Ok(cursor)
}

/// An expected token that was not found, with everything needed to debug it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchFailure {
    /// The code that was tokenized.
    pub code: String,
    /// The expected token that could not be located.
    pub missing: OwnedSpan,
    /// Position of `missing` in the expected list.
    pub expected_index: usize,
    /// Length of the expected list.
    pub expected_len: usize,
    /// Byte offset in `code` where the failed search started.
    pub resume_offset: usize,
    /// The complete actual token stream.
    pub actual: Vec<OwnedSpan>,
}

impl MatchFailure {
    /// Render the token stream as `[(Kind, "text"), ...]`.
    #[must_use]
    pub fn render_actual(&self) -> String {
        let parts: Vec<String> = self.actual.iter().map(ToString::to_string).collect();
        format!("[{}]", parts.join(", "))
    }

    /// The line of `code` holding `resume_offset`, and the display column
    /// of that offset within it.
    fn resume_line(&self) -> (&str, usize) {
        let mut offset = self.resume_offset.min(self.code.len());
        while !self.code.is_char_boundary(offset) {
            offset -= 1;
        }
        let line_start = self.code[..offset].rfind('\n').map_or(0, |idx| idx + 1);
        let line_end = self.code[offset..]
            .find('\n')
            .map_or(self.code.len(), |idx| offset + idx);
        let line = self.code[line_start..line_end].trim_end_matches('\r');
        let column = self.code[line_start..offset].width();
        (line, column)
    }
}

impl fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "token {} missing (expected {} of {})",
            self.missing,
            self.expected_index + 1,
            self.expected_len
        )?;
        let (line, column) = self.resume_line();
        writeln!(f, "  {line}")?;
        writeln!(f, "  {:column$}^ search started here", "")?;
        write!(f, "actual: {}", self.render_actual())
    }
}

impl std::error::Error for MatchFailure {}

/// Check that tokenizing `code` yields `expected` in order.
///
/// Tokens must match on both kind and text. Tokens the tokenizer emits
/// between expected ones are skipped. An empty `expected` always passes.
pub fn check_tokens<T: Tokenizer + ?Sized>(
    tokenizer: &T,
    code: &str,
    expected: &[(TokenKind, &str)],
) -> Result<(), MatchFailure> {
    let tokens = tokenizer.tokenize(code);
    let actual = resolve_spans(code, &tokens);
    let wanted: Vec<TokenSpan<'_>> = expected.iter().copied().map(TokenSpan::from).collect();

    match find_subsequence(&actual, &wanted) {
        Ok(_) => {
            emit_log(
                LogLevel::Debug,
                &format!(
                    "{}: matched {} of {} tokens in {code:?}",
                    tokenizer.name(),
                    wanted.len(),
                    actual.len()
                ),
            );
            Ok(())
        }
        Err(missing) => {
            let resume_offset = missing
                .searched_from
                .checked_sub(1)
                .and_then(|idx| tokens.get(idx))
                .map_or(0, |token| token.end);
            let failure = MatchFailure {
                code: code.to_string(),
                missing: wanted[missing.expected_index].to_owned_span(),
                expected_index: missing.expected_index,
                expected_len: wanted.len(),
                resume_offset,
                actual: actual.iter().map(TokenSpan::to_owned_span).collect(),
            };
            emit_log(
                LogLevel::Warn,
                &format!(
                    "{}: token {} missing in {code:?}",
                    tokenizer.name(),
                    failure.missing
                ),
            );
            Err(failure)
        }
    }
}

/// Assert that a tokenizer's output for `code` contains the listed tokens in order.
///
/// Panics with the rendered [`MatchFailure`] otherwise.
///
/// ```
/// use lexcheck::assert_tokens;
/// use lexcheck::highlight::{Token, TokenKind, Tokenizer};
///
/// struct Whole;
///
/// impl Tokenizer for Whole {
///     fn name(&self) -> &'static str {
///         "whole"
///     }
///
///     fn tokenize(&self, code: &str) -> Vec<Token> {
///         vec![Token::new(TokenKind::Keyword, 0, code.len())]
///     }
/// }
///
/// assert_tokens!(Whole, "echo", [(TokenKind::Keyword, "echo")]);
/// assert_tokens!(Whole, "echo", []);
/// ```
#[macro_export]
macro_rules! assert_tokens {
    ($tokenizer:expr, $code:expr, [$(($kind:expr, $text:expr)),* $(,)?] $(,)?) => {
        if let ::std::result::Result::Err(failure) =
            $crate::verify::check_tokens(&$tokenizer, $code, &[$(($kind, $text)),*])
        {
            ::std::panic!("{}", failure);
        }
    };
}

/// A named highlighting check, for table-driven suites.
#[derive(Clone, Copy, Debug)]
pub struct HighlightCase<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub expected: &'a [(TokenKind, &'a str)],
}

impl<'a> HighlightCase<'a> {
    #[must_use]
    pub const fn new(name: &'a str, code: &'a str, expected: &'a [(TokenKind, &'a str)]) -> Self {
        Self {
            name,
            code,
            expected,
        }
    }
}

/// Run every case and collect the failures instead of stopping at the first.
pub fn check_cases<'a, T: Tokenizer + ?Sized>(
    tokenizer: &T,
    cases: &[HighlightCase<'a>],
) -> Vec<(&'a str, MatchFailure)> {
    cases
        .iter()
        .filter_map(|case| {
            check_tokens(tokenizer, case.code, case.expected)
                .err()
                .map(|failure| (case.name, failure))
        })
        .collect()
}
