//! Tokenizer capability and lookup registry.

use std::collections::HashMap;
use std::sync::Arc;

use super::token::{Token, TokenKind, TokenSpan};

/// Capability interface for an external highlighting lexer.
///
/// Implementations own the grammar; this crate only consumes the stream.
pub trait Tokenizer: Send + Sync {
    /// Human-readable name of this tokenizer.
    fn name(&self) -> &'static str;

    /// Alternative lookup names (e.g. `xsh` for a shell lexer).
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Tokenize `code` into ordered, non-overlapping byte ranges.
    ///
    /// Every call produces a fresh stream. Re-tokenizing the same input must
    /// yield the same tokens.
    fn tokenize(&self, code: &str) -> Vec<Token>;

    /// Tokenize and resolve every range to its text.
    fn spans<'a>(&self, code: &'a str) -> Vec<TokenSpan<'a>> {
        resolve_spans(code, &self.tokenize(code))
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn aliases(&self) -> &'static [&'static str] {
        (**self).aliases()
    }

    fn tokenize(&self, code: &str) -> Vec<Token> {
        (**self).tokenize(code)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn aliases(&self) -> &'static [&'static str] {
        (**self).aliases()
    }

    fn tokenize(&self, code: &str) -> Vec<Token> {
        (**self).tokenize(code)
    }
}

/// Resolve token ranges against `code`.
///
/// A range that is out of bounds or splits a UTF-8 sequence resolves to an
/// empty `Error` span.
#[must_use]
pub fn resolve_spans<'a>(code: &'a str, tokens: &[Token]) -> Vec<TokenSpan<'a>> {
    tokens
        .iter()
        .map(|token| match code.get(token.range()) {
            Some(text) => TokenSpan::new(token.kind, text),
            None => TokenSpan::new(TokenKind::Error, ""),
        })
        .collect()
}

/// Registry for tokenizer lookup by name or alias.
#[derive(Default)]
pub struct TokenizerRegistry {
    tokenizers: Vec<Arc<dyn Tokenizer>>,
    by_name: HashMap<String, usize>,
}

impl TokenizerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tokenizer. Later registrations override existing lookups.
    pub fn register(&mut self, tokenizer: Box<dyn Tokenizer>) {
        let tokenizer: Arc<dyn Tokenizer> = Arc::from(tokenizer);
        let index = self.tokenizers.len();

        let keys = std::iter::once(tokenizer.name()).chain(tokenizer.aliases().iter().copied());
        for key in keys {
            let key = key.trim().to_ascii_lowercase();
            if !key.is_empty() {
                self.by_name.insert(key, index);
            }
        }

        self.tokenizers.push(tokenizer);
    }

    /// Get tokenizer by name or alias (case-insensitive).
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&dyn Tokenizer> {
        let index = self.by_name.get(&name.trim().to_ascii_lowercase())?;
        self.tokenizers.get(*index).map(AsRef::as_ref)
    }

    /// Get tokenizer by name or alias (case-insensitive).
    #[must_use]
    pub fn by_name_shared(&self, name: &str) -> Option<Arc<dyn Tokenizer>> {
        let index = self.by_name.get(&name.trim().to_ascii_lowercase())?;
        self.tokenizers.get(*index).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokenizers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokenizers.is_empty()
    }
}
