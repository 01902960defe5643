//! Token model and the tokenizer capability consumed by verification.

pub mod token;
pub mod tokenizer;

pub use token::{OwnedSpan, Token, TokenKind, TokenSpan};
pub use tokenizer::{Tokenizer, TokenizerRegistry, resolve_spans};
