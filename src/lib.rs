//! `lexcheck` - ordered token checks for syntax-highlighting tokenizers.
//!
//! Highlighting tests care that the salient tokens of a fragment come out
//! with the right category and in the right order, not about every
//! whitespace or quote token in between. This crate provides that check
//! ([`verify::check_tokens`] and [`assert_tokens!`]) over any
//! [`highlight::Tokenizer`], plus the scoped command cache
//! ([`builtins::BuiltinsGuard`]) shell-aware tokenizers consult to tell
//! commands from unknown words.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow highlight::TokenKind etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Builders already carry #[must_use]

pub mod builtins;
pub mod error;
pub mod event;
pub mod highlight;
pub mod verify;

// Re-export core types at crate root
pub use builtins::{BuiltinsGuard, CommandCache};
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use highlight::{OwnedSpan, Token, TokenKind, TokenSpan, Tokenizer, TokenizerRegistry};
pub use verify::{HighlightCase, MatchFailure, Missing, check_cases, check_tokens, find_subsequence};
