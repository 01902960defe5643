//! Word-level stand-in for a shell highlighting lexer.
//!
//! It knows just enough to produce realistic streams: operators, brackets,
//! double-quoted strings, `$(`/`!(`/`@(` capture sigils, and command words
//! resolved through the loaded builtins.

use lexcheck::builtins;
use lexcheck::highlight::{Token, TokenKind, Tokenizer};

/// Names always highlighted as keywords, loaded builtins or not.
const SCRIPT_WORDS: &[&str] = &["print", "for", "in", "if", "else", "while", "def"];

pub struct FakeShellTokenizer;

fn is_special(ch: char) -> bool {
    matches!(ch, '(' | ')' | '[' | ']' | '"' | '&' | '|' | ';')
}

impl Tokenizer for FakeShellTokenizer {
    fn name(&self) -> &'static str {
        "FakeShell"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["fsh"]
    }

    fn tokenize(&self, code: &str) -> Vec<Token> {
        let cache = builtins::current();
        let mut tokens = Vec::new();
        let mut command_position = true;
        let mut pos = 0usize;

        while let Some(ch) = code[pos..].chars().next() {
            let rest = &code[pos..];

            if ch.is_whitespace() {
                let len = rest
                    .find(|c: char| !c.is_whitespace())
                    .unwrap_or(rest.len());
                tokens.push(Token::new(TokenKind::Whitespace, pos, pos + len));
                pos += len;
                continue;
            }

            if rest.starts_with("&&") || rest.starts_with("||") {
                tokens.push(Token::new(TokenKind::Operator, pos, pos + 2));
                pos += 2;
                command_position = true;
                continue;
            }

            if matches!(ch, '&' | '|' | ';') {
                tokens.push(Token::new(TokenKind::Operator, pos, pos + 1));
                pos += 1;
                command_position = true;
                continue;
            }

            if matches!(ch, '$' | '!' | '@') && matches!(rest[1..].chars().next(), Some('(' | '['))
            {
                tokens.push(Token::new(TokenKind::Keyword, pos, pos + 1));
                tokens.push(Token::new(TokenKind::Punctuation, pos + 1, pos + 2));
                pos += 2;
                command_position = ch != '@';
                continue;
            }

            if matches!(ch, '(' | ')' | '[' | ']') {
                tokens.push(Token::new(TokenKind::Punctuation, pos, pos + 1));
                pos += 1;
                command_position = false;
                continue;
            }

            if ch == '"' {
                match rest[1..].find('"') {
                    Some(body_len) => {
                        let body_start = pos + 1;
                        let body_end = body_start + body_len;
                        tokens.push(Token::new(TokenKind::Punctuation, pos, body_start));
                        if body_len > 0 {
                            tokens.push(Token::new(TokenKind::StringDouble, body_start, body_end));
                        }
                        tokens.push(Token::new(TokenKind::Punctuation, body_end, body_end + 1));
                        pos = body_end + 1;
                    }
                    None => {
                        tokens.push(Token::new(TokenKind::Error, pos, code.len()));
                        pos = code.len();
                    }
                }
                command_position = false;
                continue;
            }

            let len = rest
                .find(|c: char| c.is_whitespace() || is_special(c))
                .unwrap_or(rest.len());
            let word = &rest[..len];
            let kind = if SCRIPT_WORDS.contains(&word) {
                TokenKind::Keyword
            } else if command_position {
                match &cache {
                    Some(cache) if cache.is_command(word) => TokenKind::Keyword,
                    Some(_) => TokenKind::Error,
                    None => TokenKind::Name,
                }
            } else if cache.as_ref().is_some_and(|cache| cache.is_path(word)) {
                TokenKind::NameBuiltin
            } else {
                TokenKind::Text
            };
            tokens.push(Token::new(kind, pos, pos + len));
            pos += len;
            command_position = false;
        }

        tokens
    }
}
