//! Tokenizer that replays canned streams keyed by input.

use std::collections::HashMap;

use lexcheck::highlight::{Token, TokenKind, Tokenizer};

/// Replays a registered `(kind, text)` stream for each known input.
///
/// The pieces of a script must concatenate to the input exactly. Unknown
/// inputs come back as a single `Text` token.
#[derive(Default)]
pub struct ScriptedTokenizer {
    scripts: HashMap<String, Vec<(TokenKind, String)>>,
}

impl ScriptedTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, pieces: &[(TokenKind, &str)]) -> Self {
        let code: String = pieces.iter().map(|(_, text)| *text).collect();
        let pieces = pieces
            .iter()
            .map(|(kind, text)| (*kind, (*text).to_string()))
            .collect();
        self.scripts.insert(code, pieces);
        self
    }
}

impl Tokenizer for ScriptedTokenizer {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn tokenize(&self, code: &str) -> Vec<Token> {
        let Some(pieces) = self.scripts.get(code) else {
            return vec![Token::new(TokenKind::Text, 0, code.len())];
        };
        let mut offset = 0;
        pieces
            .iter()
            .map(|(kind, text)| {
                let token = Token::new(*kind, offset, offset + text.len());
                offset = token.end;
                token
            })
            .collect()
    }
}
