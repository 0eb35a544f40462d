//! Tokenizer for long-form duration text.
//!
//! The lexer walks the input once, left to right. Whenever it sees a run of
//! ASCII digits it tries to read `<digits><whitespace?><unit word>` followed
//! by an optional `,` or `:` separator. A successful match produces exactly
//! three semantic tokens, in order: [`TokenKind::Number`], [`TokenKind::Word`]
//! and [`TokenKind::Separator`] (empty text when no separator was present).
//! Everything else is emitted as plain tokens, which are word-kind tokens
//! with no unit.
//!
//! Whitespace the source places between a number and its unit word is kept
//! as a plain token, so the concatenated token text always equals the input:
//!
//! ```rust
//! use long_form_countdown::lexer::{tokenize, concat};
//!
//! let input = "2 years, 3 months, 10 days";
//! assert_eq!(concat(&tokenize(input)), input);
//! ```

use crate::unit::Unit;
use serde::Serialize;

/// Semantic role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// The numeric magnitude of a matched unit.
    Number,
    /// A unit word, or unmatched text when the unit is `None`.
    Word,
    /// The trailing `,` or `:` of a match (possibly empty).
    Separator,
}

/// The atomic output of the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// What this piece of text is.
    pub kind: TokenKind,
    /// The unit this token belongs to; `None` for plain text.
    pub unit: Option<Unit>,
    /// The exact source text.
    pub text: String,
}

impl Token {
    /// A numeric magnitude for `unit`.
    pub fn number(unit: Unit, text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Number,
            unit: Some(unit),
            text: text.into(),
        }
    }

    /// A unit word for `unit`.
    pub fn word(unit: Unit, text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Word,
            unit: Some(unit),
            text: text.into(),
        }
    }

    /// The separator closing a `unit` match.
    pub fn separator(unit: Unit, text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Separator,
            unit: Some(unit),
            text: text.into(),
        }
    }

    /// Unmatched text, rendered as-is.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Word,
            unit: None,
            text: text.into(),
        }
    }

    /// True for plain (unmatched) text.
    pub fn is_plain(&self) -> bool {
        self.unit.is_none()
    }
}

/// Concatenates the text of every token.
pub fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Splits `input` into number/word/separator tokens and plain text.
///
/// Never fails: text without any recognisable unit comes back as a single
/// plain token, and an empty input yields no tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer {
        src: input,
        pos: 0,
        plain_start: 0,
        tokens: Vec::new(),
    };
    lexer.run();
    lexer.tokens
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    plain_start: usize,
    tokens: Vec<Token>,
}

/// A successful `<number><unit><sep>` match, as byte offsets into the source.
struct UnitMatch {
    unit: Unit,
    digits_end: usize,
    word_start: usize,
    word_end: usize,
    sep_start: usize,
    end: usize,
}

impl<'a> Lexer<'a> {
    fn run(&mut self) {
        while let Some(c) = self.src[self.pos..].chars().next() {
            if !c.is_ascii_digit() {
                self.pos += c.len_utf8();
                continue;
            }
            match self.match_unit(self.pos) {
                Some(m) => self.emit_match(m),
                // Skip the whole digit run; a shorter run would still be
                // followed by a digit and could not match either.
                None => self.pos = skip_digits(self.src, self.pos),
            }
        }
        self.flush_plain(self.src.len());
    }

    fn match_unit(&self, start: usize) -> Option<UnitMatch> {
        let digits_end = skip_digits(self.src, start);
        let word_start = skip_whitespace(self.src, digits_end);
        let (unit, word_len) = Unit::match_at(&self.src[word_start..])?;
        let word_end = word_start + word_len;

        // Whitespace after the word belongs to the match only when a
        // separator follows it; otherwise it stays plain text.
        let after_ws = skip_whitespace(self.src, word_end);
        let (sep_start, end) = match self.src[after_ws..].chars().next() {
            Some(',' | ':') => (after_ws, after_ws + 1),
            _ => (word_end, word_end),
        };

        Some(UnitMatch {
            unit,
            digits_end,
            word_start,
            word_end,
            sep_start,
            end,
        })
    }

    fn emit_match(&mut self, m: UnitMatch) {
        self.flush_plain(self.pos);
        let src = self.src;
        self.tokens.push(Token::number(m.unit, &src[self.pos..m.digits_end]));
        self.push_plain(&src[m.digits_end..m.word_start]);
        self.tokens.push(Token::word(m.unit, &src[m.word_start..m.word_end]));
        self.push_plain(&src[m.word_end..m.sep_start]);
        self.tokens.push(Token::separator(m.unit, &src[m.sep_start..m.end]));
        self.pos = m.end;
        self.plain_start = m.end;
    }

    fn flush_plain(&mut self, until: usize) {
        if until > self.plain_start {
            let text = &self.src[self.plain_start..until];
            self.tokens.push(Token::plain(text));
        }
        self.plain_start = until;
    }

    fn push_plain(&mut self, text: &str) {
        if !text.is_empty() {
            self.tokens.push(Token::plain(text));
        }
    }
}

fn skip_digits(src: &str, from: usize) -> usize {
    src[from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(src.len(), |i| from + i)
}

fn skip_whitespace(src: &str, from: usize) -> usize {
    src[from..]
        .find(|c: char| !c.is_whitespace())
        .map_or(src.len(), |i| from + i)
}
