//! Lexer for a single HTML start tag using logos

use std::fmt;

use logos::{Lexer, Logos};

use crate::error::Span;

/// How an attribute value was quoted in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
    None,
}

/// The value after an `=`, with its quoting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrValue {
    pub text: String,
    pub quote: Quote,
}

impl AttrValue {
    fn new(text: &str, quote: Quote) -> Self {
        Self {
            text: text.to_string(),
            quote,
        }
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// Consume whitespace and the value following `=`
///
/// An unquoted value runs to the next whitespace or `>`. A missing value
/// (`class=>`) is empty. Fails on an unterminated quote.
fn lex_value(lex: &mut Lexer<'_, Token>) -> Option<AttrValue> {
    let rest = lex.remainder();
    let trimmed = rest.trim_start_matches(is_space);
    let skipped = rest.len() - trimmed.len();

    let (value, consumed) = match trimmed.chars().next() {
        Some(q @ ('"' | '\'')) => {
            let end = trimmed[1..].find(q)?;
            let quote = if q == '"' { Quote::Double } else { Quote::Single };
            (AttrValue::new(&trimmed[1..1 + end], quote), end + 2)
        }
        Some('>') | None => (AttrValue::new("", Quote::None), 0),
        Some(_) => {
            let end = trimmed
                .find(|c: char| is_space(c) || c == '>')
                .unwrap_or(trimmed.len());
            (AttrValue::new(&trimmed[..end], Quote::None), end)
        }
    };

    lex.bump(skipped + consumed);
    Some(value)
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\x0C]+")]
pub enum Token {
    /// `<name`, carrying the tag name
    #[regex(r"<[A-Za-z][^ \t\n\r\x0C/>]*", |lex| lex.slice()[1..].to_string())]
    TagOpen(String),

    #[token(">")]
    TagEnd,
    #[token("/>")]
    SelfClose,

    /// Stray `/` between attributes, ignored by browsers
    #[token("/")]
    Slash,

    /// `=` together with the value it assigns
    #[token("=", lex_value)]
    Value(AttrValue),

    #[regex(r#"[^ \t\n\r\x0C"'<>=/]+"#, |lex| lex.slice().to_string())]
    Name(String),

    /// Input the lexer could not classify
    Error,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::TagOpen(name) => write!(f, "'<{}'", name),
            Token::TagEnd => f.write_str("'>'"),
            Token::SelfClose => f.write_str("'/>'"),
            Token::Slash => f.write_str("'/'"),
            Token::Value(v) => match v.quote {
                Quote::Double => write!(f, "value \"{}\"", v.text),
                Quote::Single => write!(f, "value '{}'", v.text),
                Quote::None => write!(f, "value {}", v.text),
            },
            Token::Name(s) => write!(f, "name '{}'", s),
            Token::Error => f.write_str("invalid input"),
        }
    }
}

/// Lex the start tag at the beginning of `input`
///
/// Spans are shifted by `offset` so they index the enclosing fragment. The
/// iterator stops after the token that closes the tag.
pub fn lex_start_tag(input: &str, offset: usize) -> impl Iterator<Item = (Token, Span)> + '_ {
    let mut done = false;
    Token::lexer(input)
        .spanned()
        .map(move |(tok, span)| {
            (
                tok.unwrap_or(Token::Error),
                span.start + offset..span.end + offset,
            )
        })
        .take_while(move |(tok, _)| {
            if done {
                return false;
            }
            done = matches!(tok, Token::TagEnd | Token::SelfClose);
            true
        })
}
