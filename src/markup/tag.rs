//! Start tag parsing and class mutation
//!
//! Only the root start tag of a fragment is parsed. Mutations rewrite the
//! bytes of a single attribute and leave the rest of the fragment untouched.

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::{MarkupError, Span};

use super::lexer::{lex_start_tag, AttrValue, Token};

pub use super::lexer::Quote;

/// A single `name[=value]` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
    pub quote: Quote,
    /// Span of the whole attribute, name through value
    pub span: Span,
}

/// A parsed start tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub self_closing: bool,
    /// Span from `<` through `>` or `/>`
    pub span: Span,
}

impl StartTag {
    /// First attribute with the given name, compared case-insensitively
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Class tokens of the tag, in source order
    pub fn classes(&self) -> Vec<&str> {
        self.attribute("class")
            .and_then(|a| a.value.as_deref())
            .map(|v| v.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    /// Byte offset just past the tag name
    fn name_end(&self) -> usize {
        self.span.start + 1 + self.name.len()
    }

    /// Return `source` with `class` added to this tag's class list
    ///
    /// An existing class attribute is rewritten in place with double quotes;
    /// otherwise a new one is inserted right after the tag name. A class that
    /// is already present is not added twice.
    pub fn add_class(&self, source: &str, class: &str) -> String {
        if self.classes().contains(&class) {
            return source.to_string();
        }

        match self.attribute("class") {
            Some(attr) => {
                let existing = attr.value.as_deref().unwrap_or_default().trim_end();
                let merged = if existing.trim_start().is_empty() {
                    class.to_string()
                } else {
                    format!("{} {}", existing, class)
                };
                let mut out = String::with_capacity(source.len() + class.len() + 8);
                out.push_str(&source[..attr.span.start]);
                out.push_str(&format!("{}=\"{}\"", attr.name, escape_attribute(&merged)));
                out.push_str(&source[attr.span.end..]);
                out
            }
            None => {
                let at = self.name_end();
                let mut out = String::with_capacity(source.len() + class.len() + 9);
                out.push_str(&source[..at]);
                out.push_str(&format!(" class=\"{}\"", escape_attribute(class)));
                out.push_str(&source[at..]);
                out
            }
        }
    }
}

/// Values are copied raw, so entity references stay as written; only the
/// delimiter needs escaping.
fn escape_attribute(value: &str) -> String {
    value.replace('"', "&quot;")
}

/// Byte offset of the first start tag in `source`, skipping comments and
/// declarations
fn root_tag_offset(source: &str) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut i = 0;
    while let Some(pos) = source[i..].find('<') {
        let at = i + pos;
        let rest = &source[at..];
        if rest.starts_with("<!--") {
            i = match rest.find("-->") {
                Some(end) => at + end + 3,
                None => return None,
            };
            continue;
        }
        if bytes.get(at + 1).is_some_and(|b| b.is_ascii_alphabetic()) {
            return Some(at);
        }
        i = at + 1;
    }
    None
}

/// Parse the root start tag of a fragment
pub fn parse_root_tag(source: &str) -> Result<StartTag, MarkupError> {
    let start = root_tag_offset(source).ok_or(MarkupError::NoRootTag)?;
    let len = source.len();

    let token_iter = lex_start_tag(&source[start..], start).map(|(tok, span)| (tok, span.into()));

    let token_stream = Stream::from_iter(token_iter)
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    start_tag_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| match errs.into_iter().next() {
            Some(err) => err.into(),
            None => MarkupError::NoRootTag,
        })
}

fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn start_tag_parser<'a, I>() -> impl Parser<'a, I, StartTag, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let tag_open = select! {
        Token::TagOpen(name) => name,
    };

    let name = select! {
        Token::Name(name) => name,
    };

    let value = select! {
        Token::Value(v) => v,
    };

    let attribute = name
        .then(value.or_not())
        .map_with(|(name, value): (String, Option<AttrValue>), e| {
            let (value, quote) = match value {
                Some(v) => (Some(v.text), v.quote),
                None => (None, Quote::None),
            };
            Attribute {
                name,
                value,
                quote,
                span: span_range(&e.span()),
            }
        });

    let attributes = attribute
        .then_ignore(just(Token::Slash).repeated())
        .repeated()
        .collect::<Vec<_>>();

    let close = choice((
        just(Token::TagEnd).to(false),
        just(Token::SelfClose).to(true),
    ));

    tag_open
        .then_ignore(just(Token::Slash).repeated())
        .then(attributes)
        .then(close)
        .map_with(|((name, attributes), self_closing), e| StartTag {
            name,
            attributes,
            self_closing,
            span: span_range(&e.span()),
        })
}

impl<'a> From<Rich<'a, Token>> for MarkupError {
    fn from(err: Rich<'a, Token>) -> Self {
        use chumsky::error::RichPattern;

        let message = match err.found() {
            Some(tok) => format!("Unexpected {}", tok),
            None => "Unexpected end of fragment".to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                RichPattern::Token(tok) => Some((**tok).to_string()),
                RichPattern::Label(label) => Some(label.to_string()),
                RichPattern::EndOfInput => Some("end of input".to_string()),
                _ => None,
            })
            .collect();

        MarkupError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}
