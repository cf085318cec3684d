//! Recursive-descent parser for the relaxed object-literal grammar.
//!
//! The grammar is a JSON superset: unquoted or quoted keys, single- or
//! double-quoted strings, trailing commas, `undefined`, and `//` line
//! comments. Parsing is best-effort: the only hard failure is a lone
//! `/` that does not open a comment; anything else that cannot be
//! recognized degrades into a `Null`-typed value.

use std::fmt;

use crate::ast::{AstNode, AstValue, CommentPlacement, Root};
use crate::context::{Position, SourceContext};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// `/` not followed by a second `/` inside an object body.
    MalformedComment { found: Option<char> },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedComment { found: None } => {
                write!(f, "expected '//' to start a comment")
            }
            Self::MalformedComment { found: Some(ch) } => {
                write!(f, "expected '//' to start a comment, got '/{ch}'")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", pos.line, pos.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: Position,
}

/// Parse a relaxed object literal into a [`Root`] AST.
///
/// The top-level braces are optional: `a: 1` and `{a: 1}` parse to the
/// same tree.
///
/// # Errors
///
/// Returns `ParseError` when a `/` inside an object body is not
/// followed by a second `/`. No other input fails.
pub fn parse(input: &str) -> Result<Root, ParseError> {
    let mut parser = Parser::new(input);
    let children = parser.parse_children()?;
    Ok(Root { children })
}

struct Parser<'a> {
    ctx: SourceContext<'a>,
}

impl<'a> Parser<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            ctx: SourceContext::new(input),
        }
    }

    /// Object-body loop: consumes `{`, returns on `}`, dispatches
    /// comments and fields.
    fn parse_children(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut nodes = Vec::new();

        while !self.ctx.is_end() {
            self.ctx.advance_spaces();
            let rest = self.ctx.remaining();

            match rest.as_bytes().first() {
                None => break,
                Some(b'{') => self.ctx.advance_by(1),
                Some(b'}') => {
                    self.ctx.advance_by(1);
                    self.ctx.advance_spaces();
                    return Ok(nodes);
                }
                Some(b'/') => {
                    if rest.as_bytes().get(1) == Some(&b'/') {
                        // A comment on the same line as the previous
                        // sibling trails it; otherwise it leads the
                        // next one.
                        let last_line = nodes.last().map(|n| n.loc().end.line);
                        let placement = if Some(self.ctx.cursor().line) == last_line {
                            CommentPlacement::Trailing
                        } else {
                            CommentPlacement::Leading
                        };
                        nodes.push(self.parse_comment(placement));
                        self.ctx.advance_spaces();
                    } else {
                        return Err(ParseError {
                            kind: ParseErrorKind::MalformedComment {
                                found: rest.chars().nth(1),
                            },
                            pos: self.ctx.cursor(),
                        });
                    }
                }
                Some(_) => nodes.push(self.parse_data(false)?),
            }
        }

        Ok(nodes)
    }

    /// One key/value pair or array element, including the optional
    /// trailing comma. This is the only production that consumes
    /// commas.
    fn parse_data(&mut self, array_item: bool) -> Result<AstNode, ParseError> {
        self.ctx.advance_spaces();
        let start = self.ctx.cursor();
        let key = if array_item {
            None
        } else {
            Some(self.parse_key())
        };
        let value = self.parse_value()?;
        let loc = self.ctx.span_from(start);

        self.ctx.advance_spaces();
        if self.ctx.remaining().starts_with(',') {
            self.ctx.advance_by(1);
            self.ctx.advance_spaces();
        }

        Ok(match key {
            Some(key) => AstNode::Field { key, value, loc },
            None => AstNode::Element { value, loc },
        })
    }

    /// Key plus its optional `:`. A quoted key runs from the opening
    /// quote to the next occurrence of that same quote character (no
    /// escape support); an unquoted key is everything up to the next
    /// `:`, trimmed. A missing colon is diagnosed but never fatal.
    fn parse_key(&mut self) -> String {
        let rest = self.ctx.remaining();
        let mut saw_colon = false;

        let key = match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                // First content character is taken unconditionally,
                // the remainder runs to the closing quote.
                let after = &rest[1..];
                let content = after.chars().next().map_or_else(String::new, |first| {
                    let tail = &after[first.len_utf8()..];
                    let end = tail.find(quote).unwrap_or(tail.len());
                    let mut content = String::with_capacity(first.len_utf8() + end);
                    content.push(first);
                    content.push_str(&tail[..end]);
                    content
                });
                self.ctx.advance_by(1 + content.len() + 1);
                content
            }
            _ => {
                let end = rest.find(':').unwrap_or(rest.len());
                if end < rest.len() {
                    saw_colon = true;
                }
                let content = rest[..end].trim().to_string();
                // the +1 consumes the colon itself
                self.ctx.advance_by(end + 1);
                content
            }
        };

        self.ctx.advance_spaces();
        if self.ctx.remaining().starts_with(':') {
            self.ctx.advance_by(1);
            self.ctx.advance_spaces();
            saw_colon = true;
        }
        if !saw_colon {
            let pos = self.ctx.cursor();
            log::warn!(
                "missing ':' after key '{key}' at line {}, column {}",
                pos.line,
                pos.column
            );
        }

        key
    }

    /// Dispatch on the first character of the remaining source. An
    /// unrecognized character yields `Null` and consumes nothing.
    fn parse_value(&mut self) -> Result<AstValue, ParseError> {
        let rest = self.ctx.remaining();
        let Some(first) = rest.chars().next() else {
            return Ok(AstValue::Null);
        };

        if first.is_ascii_digit() {
            return Ok(self.parse_number());
        }
        if first == '"' || first == '\'' {
            return Ok(self.parse_string());
        }
        if first == '[' {
            self.ctx.advance_by(1);
            return Ok(AstValue::Array(self.parse_array()?));
        }
        if first == '{' {
            // parse_children consumes the brace itself
            return Ok(AstValue::Object(self.parse_children()?));
        }

        // Keyword literals are matched as prefixes of the remaining
        // source, not as whole tokens: `nullable` parses as `null`
        // with `able` left over.
        if rest.starts_with("null") {
            self.ctx.advance_by(4);
            return Ok(AstValue::Null);
        }
        if rest.starts_with("true") {
            self.ctx.advance_by(4);
            return Ok(AstValue::Boolean(true));
        }
        if rest.starts_with("false") {
            self.ctx.advance_by(5);
            return Ok(AstValue::Boolean(false));
        }
        if rest.starts_with("undefined") {
            self.ctx.advance_by(9);
            return Ok(AstValue::Undefined);
        }

        Ok(AstValue::Null)
    }

    /// Maximal run of ASCII digits. No sign, no decimal point, no
    /// exponent.
    fn parse_number(&mut self) -> AstValue {
        let rest = self.ctx.remaining();
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let digits = rest[..len].to_string();
        self.ctx.advance_by(len);
        AstValue::Number(digits)
    }

    /// String content runs to the next occurrence of *either* quote
    /// character, not necessarily the one that opened it: `"ab'`
    /// terminates at the `'`.
    fn parse_string(&mut self) -> AstValue {
        let rest = self.ctx.remaining();
        let after = &rest[1..];
        let end = after.find(['"', '\'']).unwrap_or(after.len());
        let content = after[..end].to_string();
        // opening quote + content + terminator
        self.ctx.advance_by(1 + end + 1);
        AstValue::String(content)
    }

    /// Array items until `]`. The closing bracket is checked after
    /// each item, so `[]` still runs the item parse once and carries a
    /// single `Null` element.
    fn parse_array(&mut self) -> Result<Vec<AstNode>, ParseError> {
        let mut nodes = Vec::new();

        while !self.ctx.is_end() {
            let before = self.ctx.cursor().offset;
            nodes.push(self.parse_data(true)?);

            if self.ctx.remaining().starts_with(']') {
                self.ctx.advance_by(1);
                return Ok(nodes);
            }
            if self.ctx.cursor().offset == before {
                // zero-width item and no closing bracket: skip one
                // character so malformed input cannot stall the loop
                let skip = self.ctx.remaining().chars().next().map_or(0, char::len_utf8);
                self.ctx.advance_by(skip);
            }
        }

        Ok(nodes)
    }

    /// `//` plus optional whitespace, then the rest of the physical
    /// line (stops at tab/LF/CR/FF).
    fn parse_comment(&mut self, placement: CommentPlacement) -> AstNode {
        let start = self.ctx.cursor();
        let rest = self.ctx.remaining();
        let body = &rest[2..];
        let ws = body
            .bytes()
            .take_while(|b| matches!(b, b'\t' | b'\r' | b'\n' | b'\x0C' | b' '))
            .count();
        let after_ws = &body[ws..];
        let end = after_ws
            .find(['\t', '\n', '\r', '\x0C'])
            .unwrap_or(after_ws.len());
        let text = after_ws[..end].to_string();
        self.ctx.advance_by(2 + ws + end);

        AstNode::Comment {
            placement,
            text,
            loc: self.ctx.span_from(start),
        }
    }
}
