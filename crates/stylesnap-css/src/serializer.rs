//! [§ 9 Serialization](https://www.w3.org/TR/css-syntax-3/#serialization)
//!
//! Turns parsed rules back into stylesheet text. Two layouts are supported:
//! the readable one used in snapshots (one declaration per line, rules
//! separated by a blank line) and a compressed one without any optional
//! whitespace.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::parser::{AtRule, ComponentValue, Declaration, MediaRule, Rule, StyleRule, Stylesheet};
use crate::tokenizer::CSSToken;

/// How [`Stylesheet::to_css`] lays out its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "style")]
pub enum OutputStyle {
    /// One declaration per line, nested rules indented by `indent` spaces.
    Pretty {
        /// Spaces per nesting level.
        #[serde(default = "default_indent")]
        indent: usize,
    },
    /// No optional whitespace: `.a{color:red}`.
    Compressed,
}

const fn default_indent() -> usize {
    2
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::Pretty {
            indent: default_indent(),
        }
    }
}

impl Stylesheet {
    /// Serialize every rule in order.
    ///
    /// Style rules without declarations produce no output. An empty
    /// stylesheet serializes to the empty string.
    #[must_use]
    pub fn to_css(&self, style: OutputStyle) -> String {
        let separator = match style {
            OutputStyle::Pretty { .. } => "\n\n",
            OutputStyle::Compressed => "",
        };
        serialize_rules(&self.rules, style, 0).join(separator)
    }
}

fn serialize_rules(rules: &[Rule], style: OutputStyle, depth: usize) -> Vec<String> {
    rules
        .iter()
        .map(|rule| match rule {
            Rule::Style(rule) => serialize_style_rule(rule, style, depth),
            Rule::Media(rule) => serialize_media_rule(rule, style, depth),
            Rule::At(rule) => serialize_at_rule(rule, style, depth),
        })
        .filter(|text| !text.is_empty())
        .collect()
}

fn serialize_style_rule(rule: &StyleRule, style: OutputStyle, depth: usize) -> String {
    if rule.declarations.is_empty() {
        return String::new();
    }

    match style {
        OutputStyle::Pretty { indent } => {
            let outer = " ".repeat(indent * depth);
            let inner = " ".repeat(indent * (depth + 1));
            let selectors = rule
                .selectors
                .iter()
                .map(|s| format!("{outer}{}", s.text))
                .collect::<Vec<_>>()
                .join(",\n");
            let mut out = format!("{selectors} {{\n");
            for declaration in &rule.declarations {
                let _ = writeln!(
                    out,
                    "{inner}{}: {};",
                    declaration.name,
                    serialize_declaration_value(declaration)
                );
            }
            out.push_str(&outer);
            out.push('}');
            out
        }
        OutputStyle::Compressed => {
            let selectors = rule
                .selectors
                .iter()
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(",");
            let declarations = rule
                .declarations
                .iter()
                .map(|d| format!("{}:{}", d.name, serialize_declaration_value(d)))
                .collect::<Vec<_>>()
                .join(";");
            format!("{selectors}{{{declarations}}}")
        }
    }
}

fn serialize_media_rule(rule: &MediaRule, style: OutputStyle, depth: usize) -> String {
    let nested = serialize_rules(&rule.rules, style, depth + 1);
    match style {
        OutputStyle::Pretty { indent } => {
            let outer = " ".repeat(indent * depth);
            format!(
                "{outer}@media {} {{\n{}\n{outer}}}",
                rule.query,
                nested.join("\n\n")
            )
        }
        OutputStyle::Compressed => format!("@media {}{{{}}}", rule.query, nested.concat()),
    }
}

fn serialize_at_rule(rule: &AtRule, style: OutputStyle, depth: usize) -> String {
    let prelude = serialize_component_values(&rule.prelude);
    let prelude = prelude.trim();
    let head = if prelude.is_empty() {
        format!("@{}", rule.name)
    } else {
        format!("@{} {prelude}", rule.name)
    };
    let (outer, gap) = match style {
        OutputStyle::Pretty { indent } => (" ".repeat(indent * depth), " "),
        OutputStyle::Compressed => (String::new(), ""),
    };
    match &rule.block {
        None => format!("{outer}{head};"),
        Some(block) => format!(
            "{outer}{head}{gap}{{{}}}",
            serialize_component_values(block).trim()
        ),
    }
}

/// A declaration's value as text, with ` !important` re-attached.
#[must_use]
pub fn serialize_declaration_value(declaration: &Declaration) -> String {
    let mut value = serialize_component_values(&declaration.value).trim().to_string();
    if declaration.important {
        value.push_str(" !important");
    }
    value
}

/// Serialize component values back to CSS text.
#[must_use]
pub fn serialize_component_values(values: &[ComponentValue]) -> String {
    let mut out = String::new();
    for value in values {
        write_component_value(&mut out, value);
    }
    out
}

fn write_component_value(out: &mut String, value: &ComponentValue) {
    match value {
        ComponentValue::Token(token) => write_token(out, token),
        ComponentValue::Function { name, value } => {
            write_ident(out, name);
            out.push('(');
            for v in value {
                write_component_value(out, v);
            }
            out.push(')');
        }
        ComponentValue::Block { token, value } => {
            let close = match token {
                '{' => '}',
                '[' => ']',
                _ => ')',
            };
            out.push(*token);
            for v in value {
                write_component_value(out, v);
            }
            out.push(close);
        }
    }
}

/// Serialize a flat token run (a selector prelude) back to CSS text.
#[must_use]
pub fn serialize_tokens(tokens: &[CSSToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        write_token(&mut out, token);
    }
    out
}

fn write_token(out: &mut String, token: &CSSToken) {
    match token {
        CSSToken::Ident(v) => write_ident(out, v),
        CSSToken::Function(v) => {
            write_ident(out, v);
            out.push('(');
        }
        CSSToken::AtKeyword(v) => {
            out.push('@');
            write_ident(out, v);
        }
        CSSToken::Hash { value, .. } => {
            out.push('#');
            write_name(out, value);
        }
        CSSToken::String(v) => write_string(out, v),
        CSSToken::Url(v) => {
            out.push_str("url(");
            out.push_str(v);
            out.push(')');
        }
        CSSToken::BadUrl => out.push_str("url()"),
        CSSToken::Delim(c) => out.push(*c),
        CSSToken::Number { repr, .. } => out.push_str(repr),
        CSSToken::Percentage { repr, .. } => {
            out.push_str(repr);
            out.push('%');
        }
        CSSToken::Dimension { repr, unit, .. } => {
            out.push_str(repr);
            write_name(out, unit);
        }
        CSSToken::Whitespace => out.push(' '),
        CSSToken::CDO => out.push_str("<!--"),
        CSSToken::CDC => out.push_str("-->"),
        CSSToken::Colon => out.push(':'),
        CSSToken::Semicolon => out.push(';'),
        CSSToken::Comma => out.push(','),
        CSSToken::LeftBracket => out.push('['),
        CSSToken::RightBracket => out.push(']'),
        CSSToken::LeftParen => out.push('('),
        CSSToken::RightParen => out.push(')'),
        CSSToken::LeftBrace => out.push('{'),
        CSSToken::RightBrace => out.push('}'),
        CSSToken::BadString | CSSToken::EOF => {}
    }
}

/// [CSSOM § 2.1 Serialize an identifier](https://drafts.csswg.org/cssom/#serialize-an-identifier)
fn write_ident(out: &mut String, ident: &str) {
    let mut chars = ident.chars().peekable();
    if chars.peek() == Some(&'-') {
        out.push('-');
        let _ = chars.next();
    }
    if let Some(first) = chars.next_if(char::is_ascii_digit) {
        let _ = write!(out, "\\{:x} ", u32::from(first));
    }
    write_name(out, &chars.collect::<String>());
}

/// Escape everything that is not an ident code point.
fn write_name(out: &mut String, name: &str) {
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            out.push(c);
        } else if c.is_ascii_control() {
            let _ = write!(out, "\\{:x} ", u32::from(c));
        } else {
            out.push('\\');
            out.push(c);
        }
    }
}

/// [CSSOM § 2.1 Serialize a string](https://drafts.csswg.org/cssom/#serialize-a-string)
fn write_string(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:x} ", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
