//! CSS Parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! "The input to the parsing stage is a stream of tokens from the tokenization stage."
//!
//! Style rules and `@media` blocks are parsed into structure; every other
//! at-rule is kept as an opaque prelude + block. Where a browser would
//! recover from broken input, this parser stops with a [`CssError`].

use stylesnap_common::warning::warn_once;

use crate::error::CssError;
use crate::serializer::{serialize_component_values, serialize_tokens};
use crate::tokenizer::{CSSToken, SourceLocation};

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A CSS declaration (e.g., `color: red`).
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name.
    pub name: String,
    /// The property value as component values, `!important` removed.
    pub value: Vec<ComponentValue>,
    /// Whether the declaration has `!important`.
    pub important: bool,
}

/// [§ 5.4.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// A preserved token.
    Token(CSSToken),
    /// A function with its arguments.
    Function {
        /// The function name.
        name: String,
        /// The function arguments.
        value: Vec<ComponentValue>,
    },
    /// A simple block.
    Block {
        /// The opening character: `{`, `[` or `(`.
        token: char,
        /// The block contents.
        value: Vec<ComponentValue>,
    },
}

/// One entry of a selector list, as source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Raw selector text, trimmed
    pub text: String,
}

impl Selector {
    /// The selector up to the first pseudo-class colon or descendant space.
    ///
    /// `.foo:hover` and `.foo .bar` both reduce to `.foo`; `.a.b` and `.a>.b`
    /// are left whole.
    #[must_use]
    pub fn base(&self) -> &str {
        self.text
            .split([':', ' '])
            .next()
            .unwrap_or_default()
    }
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
///
/// A CSS style rule (selectors + declarations).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// The comma-separated selectors of this rule.
    pub selectors: Vec<Selector>,
    /// The declarations in this rule block.
    pub declarations: Vec<Declaration>,
}

/// [Media Queries § 3](https://www.w3.org/TR/mediaqueries-4/#media)
///
/// An `@media` grouping rule.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRule {
    /// The media query list, e.g. `(min-width:100px)`.
    pub query: String,
    /// The rules nested inside the block.
    pub rules: Vec<Rule>,
}

/// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
///
/// Any at-rule other than `@media`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    /// The at-keyword name (without the `@`).
    pub name: String,
    /// The prelude component values.
    pub prelude: Vec<ComponentValue>,
    /// The block contents, if the rule has one.
    pub block: Option<Vec<ComponentValue>>,
}

/// A CSS rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// A style rule (qualified rule).
    Style(StyleRule),
    /// An `@media` block.
    Media(MediaRule),
    /// Any other at-rule.
    At(AtRule),
}

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    /// The list of rules in the stylesheet.
    pub rules: Vec<Rule>,
}

/// CSS parser
pub struct CSSParser {
    tokens: Vec<CSSToken>,
    locations: Vec<SourceLocation>,
    position: usize,
}

impl CSSParser {
    /// Create a parser from tokens and the location of each token, as
    /// returned by [`CSSTokenizer::into_parts`](crate::tokenizer::CSSTokenizer::into_parts).
    #[must_use]
    pub const fn with_locations(tokens: Vec<CSSToken>, locations: Vec<SourceLocation>) -> Self {
        Self {
            tokens,
            locations,
            position: 0,
        }
    }

    /// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found in the token stream.
    pub fn parse_stylesheet(&mut self) -> Result<Stylesheet, CssError> {
        let rules = self.consume_list_of_rules(None)?;
        Ok(Stylesheet { rules })
    }

    /// [§ 5.4.1 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
    ///
    /// `enclosing` is the location of the `{` of the block being read, or
    /// `None` at the top level.
    fn consume_list_of_rules(
        &mut self,
        enclosing: Option<SourceLocation>,
    ) -> Result<Vec<Rule>, CssError> {
        let mut rules = Vec::new();

        loop {
            match self.peek() {
                Some(CSSToken::Whitespace | CSSToken::CDO | CSSToken::CDC) => self.advance(),

                None | Some(CSSToken::EOF) => {
                    return match enclosing {
                        None => Ok(rules),
                        Some(location) => Err(CssError::MissingCloseBrace {
                            location,
                            expected: '}',
                        }),
                    };
                }

                Some(CSSToken::RightBrace) => {
                    let location = self.location();
                    self.advance();
                    return match enclosing {
                        Some(_) => Ok(rules),
                        None => Err(CssError::UnexpectedCloseBrace { location }),
                    };
                }

                Some(CSSToken::AtKeyword(_)) => rules.push(self.consume_at_rule()?),

                Some(_) => rules.push(Rule::Style(self.consume_qualified_rule()?)),
            }
        }
    }

    /// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
    fn consume_at_rule(&mut self) -> Result<Rule, CssError> {
        let name = match self.consume() {
            Some(CSSToken::AtKeyword(name)) => name.clone(),
            _ => String::new(),
        };
        let mut prelude = Vec::new();

        loop {
            match self.peek() {
                Some(CSSToken::Semicolon) => {
                    self.advance();
                    break;
                }
                // The enclosing block's `}` also ends a block-less at-rule.
                None | Some(CSSToken::EOF | CSSToken::RightBrace) => break,

                Some(CSSToken::LeftBrace) => {
                    let open = self.location();
                    if name.eq_ignore_ascii_case("media") {
                        self.advance();
                        let rules = self.consume_list_of_rules(Some(open))?;
                        let query = serialize_component_values(&prelude).trim().to_string();
                        return Ok(Rule::Media(MediaRule { query, rules }));
                    }
                    let block = self.consume_simple_block()?;
                    return Ok(Rule::At(AtRule {
                        name,
                        prelude,
                        block: Some(block),
                    }));
                }

                Some(_) => {
                    if let Some(value) = self.consume_component_value()? {
                        prelude.push(value);
                    }
                }
            }
        }

        Ok(Rule::At(AtRule {
            name,
            prelude,
            block: None,
        }))
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    fn consume_qualified_rule(&mut self) -> Result<StyleRule, CssError> {
        let start = self.location();
        let mut prelude_tokens = Vec::new();

        loop {
            match self.peek() {
                Some(CSSToken::LeftBrace) => break,

                None | Some(CSSToken::EOF | CSSToken::Semicolon | CSSToken::RightBrace) => {
                    return Err(CssError::MissingOpenBrace {
                        location: start,
                        prelude: serialize_tokens(&prelude_tokens).trim().to_string(),
                    });
                }

                Some(_) => {
                    if let Some(token) = self.consume().cloned() {
                        prelude_tokens.push(token);
                    }
                }
            }
        }

        let open = self.location();
        self.advance();

        // [§ 5.1 Selector Lists](https://www.w3.org/TR/selectors-4/#selector-list)
        // "A selector list is a comma-separated list of selectors"
        let selectors = split_selector_list(&prelude_tokens);
        if selectors.is_empty() {
            return Err(CssError::MissingSelector { location: open });
        }

        let declarations = self.consume_list_of_declarations()?;

        if self.peek() == Some(&CSSToken::RightBrace) {
            self.advance();
        } else {
            return Err(CssError::MissingCloseBrace {
                location: open,
                expected: '}',
            });
        }

        Ok(StyleRule {
            selectors,
            declarations,
        })
    }

    /// [§ 5.4.8 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    fn consume_simple_block(&mut self) -> Result<Vec<ComponentValue>, CssError> {
        let open = self.location();
        let (ending_token, expected) = match self.consume() {
            Some(CSSToken::LeftBrace) => (CSSToken::RightBrace, '}'),
            Some(CSSToken::LeftBracket) => (CSSToken::RightBracket, ']'),
            Some(CSSToken::LeftParen) => (CSSToken::RightParen, ')'),
            _ => return Ok(Vec::new()),
        };

        let mut value = Vec::new();

        loop {
            match self.peek() {
                Some(token) if *token == ending_token => {
                    self.advance();
                    return Ok(value);
                }
                None | Some(CSSToken::EOF) => {
                    return Err(CssError::MissingCloseBrace {
                        location: open,
                        expected,
                    });
                }
                Some(_) => {
                    if let Some(v) = self.consume_component_value()? {
                        value.push(v);
                    }
                }
            }
        }
    }

    /// [§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
    ///
    /// Stops in front of the closing `}` (or at EOF) without consuming it.
    fn consume_list_of_declarations(&mut self) -> Result<Vec<Declaration>, CssError> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                Some(CSSToken::Whitespace | CSSToken::Semicolon) => self.advance(),

                None | Some(CSSToken::EOF | CSSToken::RightBrace) => return Ok(declarations),

                Some(CSSToken::AtKeyword(name)) => {
                    warn_once("CSS", &format!("skipping @{name} inside a declaration block"));
                    let _ = self.consume_at_rule()?;
                }

                Some(CSSToken::Ident(_)) => declarations.push(self.consume_declaration()?),

                Some(other) => {
                    return Err(CssError::UnexpectedToken {
                        location: self.location(),
                        found: other.to_string(),
                    });
                }
            }
        }
    }

    /// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
    fn consume_declaration(&mut self) -> Result<Declaration, CssError> {
        let location = self.location();
        let name = match self.consume() {
            Some(CSSToken::Ident(name)) => name.clone(),
            _ => String::new(),
        };

        self.skip_whitespace();
        if self.peek() != Some(&CSSToken::Colon) {
            return Err(CssError::MissingColon {
                location,
                property: name,
            });
        }
        self.advance();
        self.skip_whitespace();

        let mut value = Vec::new();
        while !matches!(
            self.peek(),
            None | Some(CSSToken::EOF | CSSToken::Semicolon | CSSToken::RightBrace)
        ) {
            if let Some(v) = self.consume_component_value()? {
                value.push(v);
            }
        }

        let important = check_important(&value);
        let value = trim_important(value);

        Ok(Declaration {
            name,
            value,
            important,
        })
    }

    /// [§ 5.4.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    fn consume_component_value(&mut self) -> Result<Option<ComponentValue>, CssError> {
        let token = match self.peek() {
            Some(CSSToken::LeftBrace) => '{',
            Some(CSSToken::LeftBracket) => '[',
            Some(CSSToken::LeftParen) => '(',

            Some(CSSToken::Function(name)) => {
                let name = name.clone();
                self.advance();
                let mut value = Vec::new();
                loop {
                    match self.peek() {
                        Some(CSSToken::RightParen) => {
                            self.advance();
                            break;
                        }
                        None | Some(CSSToken::EOF) => break,
                        Some(_) => {
                            if let Some(v) = self.consume_component_value()? {
                                value.push(v);
                            }
                        }
                    }
                }
                return Ok(Some(ComponentValue::Function { name, value }));
            }

            Some(_) => return Ok(self.consume().cloned().map(ComponentValue::Token)),
            None => return Ok(None),
        };

        let value = self.consume_simple_block()?;
        Ok(Some(ComponentValue::Block { token, value }))
    }

    fn skip_whitespace(&mut self) {
        while self.peek() == Some(&CSSToken::Whitespace) {
            self.advance();
        }
    }

    fn location(&self) -> SourceLocation {
        self.locations
            .get(self.position)
            .copied()
            .unwrap_or_default()
    }

    fn consume(&mut self) -> Option<&CSSToken> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn peek(&self) -> Option<&CSSToken> {
        self.tokens.get(self.position)
    }
}

/// [§ 5.1 Selector Lists](https://www.w3.org/TR/selectors-4/#selector-list)
///
/// Split prelude tokens into selectors on top-level commas. Empty entries
/// (`.a,,.b`) are dropped.
fn split_selector_list(tokens: &[CSSToken]) -> Vec<Selector> {
    tokens
        .split(|token| matches!(token, CSSToken::Comma))
        .map(|part| serialize_tokens(part).trim().to_string())
        .filter(|text| !text.is_empty())
        .map(|text| Selector { text })
        .collect()
}

/// [§ 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
///
/// "A declaration is important if it has a !important annotation, i.e.
/// if the last two (non-whitespace, non-comment) tokens in its value are
/// a <delim-token> with the value "!" followed by an <ident-token> with
/// a value that is an ASCII case-insensitive match for "important"."
fn check_important(value: &[ComponentValue]) -> bool {
    let mut iter = value
        .iter()
        .rev()
        .filter(|v| !matches!(v, ComponentValue::Token(CSSToken::Whitespace)));

    matches!(
        iter.next(),
        Some(ComponentValue::Token(CSSToken::Ident(s))) if s.eq_ignore_ascii_case("important")
    ) && matches!(
        iter.next(),
        Some(ComponentValue::Token(CSSToken::Delim('!')))
    )
}

/// Remove trailing whitespace and a `!important` annotation from a value.
fn trim_important(mut value: Vec<ComponentValue>) -> Vec<ComponentValue> {
    pop_whitespace(&mut value);

    if matches!(
        value.last(),
        Some(ComponentValue::Token(CSSToken::Ident(s))) if s.eq_ignore_ascii_case("important")
    ) {
        let mut rest = value.clone();
        let _ = rest.pop();
        pop_whitespace(&mut rest);
        if matches!(rest.last(), Some(ComponentValue::Token(CSSToken::Delim('!')))) {
            let _ = rest.pop();
            pop_whitespace(&mut rest);
            return rest;
        }
    }

    value
}

fn pop_whitespace(value: &mut Vec<ComponentValue>) {
    while matches!(
        value.last(),
        Some(ComponentValue::Token(CSSToken::Whitespace))
    ) {
        let _ = value.pop();
    }
}
