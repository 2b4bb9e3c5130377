//! Integration tests for the CSS tokenizer.

use stylesnap_css::CssError;
use stylesnap_css::tokenizer::{CSSToken, CSSTokenizer, HashType, NumericType, SourceLocation};

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<CSSToken> {
    let mut tokenizer = CSSTokenizer::new(input);
    tokenizer.run().unwrap();
    tokenizer.into_tokens()
}

#[test]
fn test_whitespace() {
    let tokens = tokenize("   \t\n  ");
    assert_eq!(tokens, vec![CSSToken::Whitespace, CSSToken::EOF]);
}

#[test]
fn test_class_selector_is_delim_then_ident() {
    let tokens = tokenize(".css-1x2y3z");
    assert_eq!(
        tokens,
        vec![
            CSSToken::delim('.'),
            CSSToken::ident("css-1x2y3z"),
            CSSToken::EOF
        ]
    );
}

#[test]
fn test_attribute_selector() {
    let tokens = tokenize("[data-css-abc]");
    assert_eq!(
        tokens,
        vec![
            CSSToken::LeftBracket,
            CSSToken::ident("data-css-abc"),
            CSSToken::RightBracket,
            CSSToken::EOF
        ]
    );
}

#[test]
fn test_at_keyword() {
    let tokens = tokenize("@media");
    assert_eq!(tokens[0], CSSToken::AtKeyword("media".to_string()));
}

#[test]
fn test_hash_id() {
    let tokens = tokenize("#header");
    match &tokens[0] {
        CSSToken::Hash { value, hash_type } => {
            assert_eq!(value, "header");
            assert_eq!(*hash_type, HashType::Id);
        }
        other => panic!("Expected Hash token, got {other}"),
    }
}

#[test]
fn test_number_keeps_source_repr() {
    let tokens = tokenize("1.50");
    match &tokens[0] {
        CSSToken::Number {
            value,
            repr,
            numeric_type,
        } => {
            assert!((value - 1.5).abs() < f64::EPSILON);
            assert_eq!(repr, "1.50");
            assert_eq!(*numeric_type, NumericType::Number);
        }
        other => panic!("Expected Number token, got {other}"),
    }
}

#[test]
fn test_leading_dot_dimension() {
    let tokens = tokenize(".5em");
    match &tokens[0] {
        CSSToken::Dimension { repr, unit, .. } => {
            assert_eq!(repr, ".5");
            assert_eq!(unit, "em");
        }
        other => panic!("Expected Dimension token, got {other}"),
    }
}

#[test]
fn test_negative_dimension() {
    let tokens = tokenize("-1px");
    match &tokens[0] {
        CSSToken::Dimension { repr, unit, .. } => {
            assert_eq!(repr, "-1");
            assert_eq!(unit, "px");
        }
        other => panic!("Expected Dimension token, got {other}"),
    }
}

#[test]
fn test_vendor_prefixed_ident() {
    let tokens = tokenize("-webkit-box");
    assert_eq!(tokens[0], CSSToken::ident("-webkit-box"));
}

#[test]
fn test_short_hyphen_ident() {
    let tokens = tokenize("-a");
    assert_eq!(tokens[0], CSSToken::ident("-a"));
}

#[test]
fn test_custom_property_name() {
    let tokens = tokenize("--main-color");
    assert_eq!(tokens[0], CSSToken::ident("--main-color"));
}

#[test]
fn test_percentage() {
    let tokens = tokenize("50%");
    assert!(matches!(
        &tokens[0],
        CSSToken::Percentage { repr, .. } if repr == "50"
    ));
}

#[test]
fn test_escaped_colon_in_ident() {
    let tokens = tokenize(r"sm\:flex");
    assert_eq!(tokens[0], CSSToken::ident("sm:flex"));
}

#[test]
fn test_unquoted_url() {
    let tokens = tokenize("url(img.png)");
    assert_eq!(tokens[0], CSSToken::Url("img.png".to_string()));
}

#[test]
fn test_quoted_url_is_function() {
    let tokens = tokenize("url(\"img.png\")");
    assert_eq!(tokens[0], CSSToken::Function("url".to_string()));
    assert_eq!(tokens[1], CSSToken::String("img.png".to_string()));
}

#[test]
fn test_comments_are_dropped() {
    let tokens = tokenize("/* generated */.a/* x */{}");
    assert_eq!(
        tokens,
        vec![
            CSSToken::delim('.'),
            CSSToken::ident("a"),
            CSSToken::LeftBrace,
            CSSToken::RightBrace,
            CSSToken::EOF
        ]
    );
}

#[test]
fn test_unterminated_comment_is_an_error() {
    let mut tokenizer = CSSTokenizer::new(".a{}\n  /* never closed");
    let err = tokenizer.run().unwrap_err();
    assert_eq!(
        err,
        CssError::UnterminatedComment {
            location: SourceLocation { line: 2, column: 3 }
        }
    );
}

#[test]
fn test_token_locations() {
    let mut tokenizer = CSSTokenizer::new(".a{}\n.b{}");
    tokenizer.run().unwrap();
    let (tokens, locations) = tokenizer.into_parts();
    assert_eq!(tokens.len(), locations.len());
    // `.b` starts the second line, after `.`, `a`, `{`, `}`, newline
    assert_eq!(tokens[5], CSSToken::delim('.'));
    assert_eq!(locations[5], SourceLocation { line: 2, column: 1 });
    assert_eq!(locations[6], SourceLocation { line: 2, column: 2 });
}
