use pretty_assertions::assert_eq;

use super::*;

// === TokenKind discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Identifiers & Literals: 0-3
    assert_eq!(TokenKind::Identifier as u8, 0);
    assert_eq!(TokenKind::StringLiteral as u8, 3);

    // Keywords: 16-23
    assert_eq!(TokenKind::If as u8, 16);
    assert_eq!(TokenKind::Char as u8, 23);

    // Operators: 32-42
    assert_eq!(TokenKind::Plus as u8, 32);
    assert_eq!(TokenKind::GreaterEqual as u8, 42);

    // Punctuation: 64-69
    assert_eq!(TokenKind::LeftParen as u8, 64);
    assert_eq!(TokenKind::Comma as u8, 69);

    assert_eq!(TokenKind::Unknown as u8, 240);
    assert_eq!(TokenKind::Eof as u8, 255);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

#[test]
fn all_is_sorted_and_unique() {
    let mut sorted = TokenKind::ALL;
    sorted.sort();
    assert_eq!(sorted, TokenKind::ALL);
    assert!(TokenKind::ALL.windows(2).all(|w| w[0] != w[1]));
}

// === Categories ===

#[test]
fn every_kind_is_in_at_most_one_category() {
    for kind in TokenKind::ALL {
        let categories = [
            kind.is_keyword(),
            kind.is_literal(),
            kind.is_operator(),
            kind.is_punctuation(),
        ];
        assert!(
            categories.iter().filter(|&&c| c).count() <= 1,
            "{kind:?} is in several categories"
        );
    }
}

#[test]
fn category_counts() {
    let count = |pred: fn(TokenKind) -> bool| TokenKind::ALL.iter().filter(|&&k| pred(k)).count();
    assert_eq!(count(TokenKind::is_keyword), 8);
    assert_eq!(count(TokenKind::is_literal), 3);
    assert_eq!(count(TokenKind::is_operator), 11);
    assert_eq!(count(TokenKind::is_punctuation), 6);
}

#[test]
fn fixed_lexeme_present_exactly_for_fixed_categories() {
    for kind in TokenKind::ALL {
        let fixed = kind.is_keyword() || kind.is_operator() || kind.is_punctuation();
        assert_eq!(kind.fixed_lexeme().is_some(), fixed, "{kind:?}");
    }
}

#[test]
fn fixed_lexeme_spellings() {
    assert_eq!(TokenKind::Assign.fixed_lexeme(), Some("="));
    assert_eq!(TokenKind::Equal.fixed_lexeme(), Some("=="));
    assert_eq!(TokenKind::NotEqual.fixed_lexeme(), Some("!="));
    assert_eq!(TokenKind::LessEqual.fixed_lexeme(), Some("<="));
    assert_eq!(TokenKind::GreaterEqual.fixed_lexeme(), Some(">="));
    assert_eq!(TokenKind::Return.fixed_lexeme(), Some("return"));
    assert_eq!(TokenKind::Identifier.fixed_lexeme(), None);
    assert_eq!(TokenKind::Eof.fixed_lexeme(), None);
}

#[test]
fn kind_display_uses_display_name() {
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
    assert_eq!(TokenKind::Semicolon.to_string(), "`;`");
    assert_eq!(TokenKind::FloatLiteral.to_string(), "float literal");
}

// === Token ===

#[test]
fn new_copies_text() {
    let source = String::from("counter");
    let tok = Token::new(TokenKind::Identifier, &source[..4], 2, 5).unwrap();
    drop(source);
    assert_eq!(tok.kind(), TokenKind::Identifier);
    assert_eq!(tok.lexeme(), "coun");
    assert_eq!(tok.line(), 2);
    assert_eq!(tok.column(), 5);
}

#[test]
fn new_with_empty_text() {
    let tok = Token::new(TokenKind::Unknown, "", 1, 1).unwrap();
    assert!(tok.is_unterminated_string());
}

#[test]
fn eof_token_has_empty_lexeme() {
    let tok = Token::eof(4, 9);
    assert!(tok.is_eof());
    assert_eq!(tok.lexeme(), "");
    assert_eq!((tok.line(), tok.column()), (4, 9));
}

#[test]
fn unterminated_string_marker() {
    let tok = Token::unterminated_string(1, 3);
    assert_eq!(tok.kind(), TokenKind::Unknown);
    assert!(tok.is_unterminated_string());
    assert!(!tok.is_eof());
}

#[test]
fn single_unknown_character_is_not_unterminated_string() {
    let tok = Token::new(TokenKind::Unknown, "@", 1, 1).unwrap();
    assert!(!tok.is_unterminated_string());
}

#[test]
fn clones_are_independent_values() {
    let tok = Token::new(TokenKind::StringLiteral, "hi", 1, 1).unwrap();
    let copy = tok.clone();
    drop(tok);
    assert_eq!(copy.lexeme(), "hi");
}

#[test]
fn into_lexeme_returns_owned_text() {
    let tok = Token::new(TokenKind::IntLiteral, "42", 1, 1).unwrap();
    assert_eq!(tok.into_lexeme(), String::from("42"));
}

#[test]
fn token_display() {
    let tok = Token::new(TokenKind::Identifier, "x", 3, 14).unwrap();
    assert_eq!(tok.to_string(), "Identifier(\"x\") @ 3:14");
    assert_eq!(Token::eof(1, 1).to_string(), "Eof(\"\") @ 1:1");
}

#[test]
fn dropping_absent_token_is_a_no_op() {
    let tok: Option<Token> = None;
    drop(tok);
}
