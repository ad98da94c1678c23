use super::*;

#[test]
fn all_reserved_words_resolve() {
    let expected = [
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::For,
        TokenKind::Return,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Char,
    ];
    for (word, kind) in RESERVED.iter().zip(expected) {
        assert_eq!(lookup(word), Some(kind), "{word}");
    }
}

#[test]
fn reserved_words_round_trip_through_fixed_lexeme() {
    for word in RESERVED {
        let kind = lookup(word).unwrap();
        assert!(kind.is_keyword());
        assert_eq!(kind.fixed_lexeme(), Some(word));
    }
}

#[test]
fn near_misses_are_not_keywords() {
    for text in [
        "intx", "Int", "_int", "INT", "in", "i", "iff", "elsewhere", "returns", "floats",
        "chars", "whil", "fo", "",
    ] {
        assert_eq!(lookup(text), None, "{text:?}");
    }
}

#[test]
fn length_outside_bucket_range_is_rejected() {
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("returned"), None);
}
