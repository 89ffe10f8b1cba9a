use lumen_ir::{Keyword, Punct, StringInterner, TokenKind};
use pretty_assertions::assert_eq;

use super::TokenStream;
use crate::{lex, LexErrorKind};

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    match lex(source, interner) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(e) => panic!("unexpected lex error in {source:?}: {e}"),
    }
}

// === Lookahead ===

#[test]
fn peek_is_idempotent() {
    let interner = StringInterner::new();
    let mut stream = TokenStream::new("a b", &interner);
    let first = stream.peek().unwrap();
    let second = stream.peek().unwrap();
    assert_eq!(first, second);
    assert_eq!(stream.next().unwrap(), first);
    let a = interner.intern("a");
    assert_eq!(first.map(|t| t.kind), Some(TokenKind::Ident(a)));
}

#[test]
fn next_after_peek_moves_on() {
    let interner = StringInterner::new();
    let mut stream = TokenStream::new("a b", &interner);
    stream.peek().unwrap();
    stream.next().unwrap();
    let b = interner.intern("b");
    assert_eq!(stream.next().unwrap().map(|t| t.kind), Some(TokenKind::Ident(b)));
    assert_eq!(stream.next().unwrap(), None);
}

#[test]
fn eof_after_last_token() {
    let interner = StringInterner::new();
    let mut stream = TokenStream::new("  x  ", &interner);
    assert!(!stream.eof().unwrap());
    stream.next().unwrap();
    assert!(stream.eof().unwrap());
    assert_eq!(stream.next().unwrap(), None);
    assert_eq!(stream.next().unwrap(), None);
}

#[test]
fn empty_and_blank_sources_have_no_tokens() {
    let interner = StringInterner::new();
    assert!(kinds("", &interner).is_empty());
    assert!(kinds(" \t\r\n ", &interner).is_empty());
    assert!(kinds("# only a comment", &interner).is_empty());
}

// === Token classes ===

#[test]
fn numbers_are_digit_runs() {
    let interner = StringInterner::new();
    assert_eq!(kinds("42", &interner), vec![TokenKind::Number(42.0)]);
    assert_eq!(kinds("007", &interner), vec![TokenKind::Number(7.0)]);
}

#[test]
fn decimal_point_is_not_part_of_a_number() {
    let interner = StringInterner::new();
    let err = lex("1.5", &interner).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter('.'));
    assert_eq!(err.column, 1);
}

#[test]
fn identifiers_may_contain_digits_after_the_first_character() {
    let interner = StringInterner::new();
    let add5 = interner.intern("add5");
    assert_eq!(
        kinds("add5(3)", &interner),
        vec![
            TokenKind::Ident(add5),
            TokenKind::Punct(Punct::LParen),
            TokenKind::Number(3.0),
            TokenKind::Punct(Punct::RParen),
        ]
    );
}

#[test]
fn leading_digits_start_a_number_not_an_identifier() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(
        kinds("1x", &interner),
        vec![TokenKind::Number(1.0), TokenKind::Ident(x)]
    );
}

#[test]
fn identifiers_allow_underscores_and_mixed_case() {
    let interner = StringInterner::new();
    let name = interner.intern("Add_Five");
    assert_eq!(kinds("Add_Five", &interner), vec![TokenKind::Ident(name)]);
}

#[test]
fn keywords_are_classified() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("if then else lambda true false while", &interner),
        vec![
            TokenKind::Keyword(Keyword::If),
            TokenKind::Keyword(Keyword::Then),
            TokenKind::Keyword(Keyword::Else),
            TokenKind::Keyword(Keyword::Lambda),
            TokenKind::Keyword(Keyword::True),
            TokenKind::Keyword(Keyword::False),
            TokenKind::Keyword(Keyword::While),
        ]
    );
}

#[test]
fn keyword_prefix_is_an_identifier() {
    let interner = StringInterner::new();
    let iffy = interner.intern("iffy");
    assert_eq!(kinds("iffy", &interner), vec![TokenKind::Ident(iffy)]);
}

#[test]
fn strings_exclude_quotes_and_may_span_lines() {
    let interner = StringInterner::new();
    let s = interner.intern("a\nb # not a comment");
    assert_eq!(
        kinds("\"a\nb # not a comment\"", &interner),
        vec![TokenKind::Str(s)]
    );
}

#[test]
fn empty_string_literal() {
    let interner = StringInterner::new();
    let empty = interner.intern("");
    assert_eq!(kinds("\"\"", &interner), vec![TokenKind::Str(empty)]);
}

#[test]
fn punctuation_is_single_character() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("(){}[],;;", &interner),
        vec![
            TokenKind::Punct(Punct::LParen),
            TokenKind::Punct(Punct::RParen),
            TokenKind::Punct(Punct::LBrace),
            TokenKind::Punct(Punct::RBrace),
            TokenKind::Punct(Punct::LBracket),
            TokenKind::Punct(Punct::RBracket),
            TokenKind::Punct(Punct::Comma),
            TokenKind::Punct(Punct::Semicolon),
            TokenKind::Punct(Punct::Semicolon),
        ]
    );
}

#[test]
fn operators_are_maximal_runs() {
    let interner = StringInterner::new();
    let le = interner.intern("<=");
    let and = interner.intern("&&");
    let weird = interner.intern("+-");
    assert_eq!(
        kinds("a<=b&&c +- d", &interner),
        vec![
            TokenKind::Ident(interner.intern("a")),
            TokenKind::Operator(le),
            TokenKind::Ident(interner.intern("b")),
            TokenKind::Operator(and),
            TokenKind::Ident(interner.intern("c")),
            TokenKind::Operator(weird),
            TokenKind::Ident(interner.intern("d")),
        ]
    );
}

#[test]
fn comments_run_to_end_of_line() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("1 # one\n# two\n2", &interner),
        vec![TokenKind::Number(1.0), TokenKind::Number(2.0)]
    );
}

// === Spans ===

#[test]
fn spans_cover_token_text() {
    let interner = StringInterner::new();
    let source = "total = \"ab\"";
    let tokens = lex(source, &interner).unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| &source[t.span.to_range()]).collect();
    assert_eq!(texts, vec!["total", "=", "\"ab\""]);
}

// === Errors ===

#[test]
fn unterminated_string_fails_at_end_of_input() {
    let interner = StringInterner::new();
    let err = lex("x = \"abc", &interner).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.line, 1);
    assert_eq!(err.column, 8);
    assert_eq!(err.to_string(), "unterminated string (1:8)");
}

#[test]
fn invalid_character_reports_position() {
    let interner = StringInterner::new();
    let err = lex("a;\n  @", &interner).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter('@'));
    assert_eq!((err.line, err.column), (2, 2));
}

#[test]
fn lexing_is_lazy() {
    let interner = StringInterner::new();
    let mut stream = TokenStream::new("ok @", &interner);
    assert!(stream.next().unwrap().is_some());
    assert!(stream.next().is_err());
}
