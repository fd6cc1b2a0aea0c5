// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use lox::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn kinds_of(input: &str) -> Vec<TokenKind<'_>> {
    let (tokens, errors) = Lexer::new(input).collect_all();
    assert_eq!(errors, Vec::new());

    tokens.into_iter().map(|token| token.kind).collect()
}

#[test]
fn empty_input_yields_only_end_of_file() {
    let (tokens, errors) = Lexer::new("").collect_all();

    assert_eq!(errors, Vec::new());
    assert_eq!(tokens, vec![
        Token {
            kind: TokenKind::EndOfFile,
            lexeme: "",
            line: 1,
        },
    ]);
}

#[rstest]
#[case("", 1)]
#[case("\n", 2)]
#[case("a\nb\n", 3)]
#[case("\"one\ntwo\nthree\"", 3)]
fn end_of_file_line_is_newline_count_plus_one(#[case] input: &str, #[case] line: usize) {
    let (tokens, _) = Lexer::new(input).collect_all();
    let end = tokens.last().unwrap();

    assert_eq!(end.kind, TokenKind::EndOfFile);
    assert_eq!(end.line, line);
}

#[test]
fn tokens_preserve_source_order() {
    let kinds = kinds_of("var answer = 42;");

    assert_eq!(kinds, vec![
        TokenKind::Keyword(Keyword::Var),
        TokenKind::Identifier,
        TokenKind::Punctuator(Punctuator::Assignment),
        TokenKind::Number(42.0),
        TokenKind::Punctuator(Punctuator::Semicolon),
        TokenKind::EndOfFile,
    ]);
}

#[test]
fn trailing_dot_is_a_separate_token() {
    let kinds = kinds_of("123.");

    assert_eq!(kinds, vec![
        TokenKind::Number(123.0),
        TokenKind::Punctuator(Punctuator::Period),
        TokenKind::EndOfFile,
    ]);
}

#[test]
fn fractional_number_is_one_token() {
    let kinds = kinds_of("123.456");

    assert_eq!(kinds, vec![
        TokenKind::Number(123.456),
        TokenKind::EndOfFile,
    ]);
}

#[test]
fn method_call_on_number_literal() {
    let kinds = kinds_of("123.sqrt()");

    assert_eq!(kinds, vec![
        TokenKind::Number(123.0),
        TokenKind::Punctuator(Punctuator::Period),
        TokenKind::Identifier,
        TokenKind::Punctuator(Punctuator::LeftParenthesis),
        TokenKind::Punctuator(Punctuator::RightParenthesis),
        TokenKind::EndOfFile,
    ]);
}

#[test]
fn comment_is_suppressed_and_counts_no_token() {
    let (tokens, errors) = Lexer::new("1 // comment\n2").collect_all();

    assert_eq!(errors, Vec::new());
    assert_eq!(tokens, vec![
        Token {
            kind: TokenKind::Number(1.0),
            lexeme: "1",
            line: 1,
        },
        Token {
            kind: TokenKind::Number(2.0),
            lexeme: "2",
            line: 2,
        },
        Token {
            kind: TokenKind::EndOfFile,
            lexeme: "",
            line: 2,
        },
    ]);
}

#[test]
fn many_consecutive_comment_lines() {
    let source = "// c\n".repeat(200_000);
    let (tokens, errors) = Lexer::new(&source).collect_all();

    assert_eq!(errors, Vec::new());
    assert_eq!(tokens, vec![
        Token {
            kind: TokenKind::EndOfFile,
            lexeme: "",
            line: 200_001,
        },
    ]);
}

#[test]
fn many_consecutive_unexpected_characters() {
    let source = "@".repeat(200_000);
    let (tokens, errors) = Lexer::new(&source).collect_all();

    assert_eq!(errors.len(), 200_000);
    assert_eq!(tokens, vec![
        Token {
            kind: TokenKind::EndOfFile,
            lexeme: "",
            line: 1,
        },
    ]);
}

#[test]
fn comment_at_end_of_input() {
    let kinds = kinds_of("1 // no newline after this");

    assert_eq!(kinds, vec![
        TokenKind::Number(1.0),
        TokenKind::EndOfFile,
    ]);
}

#[rstest]
#[case("!=", TokenKind::Punctuator(Punctuator::NotEquals))]
#[case("==", TokenKind::Punctuator(Punctuator::Equals))]
#[case("<=", TokenKind::Punctuator(Punctuator::LessThanOrEqual))]
#[case(">=", TokenKind::Punctuator(Punctuator::GreaterThanOrEqual))]
fn two_character_operator_is_one_token(#[case] input: &str, #[case] kind: TokenKind<'static>) {
    assert_eq!(kinds_of(input), vec![kind, TokenKind::EndOfFile]);
}

#[test]
fn bang_alone_is_one_token() {
    assert_eq!(kinds_of("!"), vec![
        TokenKind::Punctuator(Punctuator::Not),
        TokenKind::EndOfFile,
    ]);
}

#[test]
fn every_keyword_is_recognized() {
    for keyword in Keyword::iter_variants() {
        let (tokens, errors) = Lexer::new(keyword.as_ref()).collect_all();

        assert_eq!(errors, Vec::new());
        assert_eq!(tokens[0].kind, TokenKind::Keyword(keyword), "keyword `{}`", keyword.as_ref());
    }
}

#[test]
fn keyword_prefix_is_an_identifier() {
    let (tokens, _) = Lexer::new("classroom").collect_all();

    assert_eq!(tokens[0], Token {
        kind: TokenKind::Identifier,
        lexeme: "classroom",
        line: 1,
    });
}

#[test]
fn string_literal_strips_quotes_only() {
    let (tokens, errors) = Lexer::new("\"hello\"").collect_all();

    assert_eq!(errors, Vec::new());
    assert_eq!(tokens[0], Token {
        kind: TokenKind::StringLiteral("hello"),
        lexeme: "\"hello\"",
        line: 1,
    });
}

#[test]
fn unexpected_character_recovers() {
    let (tokens, errors) = Lexer::new("@").collect_all();

    assert_eq!(errors, vec![LexerError {
        line: 1,
        kind: LexerErrorKind::UnexpectedCharacter { character: '@' },
    }]);
    assert_eq!(tokens, vec![
        Token {
            kind: TokenKind::EndOfFile,
            lexeme: "",
            line: 1,
        },
    ]);
}

#[test]
fn lexing_continues_after_an_error() {
    let (tokens, errors) = Lexer::new("#\nprint 1;").collect_all();

    assert_eq!(errors.len(), 1);
    assert_eq!(tokens.iter().map(|x| x.kind).collect::<Vec<_>>(), vec![
        TokenKind::Keyword(Keyword::Print),
        TokenKind::Number(1.0),
        TokenKind::Punctuator(Punctuator::Semicolon),
        TokenKind::EndOfFile,
    ]);
}

#[test]
fn unterminated_string_emits_no_token() {
    let (tokens, errors) = Lexer::new("\"abc").collect_all();

    assert_eq!(errors, vec![LexerError {
        line: 1,
        kind: LexerErrorKind::UnterminatedString,
    }]);
    assert_eq!(tokens, vec![
        Token {
            kind: TokenKind::EndOfFile,
            lexeme: "",
            line: 1,
        },
    ]);
}

#[test]
fn unterminated_string_reports_final_line() {
    let (_, errors) = Lexer::new("\"abc\ndef").collect_all();

    assert_eq!(errors, vec![LexerError {
        line: 2,
        kind: LexerErrorKind::UnterminatedString,
    }]);
}

#[test]
fn token_lines_follow_newlines() {
    let (tokens, errors) = Lexer::new("(\n)\n*").collect_all();

    assert_eq!(errors, Vec::new());
    assert_eq!(tokens, vec![
        Token {
            kind: TokenKind::Punctuator(Punctuator::LeftParenthesis),
            lexeme: "(",
            line: 1,
        },
        Token {
            kind: TokenKind::Punctuator(Punctuator::RightParenthesis),
            lexeme: ")",
            line: 2,
        },
        Token {
            kind: TokenKind::Punctuator(Punctuator::Asterisk),
            lexeme: "*",
            line: 3,
        },
        Token {
            kind: TokenKind::EndOfFile,
            lexeme: "",
            line: 3,
        },
    ]);
}

#[test]
fn lexer_is_an_iterator_over_real_tokens() {
    let tokens: Vec<Token<'_>> = Lexer::new("print nil;").collect();

    assert_eq!(tokens.iter().map(|x| x.kind).collect::<Vec<_>>(), vec![
        TokenKind::Keyword(Keyword::Print),
        TokenKind::Keyword(Keyword::Nil),
        TokenKind::Punctuator(Punctuator::Semicolon),
    ]);
}
