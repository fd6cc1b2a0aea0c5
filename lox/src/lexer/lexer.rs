// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display, str::CharIndices};

use strum::AsRefStr;
use thiserror::Error;

use super::{Keyword, Punctuator, Token, TokenKind};

/// Single pass over one source buffer. Errors are accumulated, never thrown:
/// the pass always runs to the end of the input.
pub struct Lexer<'source_code> {
    input: &'source_code str,
    chars: CharIndices<'source_code>,

    current: Option<(usize, char)>,
    line: usize,
    errors: Vec<LexerError>,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            current: None,
            line: 1,
            errors: Vec::new(),
        }
    }

    pub fn next(&mut self) -> Option<Token<'source_code>> {
        // Comments and unexpected characters produce no token, so this loops
        // rather than recursing: a long run of them must not grow the stack.
        loop {
            self.skip_whitespace();

            let ch = self.peek_char()?;
            match ch {
                '"' => return self.consume_string(),

                'a'..='z' | 'A'..='Z' | '_' => return self.consume_identifier_or_keyword(),
                '0'..='9' => return self.consume_number(),

                '(' => return self.consume_single_char_token(Punctuator::LeftParenthesis),
                ')' => return self.consume_single_char_token(Punctuator::RightParenthesis),
                '{' => return self.consume_single_char_token(Punctuator::LeftCurlyBracket),
                '}' => return self.consume_single_char_token(Punctuator::RightCurlyBracket),
                ',' => return self.consume_single_char_token(Punctuator::Comma),
                '.' => return self.consume_single_char_token(Punctuator::Period),
                '-' => return self.consume_single_char_token(Punctuator::HyphenMinus),
                ';' => return self.consume_single_char_token(Punctuator::Semicolon),
                '*' => return self.consume_single_char_token(Punctuator::Asterisk),

                '/' => {
                    if let Some(token) = self.handle_solidus() {
                        return Some(token);
                    }
                }

                '!' => return self.consume_single_or_double_char_token(Punctuator::Not, Punctuator::NotEquals),
                '=' => return self.consume_single_or_double_char_token(Punctuator::Assignment, Punctuator::Equals),
                '<' => return self.consume_single_or_double_char_token(Punctuator::LessThan, Punctuator::LessThanOrEqual),
                '>' => return self.consume_single_or_double_char_token(Punctuator::GreaterThan, Punctuator::GreaterThanOrEqual),

                _ => {
                    self.consume_char();
                    self.errors.push(LexerError {
                        line: self.line,
                        kind: LexerErrorKind::UnexpectedCharacter { character: ch },
                    });
                }
            }
        }
    }

    /// Drains the lexer. The token sequence always ends in exactly one
    /// end-of-file token whose lexeme is empty and whose line is the final
    /// line count.
    pub fn collect_all(mut self) -> (Vec<Token<'source_code>>, Vec<LexerError>) {
        let mut tokens = Vec::new();

        while let Some(token) = self.next() {
            tokens.push(token);
        }

        tokens.push(Token {
            kind: TokenKind::EndOfFile,
            lexeme: "",
            line: self.line,
        });

        log::trace!("lexed {} tokens with {} errors", tokens.len(), self.errors.len());

        (tokens, self.errors)
    }

    #[must_use]
    fn consume_single_char_token(&mut self, punctuator: Punctuator) -> Option<Token<'source_code>> {
        let begin = self.current_offset();

        self.consume_char();

        Some(self.make_token(TokenKind::Punctuator(punctuator), begin))
    }

    fn consume_single_or_double_char_token(&mut self, single: Punctuator, double: Punctuator) -> Option<Token<'source_code>> {
        let begin = self.current_offset();
        self.consume_char();

        let kind = if self.peek_char() == Some('=') {
            self.consume_char();
            TokenKind::Punctuator(double)
        } else {
            TokenKind::Punctuator(single)
        };

        Some(self.make_token(kind, begin))
    }

    fn consume_string(&mut self) -> Option<Token<'source_code>> {
        let begin = self.current_offset();

        assert_eq!(self.next_char().unwrap(), '"');

        let value_begin = self.current_offset();

        loop {
            let Some(c) = self.peek_char() else {
                self.errors.push(LexerError {
                    line: self.line,
                    kind: LexerErrorKind::UnterminatedString,
                });

                return None;
            };

            if c == '"' {
                break;
            }

            self.consume_char();
        }

        let value_end = self.current_offset();
        let value = &self.input[value_begin..value_end];

        self.consume_char();

        Some(self.make_token(TokenKind::StringLiteral(value), begin))
    }

    fn consume_identifier_or_keyword(&mut self) -> Option<Token<'source_code>> {
        let begin = self.current_offset();

        loop {
            let Some(c) = self.peek_char() else {
                break;
            };

            if !is_identifier_char(c) {
                break;
            }

            self.consume_char();
        }

        let end = self.current_offset();
        let str = &self.input[begin..end];

        let kind = match Keyword::parse(str) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };

        Some(Token {
            kind,
            lexeme: str,
            line: self.line,
        })
    }

    fn consume_number(&mut self) -> Option<Token<'source_code>> {
        let begin = self.current_offset();

        self.consume_digits();

        // A `.` belongs to the number only when a digit follows it; a
        // trailing dot is left for the next scan step.
        if self.peek_char() == Some('.') && self.peek_second_char().is_some_and(|c| c.is_ascii_digit()) {
            self.consume_char();
            self.consume_digits();
        }

        let end = self.current_offset();
        let str = &self.input[begin..end];

        // At least one leading digit was consumed, so this cannot fail.
        let number = str.parse().unwrap();

        Some(Token {
            kind: TokenKind::Number(number),
            lexeme: str,
            line: self.line,
        })
    }

    fn consume_digits(&mut self) {
        loop {
            let Some(c) = self.peek_char() else {
                break;
            };

            if !c.is_ascii_digit() {
                break;
            }

            self.consume_char();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !matches!(c, ' ' | '\r' | '\t' | '\n') {
                break;
            }

            self.consume_char();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next();
        Some(self.current?.1)
    }

    fn peek_second_char(&mut self) -> Option<char> {
        _ = self.peek_char();
        let (offset, c) = self.current?;
        self.input[offset + c.len_utf8()..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.consume_char();
        Some(c)
    }

    fn consume_char(&mut self) {
        if let Some((_, c)) = self.current.take() {
            if c == '\n' {
                self.line += 1;
            }
        }

        _ = self.peek_char();
    }

    fn current_offset(&mut self) -> usize {
        _ = self.peek_char();
        match self.current {
            Some((offset, _)) => offset,
            None => self.input.len(),
        }
    }

    fn make_token(&mut self, kind: TokenKind<'source_code>, begin: usize) -> Token<'source_code> {
        let end = self.current_offset();

        Token {
            kind,
            lexeme: &self.input[begin..end],
            line: self.line,
        }
    }

    /// `None` means a line comment was consumed and no token resulted.
    fn handle_solidus(&mut self) -> Option<Token<'source_code>> {
        let token = self.consume_single_char_token(Punctuator::Solidus)?;

        if self.peek_char() == Some('/') {
            self.consume_until_end_of_line();
            return None;
        }

        Some(token)
    }

    /// Leaves the newline itself unconsumed.
    fn consume_until_end_of_line(&mut self) {
        loop {
            match self.peek_char() {
                Some('\n') | None => break,
                Some(_) => self.consume_char(),
            }
        }
    }
}

impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Token<'source_code>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

fn is_identifier_char(c: char) -> bool {
    ('a'..='z').contains(&c)
        || ('A'..='Z').contains(&c)
        || ('0'..='9').contains(&c)
        || c == '_'
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerError {
    pub line: usize,
    pub kind: LexerErrorKind,
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for LexerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerErrorKind {
    #[error("Unexpected character `{character}`.")]
    UnexpectedCharacter { character: char },

    #[error("Unterminated string.")]
    UnterminatedString,
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
