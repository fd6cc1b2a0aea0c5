// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::TokenKind;

/// One recognized lexeme. `lexeme` is the exact substring of the source that
/// produced it (empty for [`TokenKind::EndOfFile`]), `line` the 1-based line
/// on which its last character occurred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'source_code> {
    pub kind: TokenKind<'source_code>,
    pub lexeme: &'source_code str,
    pub line: usize,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TokenKind::Identifier => f.write_str(self.lexeme),
            kind => kind.fmt(f),
        }
    }
}
