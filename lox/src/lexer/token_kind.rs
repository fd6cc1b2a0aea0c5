// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Keyword, Punctuator};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind<'source_code> {
    Keyword(Keyword),

    Identifier,
    StringLiteral(&'source_code str),
    Number(f64),

    Punctuator(Punctuator),
    EndOfFile,
}

impl TokenKind<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyword(..) => "keyword",

            Self::Identifier => "identifier",
            Self::StringLiteral(..) => "string",
            Self::Number(..) => "number",

            Self::Punctuator(punctuator) => punctuator.into(),
            Self::EndOfFile => "end of file",
        }
    }
}

impl Display for TokenKind<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier => f.write_str("identifier"),
            Self::Number(number) => number.fmt(f),
            Self::Keyword(keyword) => f.write_str(keyword.as_ref()),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            Self::StringLiteral(str) => f.write_fmt(format_args!("\"{str}\"")),
            Self::EndOfFile => Ok(()),
        }
    }
}
