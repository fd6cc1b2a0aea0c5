// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum Punctuator {
    #[strum(serialize = "left parenthesis")]
    LeftParenthesis,
    #[strum(serialize = "right parenthesis")]
    RightParenthesis,
    #[strum(serialize = "left curly bracket")]
    LeftCurlyBracket,
    #[strum(serialize = "right curly bracket")]
    RightCurlyBracket,
    #[strum(serialize = "comma")]
    Comma,
    #[strum(serialize = "period")]
    Period,
    #[strum(serialize = "hyphen-minus")]
    HyphenMinus,
    #[strum(serialize = "semicolon")]
    Semicolon,
    #[strum(serialize = "asterisk")]
    Asterisk,
    #[strum(serialize = "solidus")]
    Solidus,
    #[strum(serialize = "not")]
    Not,
    #[strum(serialize = "not-equals")]
    NotEquals,
    #[strum(serialize = "assignment")]
    Assignment,
    #[strum(serialize = "equals")]
    Equals,
    #[strum(serialize = "less-than")]
    LessThan,
    #[strum(serialize = "less-than-or-equal")]
    LessThanOrEqual,
    #[strum(serialize = "greater-than")]
    GreaterThan,
    #[strum(serialize = "greater-than-or-equal")]
    GreaterThanOrEqual,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftCurlyBracket => "{",
            Self::RightCurlyBracket => "}",
            Self::Comma => ",",
            Self::Period => ".",
            Self::HyphenMinus => "-",
            Self::Semicolon => ";",
            Self::Asterisk => "*",
            Self::Solidus => "/",
            Self::Not => "!",
            Self::NotEquals => "!=",
            Self::Assignment => "=",
            Self::Equals => "==",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
