// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod lexer;

pub use self::lexer::{
    Keyword,
    Lexer,
    LexerError,
    LexerErrorKind,
    Punctuator,
    Token,
    TokenKind,
};
