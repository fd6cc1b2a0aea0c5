// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use colored::Colorize;
use lox::LexerError;

/// Writes `[line {line}] Error: {message}` to standard error.
pub fn report(error: &LexerError) {
    eprintln!("{}", render(error));
}

fn render(error: &LexerError) -> String {
    format!(
        "{} {}: {}",
        format!("[line {}]", error.line).blue().bold(),
        "Error".red().bold(),
        error.to_string().bold(),
    )
}
