// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod error;
mod logger;

use std::{io::Write, path::{Path, PathBuf}, process::exit};

use anyhow::{Context, Result};
use lox::{Lexer, LexerError};
use logger::Logger;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

fn main() -> Result<()> {
    let args = Args::parse_args();
    Logger::initialize(args.verbose);

    match args.script {
        Some(script) => run_file(&script),
        None => run_prompt(),
    }
}

fn run_file(path: &Path) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    let errors = run(&source);
    if !errors.is_empty() {
        exit(65);
    }

    Ok(())
}

fn run_prompt() -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        stdout.write_all(b"> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        // Every prompt line stands alone; its errors do not carry over.
        run(&line);
    }

    Ok(())
}

fn run(source: &str) -> Vec<LexerError> {
    let (tokens, errors) = Lexer::new(source).collect_all();

    for error in &errors {
        error::report(error);
    }

    for token in &tokens {
        println!("{} {token}", token.kind.name());
    }

    log::debug!("{} tokens, {} errors", tokens.len(), errors.len());

    errors
}
