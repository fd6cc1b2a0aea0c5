// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{LevelFilter, Log, Metadata, Record};

pub(crate) struct Logger;

impl Logger {
    pub fn initialize(verbose: bool) {
        let logger = Box::leak(Box::new(Logger));

        log::set_max_level(if verbose { LevelFilter::Trace } else { LevelFilter::Warn });
        log::set_logger(logger).expect("failed to install the logger");
        log::debug!("logger installed");
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        _ = metadata;
        true
    }

    fn log(&self, record: &Record<'_>) {
        eprintln!("[{}] {}: {}", record.level(), record.file().unwrap_or_default(), record.args());
    }

    fn flush(&self) {}
}
