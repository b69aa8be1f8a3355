use std::fmt::Debug;

use codemap::SpanLoc;

/// Receives what the converter and declaration parser have to report.
///
/// Nothing is sent while [`Options::quiet`](crate::Options::quiet) is set.
pub trait Logger: Debug {
    /// A lenient fallback replaced a rejected value
    fn debug(&self, message: &str);

    /// A declaration was dropped; `location` spans the whole declaration
    fn warning(&self, location: SpanLoc, message: &str);
}

/// Writes to standard error, one line per event
#[derive(Debug)]
pub struct StdLogger;

impl Logger for StdLogger {
    #[inline]
    fn debug(&self, message: &str) {
        eprintln!("cssattr: debug: {}", message);
    }

    #[inline]
    fn warning(&self, location: SpanLoc, message: &str) {
        eprintln!(
            "./{}:{}:{}: warning: {}",
            location.file.name(),
            location.begin.line + 1,
            location.begin.column + 1,
            message,
        );
    }
}

/// Drops every event
#[derive(Debug)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _: &str) {}

    fn warning(&self, _: SpanLoc, _: &str) {}
}
