//! Sink decorator counting forwarded diagnostics

use crate::features::diagnostics::{Diagnostic, DiagnosticSink};

/// Forwards to `inner` and counts what passed through
pub struct CountingSink<'a> {
    inner: &'a mut dyn DiagnosticSink,
    count: usize,
}

impl<'a> CountingSink<'a> {
    pub fn new(inner: &'a mut dyn DiagnosticSink) -> Self {
        Self { inner, count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl DiagnosticSink for CountingSink<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.count += 1;
        self.inner.report(diagnostic);
    }
}
