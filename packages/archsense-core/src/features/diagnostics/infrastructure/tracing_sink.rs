//! Sink forwarding diagnostics to `tracing`

use crate::features::diagnostics::{Diagnostic, DiagnosticSink, Severity};

/// Emits each diagnostic as a `tracing` event with structured fields
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let code = diagnostic.code.as_str();
        let qualified_name = diagnostic.qualified_name.as_deref().unwrap_or("");
        match diagnostic.severity {
            Severity::Info => {
                tracing::info!(code, qualified_name, "{}", diagnostic.message)
            }
            Severity::Warning => {
                tracing::warn!(code, qualified_name, "{}", diagnostic.message)
            }
            Severity::Error => {
                tracing::error!(code, qualified_name, "{}", diagnostic.message)
            }
        }
    }
}
