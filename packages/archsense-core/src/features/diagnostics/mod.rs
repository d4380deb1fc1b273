/// Diagnostics Feature
///
/// Structured notices explaining classification decisions.
///
/// ## Architecture
/// - **Domain**: Diagnostic, DiagnosticCode, Severity
/// - **Ports**: DiagnosticSink trait (injected into every classifier call)
/// - **Infrastructure**: TracingSink, `Vec<Diagnostic>` collector
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::*;
pub use infrastructure::*;
pub use ports::*;
