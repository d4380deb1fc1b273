//! Archsense classification CLI
//!
//! Reads extracted structural facts (JSON), runs the analysis pipeline once
//! and prints the classified model.
//!
//! # Usage
//!
//! ```bash
//! # Text summary with the default (conventional) preset
//! cargo run --bin archsense-classify -- facts.json
//!
//! # Strict preset, parallel classification, snapshot and diagnostics as JSON
//! cargo run --bin archsense-classify -- facts.json --preset strict --parallel --format json
//!
//! # YAML configuration (schema v1)
//! cargo run --bin archsense-classify -- facts.json --config archsense.yaml
//! ```

use archsense_core::{
    AnalysisPipeline, ClassificationConfig, Diagnostic, DiagnosticSink, EnrichmentReport,
    ExtractedFacts, ModelSnapshot, Preset, TracingSink,
};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "archsense-classify")]
#[command(about = "Classify architectural elements from extracted structural facts", long_about = None)]
struct Cli {
    /// Extracted facts (JSON: types, ports, services)
    facts: PathBuf,

    /// YAML configuration file (takes precedence over --preset)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Configuration preset
    #[arg(short, long, value_parser = Preset::from_str, default_value = "conventional")]
    preset: Preset,

    /// Classify independent types in parallel
    #[arg(long)]
    parallel: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// `--format json` document
#[derive(Serialize)]
struct JsonOutput<'a> {
    snapshot: serde_json::Value,
    diagnostics: &'a [Diagnostic],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => ClassificationConfig::from_yaml_file(path)?,
        None => ClassificationConfig::from_preset(cli.preset),
    };
    if cli.parallel {
        config = config.parallel(true);
    }

    let facts = ExtractedFacts::from_json_file(&cli.facts)?;
    info!("loaded facts from {}", cli.facts.display());

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let (snapshot, report) =
        AnalysisPipeline::new(Arc::new(config)).run_with_report(facts, &mut diagnostics)?;

    match cli.format {
        OutputFormat::Text => print_summary(&snapshot, &report, &diagnostics),
        OutputFormat::Json => {
            let output = JsonOutput {
                snapshot: snapshot.to_json_value()?,
                diagnostics: &diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);

            let mut sink = TracingSink;
            for diagnostic in diagnostics {
                sink.report(diagnostic);
            }
        }
    }
    Ok(())
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("archsense_core=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn print_summary(snapshot: &ModelSnapshot, report: &EnrichmentReport, diagnostics: &[Diagnostic]) {
    let types = snapshot.type_model();
    println!("Types:     {} ({} aggregate roots)", types.len(), types.aggregate_roots().count());
    println!(
        "Ports:     {} inbound, {} outbound",
        snapshot.inbound_ports().count(),
        snapshot.outbound_ports().count()
    );
    println!("Services:  {}", snapshot.services().count());

    if !report.promoted.is_empty() {
        println!("\nPromoted to AGGREGATE_ROOT:");
        for promoted in &report.promoted {
            println!("  {}  [{}]", promoted.qualified_name, promoted.evidence);
        }
    }

    let relationships: Vec<_> = snapshot
        .types()
        .flat_map(|ty| ty.relationships().map(move |property| (ty, property)))
        .collect();
    if !relationships.is_empty() {
        println!("\nRelationships:");
        for (ty, property) in relationships {
            if let Some(relationship) = property.relationship() {
                let boundary = if relationship.is_inter_aggregate() {
                    " (inter-aggregate)"
                } else {
                    ""
                };
                let inverse = relationship
                    .inverse_property
                    .as_deref()
                    .map(|name| format!(" mappedBy={}", name))
                    .unwrap_or_default();
                println!(
                    "  {}.{} -> {} {}{}{}",
                    ty.simple_name(),
                    property.name(),
                    relationship.target,
                    relationship.kind,
                    inverse,
                    boundary
                );
            }
        }
    }

    if !diagnostics.is_empty() {
        println!("\nDiagnostics:");
        for diagnostic in diagnostics {
            println!("  {}", diagnostic);
        }
    }
}
