//! The `analyze` command: snapshot in, risk assessment out.

use crate::analysis::{assess_snapshot, AnalysisReport, RiskAnalyzer};
use crate::cli;
use crate::config::load_config;
use crate::core::RiskLevel;
use crate::formatting::FormattingConfig;
use crate::io::input::load_snapshot;
use crate::io::output::create_writer;
use crate::store::Preferences;
use anyhow::Context;
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub snapshot_path: PathBuf,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub min_level: Option<RiskLevel>,
    pub parallel: bool,
    pub formatting: FormattingConfig,
}

pub fn handle_analyze(config: AnalyzeConfig) -> anyhow::Result<()> {
    let engine_config = load_config();
    let snapshot = load_snapshot(&config.snapshot_path)
        .with_context(|| format!("loading snapshot {}", config.snapshot_path.display()))?;
    log::info!(
        "Loaded snapshot: {} entities, {} connections, {} alerts",
        snapshot.entities.len(),
        snapshot.connections.len(),
        snapshot.alerts.len()
    );

    let analyzer = RiskAnalyzer::new(engine_config.risk);
    let mut report = assess_snapshot(&snapshot, &analyzer, Utc::now(), config.parallel);
    apply_view_filters(&mut report, config.min_level, config.top);

    let store = super::open_preference_store();
    let preferences = Preferences::load(store.as_ref());
    let format = super::resolve_format(config.format, &preferences);

    let sink: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    let mut writer = create_writer(format, sink, config.formatting);
    writer.write_report(&report)
}

/// Narrow the report to what the user asked to see. Summary counts keep
/// describing the whole snapshot; only the listing shrinks.
fn apply_view_filters(
    report: &mut AnalysisReport,
    min_level: Option<RiskLevel>,
    top: Option<usize>,
) {
    if let Some(min) = min_level {
        report.assessments = report
            .assessments
            .iter()
            .filter(|a| a.level >= min)
            .cloned()
            .collect();
    }
    if let Some(limit) = top {
        report.assessments = report.assessments.iter().take(limit).cloned().collect();
    }
}
