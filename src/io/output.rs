//! Report writers.
//!
//! One writer per output format, all driven through `OutputWriter` so the
//! command layer can stay format-agnostic.

use crate::analysis::AnalysisReport;
use crate::formatting::{format_relative_date, format_score, FormattingConfig};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Savannah Risk Assessment")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Entities | {} |", report.entity_count)?;
        writeln!(self.writer, "| Connections | {} |", report.connection_count)?;
        writeln!(self.writer, "| Alerts | {} |", report.alert_count)?;
        writeln!(
            self.writer,
            "| Average Risk | {} |",
            format_score(report.average_risk)
        )?;
        writeln!(self.writer, "| High-Risk Entities | {} |", report.high_risk_count)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Entities by Risk")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Entity | Type | Risk | Level | Influence | Reach | Factors |"
        )?;
        writeln!(
            self.writer,
            "|--------|------|------|-------|-----------|-------|---------|"
        )?;
        for assessment in &report.assessments {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} |",
                assessment.entity.name,
                assessment.entity.entity_type,
                format_score(assessment.risk.score.value()),
                assessment.level,
                format_score(assessment.influence.influence.value()),
                assessment.influence.reach,
                assessment.risk.factors.join("; "),
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self { writer, formatting }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "SAVANNAH RISK ASSESSMENT")?;
        writeln!(
            self.writer,
            "{} entities | {} connections | {} alerts | average risk {}",
            report.entity_count,
            report.connection_count,
            report.alert_count,
            format_score(report.average_risk),
        )?;
        writeln!(self.writer)?;

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Entity", "Type", "Risk", "Level", "Influence", "Reach", "Updated",
            ]);
        for assessment in &report.assessments {
            table.add_row(vec![
                Cell::new(&assessment.entity.name),
                Cell::new(assessment.entity.entity_type.to_string()),
                Cell::new(format_score(assessment.risk.score.value())),
                Cell::new(
                    self.formatting
                        .paint_risk(assessment.level, &assessment.level.to_string()),
                ),
                Cell::new(format_score(assessment.influence.influence.value())),
                Cell::new(assessment.influence.reach.to_string()),
                Cell::new(format_relative_date(
                    assessment.entity.last_updated,
                    report.generated_at,
                )),
            ]);
        }
        writeln!(self.writer, "{table}")?;

        for assessment in report.assessments.iter().filter(|a| !a.risk.factors.is_empty()) {
            writeln!(
                self.writer,
                "{}: {}",
                assessment.entity.name,
                assessment.risk.factors.join(", ")
            )?;
        }
        Ok(())
    }
}
