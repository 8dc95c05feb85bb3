use crate::core::{AlertSeverity, RiskLevel};
use chrono::{DateTime, Utc};
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // NO_COLOR per the no-color.org convention
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Plain output: no colors regardless of terminal.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }

    pub fn paint_risk(&self, level: RiskLevel, text: &str) -> String {
        if !self.color.should_use_color() {
            return text.to_string();
        }
        match level {
            RiskLevel::High => text.red().bold().to_string(),
            RiskLevel::Medium => text.yellow().to_string(),
            RiskLevel::Low => text.green().to_string(),
        }
    }

    pub fn paint_severity(&self, severity: AlertSeverity, text: &str) -> String {
        if !self.color.should_use_color() {
            return text.to_string();
        }
        match severity {
            AlertSeverity::High => text.red().to_string(),
            AlertSeverity::Medium => text.yellow().to_string(),
            AlertSeverity::Low => text.dimmed().to_string(),
        }
    }
}

/// Thousands-separated count for report tables.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_score(value: f64) -> String {
    format!("{value:.1}")
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

/// Human-readable age of a timestamp relative to `now`.
pub fn format_relative_date(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now - then;
    if delta.num_seconds() < 60 {
        "just now".to_string()
    } else if delta.num_minutes() < 60 {
        let minutes = delta.num_minutes();
        format!("{minutes} minute{} ago", plural(minutes))
    } else if delta.num_hours() < 24 {
        let hours = delta.num_hours();
        format!("{hours} hour{} ago", plural(hours))
    } else {
        let days = delta.num_days();
        format!("{days} day{} ago", plural(days))
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
