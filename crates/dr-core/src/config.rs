//! Reducer configuration and the two built-in report profiles.

use crate::error::{DrError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static RE_COMPACT_COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?) \(x(\d+)\)\s*$").unwrap());
static RE_VERBOSE_COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"^(.+?) \(occurred (\d+) times\)\s*$"
).unwrap());

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in report profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Generic operating-system log digests (logwatch-style banners).
    SystemLog,
    /// Structured application event exports (markdown headings).
    AppEvents,
}

impl Profile {
    pub fn config(&self) -> ReducerConfig {
        match self {
            Self::SystemLog => ReducerConfig::system_log(),
            Self::AppEvents => ReducerConfig::app_events(),
        }
    }
}

/// One substitution pass of the line normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeStep {
    Uuid,
    Ip,
    Timestamp,
    Path,
    UnitNumber,
    Number,
}

/// How a collapsed line reports its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountStyle {
    /// `line (x7)`
    #[default]
    Compact,
    /// `line (occurred 7 times)`
    Verbose,
}

impl CountStyle {
    pub fn annotate(&self, line: &str, count: usize) -> String {
        match self {
            Self::Compact => format!("{} (x{})", line, count),
            Self::Verbose => format!("{} (occurred {} times)", line, count),
        }
    }

    /// Split a trailing count annotation off a line. Lines without one
    /// count once.
    pub fn strip<'a>(&self, line: &'a str) -> (&'a str, usize) {
        let re = match self {
            Self::Compact => &*RE_COMPACT_COUNT,
            Self::Verbose => &*RE_VERBOSE_COUNT,
        };
        re.captures(line)
            .and_then(|cap| {
                let count = cap[2].parse::<usize>().ok().filter(|n| *n > 0)?;
                Some((cap.get(1)?.as_str(), count))
            })
            .unwrap_or((line, 1))
    }
}

/// Fraction of deduplicated lines kept for sampled tiers.
/// High-priority sections are never sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeepRatios {
    pub medium: f64,
    pub low: f64,
}

impl Default for KeepRatios {
    fn default() -> Self {
        Self { medium: 0.5, low: 0.2 }
    }
}

/// Full engine configuration. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReducerConfig {
    pub name: String,
    /// Token budget used by `process`.
    pub max_tokens: usize,
    /// Header-line regex; capture group 1 is the section title.
    pub header_pattern: String,
    /// Header re-emitted for each section; `{name}` is replaced by the title.
    pub header_template: String,
    /// Name for headerless input and for text before the first header.
    pub fallback_section_name: String,
    /// Matched against section name and content.
    pub high_keywords: Vec<String>,
    /// Matched against section name only.
    pub medium_keywords: Vec<String>,
    /// Line lists shorter than this skip deduplication.
    pub dedupe_min_lines: usize,
    pub count_style: CountStyle,
    pub normalize_steps: Vec<NormalizeStep>,
    pub keep_ratios: KeepRatios,
    /// Lines kept by the aggressive fallback besides headers.
    pub severity_keywords: Vec<String>,
    /// Fallback line budget is `max_tokens / line_budget_divisor`.
    pub line_budget_divisor: usize,
}

impl ReducerConfig {
    /// Profile for generic system-log digests.
    pub fn system_log() -> Self {
        Self {
            name: "system_log".into(),
            max_tokens: 8000,
            header_pattern: r"(?m)^[ \t]*(?:#{3,}|={3,}|-{3,})[ \t]*([^#=\s-].*?)[ \t]*(?:#{3,}|={3,}|-{3,})[ \t\r]*$".into(),
            header_template: "### {name} ###".into(),
            fallback_section_name: "General".into(),
            high_keywords: s(&[
                "security", "auth", "login", "ssh", "sudo", "kernel", "panic",
                "segfault", "oom-kill", "out of memory", "firewall", "iptables",
                "fail2ban", "selinux", "apparmor", "intrusion",
            ]),
            medium_keywords: s(&[
                "network", "disk", "filesystem", "mount", "systemd", "service",
                "cron", "postfix", "mail", "httpd", "nginx", "apache", "dns",
                "package", "update",
            ]),
            dedupe_min_lines: 5,
            count_style: CountStyle::Compact,
            normalize_steps: vec![
                NormalizeStep::Uuid,
                NormalizeStep::Ip,
                NormalizeStep::Timestamp,
                NormalizeStep::UnitNumber,
                NormalizeStep::Number,
            ],
            keep_ratios: KeepRatios::default(),
            severity_keywords: s(&[
                "error", "critical", "emergency", "alert", "security", "failed", "exception",
            ]),
            line_budget_divisor: 10,
        }
    }

    /// Profile for structured application event exports.
    pub fn app_events() -> Self {
        Self {
            name: "app_events".into(),
            max_tokens: 8000,
            header_pattern: r"(?m)^#{1,3}[ \t]+(.+?)[ \t\r]*$".into(),
            header_template: "## {name}".into(),
            fallback_section_name: "General".into(),
            high_keywords: s(&[
                "security", "authentication", "login", "unauthorized", "forbidden",
                "permission denied", "csrf", "injection", "brute force",
                "database error", "deadlock", "cron failed", "cron failure", "fatal",
            ]),
            medium_keywords: s(&[
                "database", "query", "cron", "scheduler", "queue", "job", "cache",
                "api", "http", "webhook", "mail", "performance", "slow",
            ]),
            dedupe_min_lines: 10,
            count_style: CountStyle::Verbose,
            normalize_steps: vec![
                NormalizeStep::Uuid,
                NormalizeStep::Ip,
                NormalizeStep::Timestamp,
                NormalizeStep::Path,
                NormalizeStep::UnitNumber,
                NormalizeStep::Number,
            ],
            keep_ratios: KeepRatios::default(),
            severity_keywords: s(&[
                "error", "critical", "fatal", "security", "failed", "exception", "denied",
            ]),
            line_budget_divisor: 10,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Parse a JSON config; missing fields fall back to the system-log profile.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render the header line for a section.
    pub fn render_header(&self, name: &str) -> String {
        self.header_template.replace("{name}", name)
    }

    /// Check the numeric and structural settings. Regex checks happen
    /// when an engine compiles the config.
    pub fn validate(&self) -> Result<()> {
        for (tier, value) in [("medium", self.keep_ratios.medium), ("low", self.keep_ratios.low)] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(DrError::InvalidRatio { tier: tier.into(), value });
            }
        }
        if self.line_budget_divisor == 0 {
            return Err(DrError::InvalidConfig("line_budget_divisor must be positive".into()));
        }
        if self.header_pattern.trim().is_empty() {
            return Err(DrError::InvalidConfig("header_pattern is empty".into()));
        }
        if !self.header_template.contains("{name}") {
            return Err(DrError::InvalidConfig("header_template lacks a {name} placeholder".into()));
        }
        if self.fallback_section_name.trim().is_empty() {
            return Err(DrError::InvalidConfig("fallback_section_name is empty".into()));
        }
        Ok(())
    }
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self::system_log()
    }
}
