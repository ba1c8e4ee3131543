//! Line normalizer. Replaces volatile tokens with placeholders so that
//! lines differing only in ids, addresses, times or counts share a key.

use dr_core::NormalizeStep;
use regex::Regex;
use std::sync::LazyLock;

static RE_UUID: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"(?i)\b[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\b"
).unwrap());
static RE_IP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").unwrap());
static RE_DATETIME: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"\b\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(?::\d{2})?(?:[.,]\d+)?(?:Z|[+-]\d{2}:?\d{2})?\b"
).unwrap());
static RE_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{4}[-/]\d{2}[-/]\d{2}\b").unwrap());
static RE_TIME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{1,2}:\d{2}(?::\d{2})?(?:[.,]\d+)?\b").unwrap());
static RE_PATH: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r#"(^|[\s"'(\[=:])(?:/[A-Za-z0-9_\-]+)+/?"#
).unwrap());
static RE_UNIT_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(
    r"(?i)\b\d+(?:\.\d+)?(ms|us|ns|min|sec|s|m|h|d|[kmgt]i?b|b)\b"
).unwrap());
static RE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\b").unwrap());

/// Apply a single step.
pub fn apply_step(text: &str, step: NormalizeStep) -> String {
    match step {
        NormalizeStep::Uuid => RE_UUID.replace_all(text, "UUID").into_owned(),
        NormalizeStep::Ip => RE_IP.replace_all(text, "IP").into_owned(),
        NormalizeStep::Timestamp => {
            let result = RE_DATETIME.replace_all(text, "TIMESTAMP");
            let result = RE_DATE.replace_all(&result, "DATE");
            RE_TIME.replace_all(&result, "TIME").into_owned()
        }
        NormalizeStep::Path => RE_PATH.replace_all(text, "${1}PATH").into_owned(),
        NormalizeStep::UnitNumber => RE_UNIT_NUMBER.replace_all(text, "N${1}").into_owned(),
        NormalizeStep::Number => RE_NUMBER.replace_all(text, "N").into_owned(),
    }
}

/// Ordered list of substitution steps.
#[derive(Debug, Clone)]
pub struct LineNormalizer {
    steps: Vec<NormalizeStep>,
}

impl LineNormalizer {
    pub fn new(steps: &[NormalizeStep]) -> Self {
        Self { steps: steps.to_vec() }
    }

    pub fn steps(&self) -> &[NormalizeStep] {
        &self.steps
    }

    /// Canonical pattern for a line. Blank lines map to `""`, which
    /// callers treat as "never group".
    pub fn normalize(&self, line: &str) -> String {
        let line = line.trim();
        if line.is_empty() {
            return String::new();
        }
        let mut result = line.to_string();
        for step in &self.steps {
            result = apply_step(&result, *step);
        }
        result
    }
}
