//! Aggressive fallback: headers and severity lines only, capped by a
//! line budget derived from the token budget.

use crate::sections::SectionParser;

pub fn truncation_notice(cut: usize) -> String {
    format!("... [{} more lines truncated]", cut)
}

#[derive(Debug, Clone)]
pub struct AggressiveCompressor {
    headers: SectionParser,
    severity: Vec<String>,
    line_budget_divisor: usize,
}

impl AggressiveCompressor {
    pub fn new(headers: SectionParser, severity_keywords: &[String], line_budget_divisor: usize) -> Self {
        Self {
            headers,
            severity: severity_keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            line_budget_divisor: line_budget_divisor.max(1),
        }
    }

    /// Line budget for a token budget.
    pub fn line_budget(&self, max_tokens: usize) -> usize {
        max_tokens / self.line_budget_divisor
    }

    fn has_severity(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.severity.iter().any(|kw| lower.contains(kw.as_str()))
    }

    /// Filter to header and severity lines, then truncate to the line budget.
    /// May return an empty string.
    pub fn compress(&self, content: &str, max_tokens: usize) -> String {
        let kept: Vec<&str> = content
            .lines()
            .filter(|line| self.headers.is_header(line) || self.has_severity(line))
            .collect();

        let budget = self.line_budget(max_tokens);
        if kept.len() <= budget {
            return kept.join("\n");
        }

        let cut = kept.len() - budget;
        let mut result = kept[..budget].join("\n");
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&truncation_notice(cut));
        result
    }
}
