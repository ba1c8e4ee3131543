//! Keyword-driven priority classification.

use dr_core::Priority;

fn lowered(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Assigns a priority tier from two keyword tables.
#[derive(Debug, Clone)]
pub struct PriorityClassifier {
    high: Vec<String>,
    medium: Vec<String>,
}

impl PriorityClassifier {
    pub fn new(high: &[String], medium: &[String]) -> Self {
        Self { high: lowered(high), medium: lowered(medium) }
    }

    /// High keywords match name or content, medium keywords the name only.
    /// High is checked first; no match is Low.
    pub fn classify(&self, name: &str, content: &str) -> Priority {
        let name = name.to_lowercase();
        if contains_any(&name, &self.high) || contains_any(&content.to_lowercase(), &self.high) {
            return Priority::High;
        }
        if contains_any(&name, &self.medium) {
            return Priority::Medium;
        }
        Priority::Low
    }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| text.contains(kw.as_str()))
}
