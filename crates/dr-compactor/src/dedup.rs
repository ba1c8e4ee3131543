//! Line-pattern dedup. Collapses lines sharing a normalized pattern into
//! the first literal occurrence plus a count.

use crate::normalize::LineNormalizer;
use dr_core::CountStyle;
use std::collections::{HashMap, HashSet};

/// Tally for one normalized pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineGroup<'a> {
    pub count: usize,
    pub first: &'a str,
}

/// Count occurrences per non-empty pattern, remembering the first literal line.
/// Each entry is a line with its annotation stripped and the count it carries.
pub fn tally<'a>(entries: &[(&'a str, usize)], patterns: &[String]) -> HashMap<String, LineGroup<'a>> {
    let mut groups: HashMap<String, LineGroup<'a>> = HashMap::new();
    for (&(line, count), pattern) in entries.iter().zip(patterns) {
        if pattern.is_empty() {
            continue;
        }
        groups
            .entry(pattern.clone())
            .and_modify(|g| g.count += count)
            .or_insert(LineGroup { count, first: line });
    }
    groups
}

/// Pattern deduplicator.
#[derive(Debug, Clone)]
pub struct Deduplicator {
    normalizer: LineNormalizer,
    min_lines: usize,
    style: CountStyle,
}

impl Deduplicator {
    pub fn new(normalizer: LineNormalizer, min_lines: usize, style: CountStyle) -> Self {
        Self { normalizer, min_lines, style }
    }

    /// Collapse repeated patterns. Output follows input order; each pattern is
    /// emitted once, at its first occurrence. Blank lines pass through.
    /// Lines already carrying a count annotation fold that count into their
    /// group, so running this on its own output changes nothing.
    pub fn dedupe(&self, lines: &[&str]) -> Vec<String> {
        if lines.len() < self.min_lines {
            return lines.iter().map(|l| l.to_string()).collect();
        }

        let entries: Vec<(&str, usize)> = lines.iter().map(|l| self.style.strip(l)).collect();
        let patterns: Vec<String> = entries.iter().map(|(base, _)| self.normalizer.normalize(base)).collect();
        let groups = tally(&entries, &patterns);

        let mut emitted: HashSet<&str> = HashSet::with_capacity(groups.len());
        let mut result = Vec::with_capacity(groups.len());
        for (line, pattern) in lines.iter().zip(&patterns) {
            if pattern.is_empty() {
                result.push(line.to_string());
                continue;
            }
            if !emitted.insert(pattern.as_str()) {
                continue;
            }
            match groups.get(pattern) {
                Some(group) if group.count > 1 => result.push(self.style.annotate(group.first, group.count)),
                _ => result.push(line.to_string()),
            }
        }
        result
    }

    /// Dedupe a newline-separated block.
    pub fn dedupe_text(&self, text: &str) -> String {
        let lines: Vec<&str> = text.lines().collect();
        self.dedupe(&lines).join("\n")
    }
}
