//! Priority sampler: dedupes a section, then keeps a tier-dependent prefix.

use crate::dedup::Deduplicator;
use dr_core::{KeepRatios, Priority, Section};

/// Slack subtracted before `ceil` so exact multiples (e.g. 10 * 0.2)
/// do not round up on float error.
const RATIO_EPSILON: f64 = 1e-9;

pub fn omission_notice(omitted: usize) -> String {
    format!("... [{} more similar entries omitted]", omitted)
}

/// Lines kept for `total` lines at `ratio`: `ceil(total * ratio)`, at least 1.
pub fn keep_count(total: usize, ratio: f64) -> usize {
    if total == 0 {
        return 0;
    }
    let keep = (total as f64 * ratio - RATIO_EPSILON).ceil().max(1.0) as usize;
    keep.min(total)
}

/// Keep the first `keep_count` lines, appending a notice if any were dropped.
pub fn sample(lines: &[String], ratio: f64) -> String {
    let total = lines.len();
    let keep = keep_count(total, ratio);
    let mut result = lines[..keep].join("\n");
    if keep < total {
        result.push('\n');
        result.push_str(&omission_notice(total - keep));
    }
    result
}

/// Section compressor.
#[derive(Debug, Clone)]
pub struct PrioritySampler {
    dedup: Deduplicator,
    ratios: KeepRatios,
}

impl PrioritySampler {
    pub fn new(dedup: Deduplicator, ratios: KeepRatios) -> Self {
        Self { dedup, ratios }
    }

    /// Keep-ratio for a tier. High is always 1.0.
    pub fn ratio(&self, priority: Priority) -> f64 {
        match priority {
            Priority::High => 1.0,
            Priority::Medium => self.ratios.medium,
            Priority::Low => self.ratios.low,
        }
    }

    /// Compressed section body. High sections are deduplicated only.
    pub fn compress(&self, section: &Section) -> String {
        let lines: Vec<&str> = section.content.lines().collect();
        let deduped = self.dedup.dedupe(&lines);
        match section.priority {
            Priority::High => deduped.join("\n"),
            tier => sample(&deduped, self.ratio(tier)),
        }
    }
}
