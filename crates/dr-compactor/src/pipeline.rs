//! Reduction pipeline — orchestrates parse, classify, sample and fallback.

use crate::aggressive::AggressiveCompressor;
use crate::classify::PriorityClassifier;
use crate::dedup::Deduplicator;
use crate::normalize::LineNormalizer;
use crate::sampler::PrioritySampler;
use crate::sections::SectionParser;
use crate::tokens;
use dr_core::{DrError, Priority, ReducerConfig, Result};
use serde::Serialize;
use tracing::{debug, info};

/// Title used to check that the header template round-trips through the parser.
const CHECK_TITLE: &str = "Check";

/// Per-section statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub name: String,
    pub priority: Priority,
    pub lines_in: usize,
    pub lines_out: usize,
}

/// Reduction result with statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ReductionResult {
    pub output: String,
    pub original_tokens: usize,
    pub reduced_tokens: usize,
    pub sections: Vec<SectionSummary>,
    pub fallback_applied: bool,
}

impl ReductionResult {
    fn passthrough(content: &str) -> Self {
        let tokens = tokens::estimate(content);
        Self {
            output: content.to_string(),
            original_tokens: tokens,
            reduced_tokens: tokens,
            sections: Vec::new(),
            fallback_applied: false,
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.original_tokens == 0 { return 1.0; }
        self.reduced_tokens as f64 / self.original_tokens as f64
    }
}

/// The reduction engine. Built once per profile; immutable afterwards.
#[derive(Debug, Clone)]
pub struct ReductionEngine {
    config: ReducerConfig,
    parser: SectionParser,
    classifier: PriorityClassifier,
    sampler: PrioritySampler,
    aggressive: AggressiveCompressor,
}

impl ReductionEngine {
    pub fn new(config: ReducerConfig) -> Result<Self> {
        config.validate()?;

        let parser = SectionParser::new(&config.header_pattern, &config.fallback_section_name)?;
        let rendered = config.render_header(CHECK_TITLE);
        if parser.title_of(&rendered).as_deref() != Some(CHECK_TITLE) {
            return Err(DrError::HeaderTemplateMismatch { rendered });
        }

        let classifier = PriorityClassifier::new(&config.high_keywords, &config.medium_keywords);
        let dedup = Deduplicator::new(
            LineNormalizer::new(&config.normalize_steps),
            config.dedupe_min_lines,
            config.count_style,
        );
        let sampler = PrioritySampler::new(dedup, config.keep_ratios);
        let aggressive = AggressiveCompressor::new(
            parser.clone(),
            &config.severity_keywords,
            config.line_budget_divisor,
        );

        Ok(Self { config, parser, classifier, sampler, aggressive })
    }

    pub fn system_log() -> Result<Self> { Self::new(ReducerConfig::system_log()) }
    pub fn app_events() -> Result<Self> { Self::new(ReducerConfig::app_events()) }

    pub fn config(&self) -> &ReducerConfig { &self.config }
    pub fn parser(&self) -> &SectionParser { &self.parser }
    pub fn classifier(&self) -> &PriorityClassifier { &self.classifier }
    pub fn sampler(&self) -> &PrioritySampler { &self.sampler }
    pub fn aggressive(&self) -> &AggressiveCompressor { &self.aggressive }

    /// Reduce against the configured budget.
    pub fn reduce(&self, content: &str) -> ReductionResult {
        self.reduce_with_budget(content, self.config.max_tokens)
    }

    /// Reduce against an explicit budget.
    pub fn reduce_with_budget(&self, content: &str, max_tokens: usize) -> ReductionResult {
        if content.is_empty() {
            return ReductionResult::passthrough(content);
        }

        let sections = self.parser.parse(content);
        if sections.is_empty() {
            return ReductionResult::passthrough(content);
        }

        let original_tokens = tokens::estimate(content);
        let mut output = String::with_capacity(content.len());
        let mut summaries = Vec::with_capacity(sections.len());

        for mut section in sections {
            section.priority = self.classifier.classify(&section.name, &section.content);
            let lines_in = section.line_count();
            section.content = self.sampler.compress(&section);
            let lines_out = section.line_count();
            debug!(
                section = %section.name,
                priority = %section.priority,
                lines_in,
                lines_out,
                "section compressed"
            );

            if !output.is_empty() {
                output.push_str("\n\n");
            }
            output.push_str(&self.config.render_header(&section.name));
            if !section.content.is_empty() {
                output.push('\n');
                output.push_str(&section.content);
            }

            summaries.push(SectionSummary {
                name: section.name,
                priority: section.priority,
                lines_in,
                lines_out,
            });
        }

        let mut fallback_applied = false;
        let estimated = tokens::estimate(&output);
        if estimated > max_tokens {
            info!(
                profile = %self.config.name,
                estimated,
                max_tokens,
                "primary pass over budget, applying aggressive compression"
            );
            output = self.aggressive.compress(&output, max_tokens);
            fallback_applied = true;
        }

        ReductionResult {
            reduced_tokens: tokens::estimate(&output),
            output,
            original_tokens,
            sections: summaries,
            fallback_applied,
        }
    }

    /// Reduce and return only the text.
    pub fn process_with_budget(&self, content: &str, max_tokens: usize) -> Result<String> {
        Ok(self.reduce_with_budget(content, max_tokens).output)
    }
}
