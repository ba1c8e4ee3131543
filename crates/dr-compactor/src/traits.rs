use crate::pipeline::ReductionEngine;
use crate::tokens;
use dr_core::Result;

/// What a log-source reader needs from a preprocessor.
pub trait Preprocessor: Send + Sync {
    /// Estimated token count.
    fn estimate_tokens(&self, content: &str) -> usize {
        tokens::estimate(content)
    }

    /// Whether content is over budget and should be reduced.
    fn should_process(&self, content: &str, max_tokens: usize) -> bool {
        tokens::should_process(content, max_tokens)
    }

    /// Reduce content. Never fails for string input today.
    fn process(&self, content: &str) -> Result<String>;
}

impl Preprocessor for ReductionEngine {
    fn process(&self, content: &str) -> Result<String> {
        self.process_with_budget(content, self.config().max_tokens)
    }
}
