//! Token estimation from byte and word heuristics, whichever is larger.

/// Bytes per token for the character heuristic.
const BYTES_PER_TOKEN: usize = 4;

/// Estimate tokens: `max(len / 4, words / 0.75)`.
///
/// `words / 0.75` is evaluated as `words * 4 / 3` so the floor is exact.
pub fn estimate(content: &str) -> usize {
    if content.is_empty() {
        return 0;
    }
    let char_estimate = content.len() / BYTES_PER_TOKEN;
    let word_estimate = content.split_whitespace().count() * 4 / 3;
    char_estimate.max(word_estimate)
}

/// True when the estimate exceeds the budget.
pub fn should_process(content: &str, max_tokens: usize) -> bool {
    estimate(content) > max_tokens
}
