//! Diagnostic report compactor — priority-weighted reduction engine.
//!
//! Stages:
//! 1. Sections — split the report on header lines
//! 2. Classify — HIGH / MEDIUM / LOW from keyword tables
//! 3. Dedup — collapse lines sharing a normalized pattern
//! 4. Sample — keep a priority-dependent prefix of each section
//! 5. Aggressive — headers + severity lines when still over budget

pub mod aggressive;
pub mod classify;
pub mod dedup;
pub mod normalize;
pub mod pipeline;
pub mod sampler;
pub mod sections;
pub mod tokens;
pub mod traits;

pub use dr_core::{Priority, ReducerConfig, Section};
pub use pipeline::{ReductionEngine, ReductionResult, SectionSummary};
pub use tokens::{estimate as estimate_tokens, should_process};
pub use traits::Preprocessor;
