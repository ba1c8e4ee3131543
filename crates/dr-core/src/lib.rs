pub mod config;
pub mod error;
pub mod types;

pub use config::{CountStyle, KeepRatios, NormalizeStep, Profile, ReducerConfig};
pub use error::{DrError, Result};
pub use types::{Priority, Section};
