// Export modules for library usage
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod extractors;
pub mod io;
pub mod narrative;
pub mod scoring;

// Re-export commonly used types
pub use crate::config::{default_policy, CategoryWeights, NarrativeThresholds, ScoringPolicy};
pub use crate::core::{
    Assessment, Category, Evidence, LanguageUsage, Polarity, ProfileRecord, ProfileSummary,
    RepositorySummary, ScoreBreakdown, Signal,
};
pub use crate::engine::{assess, assess_with_policy};
pub use crate::errors::{GitworthError, Result};
pub use crate::extractors::{extract, extract_all, CategorySignals};
pub use crate::narrative::{generate, Narrative, FIRST_REPOSITORY_RECOMMENDATION};
pub use crate::scoring::aggregate;
