//! Core data model: input profile, evaluation categories, evidence, and the
//! assembled assessment.

pub mod assessment;
pub mod category;
pub mod evidence;
pub mod profile;

pub use assessment::{Assessment, ProfileSummary};
pub use category::{Category, ScoreBreakdown};
pub use evidence::{best_fact, Evidence, Polarity, Signal};
pub use profile::{LanguageUsage, ProfileRecord, RepositorySummary};
