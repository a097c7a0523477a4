//! Whole-run assessments derived from the classified issues.

pub mod capacity;
pub mod confidence;
pub mod gaps;
pub mod health;
pub mod risk;

pub use capacity::{
    assess_capacity, extract_user_count, rate_capacity, CapacityRating, CapacitySource,
    ConcurrentUserAssessment,
};
pub use confidence::{assess_confidence, ConfidenceLevel, ConfidenceLevelAssessment};
pub use gaps::{analyze_gaps, fix_days, format_fix_time, CriticalGapAnalysis, IssueSummary};
pub use health::{assess_health, HealthBreakdown, HealthRating, SystemHealthAssessment};
pub use risk::{assess_risk, combine_overall, rate_dimension, RiskAssessment};
