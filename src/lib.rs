// Export modules for library usage
pub mod aggregation;
pub mod assessment;
pub mod classification;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod decision;
pub mod formatting;
pub mod io;
pub mod normalize;
pub mod observability;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{
    AuditInput, Category, Finding, PhaseFailure, PhaseKind, PhaseOutcome, PhaseResult, Severity,
    ShipgateError, Status,
};

pub use crate::classification::{classify_issue, classify_issues, ClassifiedIssue, Priority};

pub use crate::config::ShipgateConfig;

pub use crate::decision::{GoNoGoRecommendation, Recommendation};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::pipeline::{evaluate, EvaluationOptions, ProductionReadinessVerdict};
