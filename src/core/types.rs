//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome reported by an analyzer for a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pass,
    Fail,
    Pending,
    Conditional,
}

/// Severity assigned by the analyzer that produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Area of the application a finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Native,
    Bridge,
    Database,
    Security,
    Performance,
    Config,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Native,
        Category::Bridge,
        Category::Database,
        Category::Security,
        Category::Performance,
        Category::Config,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Native => "Native modules",
            Category::Bridge => "Native bridge",
            Category::Database => "Database",
            Category::Security => "Security",
            Category::Performance => "Performance",
            Category::Config => "Configuration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The analysis phases that feed findings into the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseKind {
    StaticAnalysis,
    DatabaseSimulation,
    SecurityAudit,
    PerformanceAnalysis,
    ConfigurationAudit,
}

impl PhaseKind {
    pub const ALL: [PhaseKind; 5] = [
        PhaseKind::StaticAnalysis,
        PhaseKind::DatabaseSimulation,
        PhaseKind::SecurityAudit,
        PhaseKind::PerformanceAnalysis,
        PhaseKind::ConfigurationAudit,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PhaseKind::StaticAnalysis => "Static analysis",
            PhaseKind::DatabaseSimulation => "Database simulation",
            PhaseKind::SecurityAudit => "Security audit",
            PhaseKind::PerformanceAnalysis => "Performance analysis",
            PhaseKind::ConfigurationAudit => "Configuration audit",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            PhaseKind::StaticAnalysis => "static-analysis",
            PhaseKind::DatabaseSimulation => "database-simulation",
            PhaseKind::SecurityAudit => "security-audit",
            PhaseKind::PerformanceAnalysis => "performance-analysis",
            PhaseKind::ConfigurationAudit => "configuration-audit",
        }
    }

    /// Category used for the synthetic finding emitted when this phase fails
    pub fn failure_category(&self) -> Category {
        match self {
            PhaseKind::StaticAnalysis => Category::Native,
            PhaseKind::DatabaseSimulation => Category::Database,
            PhaseKind::SecurityAudit => Category::Security,
            PhaseKind::PerformanceAnalysis => Category::Performance,
            PhaseKind::ConfigurationAudit => Category::Config,
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
