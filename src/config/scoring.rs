//! Health score weights
//!
//! Penalties are subtracted per counted issue and the phase bonus is added per
//! passing phase, starting from a perfect score of 100.

use serde::{Deserialize, Serialize};

/// Health scoring weights configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthWeights {
    /// Penalty per CRITICAL priority issue
    #[serde(default = "default_critical_penalty")]
    pub critical: u32,

    /// Penalty per HIGH priority issue
    #[serde(default = "default_high_penalty")]
    pub high: u32,

    /// Penalty per MEDIUM priority issue
    #[serde(default = "default_medium_penalty")]
    pub medium: u32,

    /// Penalty per deployment blocker
    #[serde(default = "default_blocker_penalty")]
    pub deployment_blocker: u32,

    /// Penalty per security vulnerability
    #[serde(default = "default_security_penalty")]
    pub security_vulnerability: u32,

    /// Penalty per performance bottleneck
    #[serde(default = "default_performance_penalty")]
    pub performance_bottleneck: u32,

    /// Bonus per phase that completed with PASS
    #[serde(default = "default_passing_phase_bonus")]
    pub passing_phase: u32,
}

impl Default for HealthWeights {
    fn default() -> Self {
        Self {
            critical: default_critical_penalty(),
            high: default_high_penalty(),
            medium: default_medium_penalty(),
            deployment_blocker: default_blocker_penalty(),
            security_vulnerability: default_security_penalty(),
            performance_bottleneck: default_performance_penalty(),
            passing_phase: default_passing_phase_bonus(),
        }
    }
}

pub fn default_critical_penalty() -> u32 {
    25
}
pub fn default_high_penalty() -> u32 {
    10
}
pub fn default_medium_penalty() -> u32 {
    5
}
pub fn default_blocker_penalty() -> u32 {
    30
}
pub fn default_security_penalty() -> u32 {
    20
}
pub fn default_performance_penalty() -> u32 {
    15
}
pub fn default_passing_phase_bonus() -> u32 {
    5
}
