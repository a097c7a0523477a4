use serde::{Deserialize, Deserializer, Serialize};

/// Count thresholds for rating one risk dimension.
///
/// `top` is the number of issues rated at the dimension's highest level
/// (CRITICAL or SEVERE) and `second` the number at the next level down
/// (HIGH or MODERATE). A zero `critical_top`, `high_top` or `medium_second`
/// disables that check. Fields omitted from a `[risk.<dimension>]` section
/// keep that dimension's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionThresholds {
    /// Rate CRITICAL when `top >= critical_top`
    pub critical_top: usize,

    /// Rate HIGH when `top >= high_top`
    pub high_top: usize,

    /// Rate HIGH when `second > high_second_above`
    pub high_second_above: usize,

    /// Rate MEDIUM when `second >= medium_second`
    pub medium_second: usize,
}

/// Fields set in one `[risk.<dimension>]` section
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DimensionOverrides {
    critical_top: Option<usize>,
    high_top: Option<usize>,
    high_second_above: Option<usize>,
    medium_second: Option<usize>,
}

impl DimensionOverrides {
    fn apply_to(self, base: DimensionThresholds) -> DimensionThresholds {
        DimensionThresholds {
            critical_top: self.critical_top.unwrap_or(base.critical_top),
            high_top: self.high_top.unwrap_or(base.high_top),
            high_second_above: self.high_second_above.unwrap_or(base.high_second_above),
            medium_second: self.medium_second.unwrap_or(base.medium_second),
        }
    }
}

fn merge_dimension<'de, D: Deserializer<'de>>(
    deserializer: D,
    base: DimensionThresholds,
) -> Result<DimensionThresholds, D::Error> {
    DimensionOverrides::deserialize(deserializer).map(|overrides| overrides.apply_to(base))
}

fn security_section<'de, D: Deserializer<'de>>(d: D) -> Result<DimensionThresholds, D::Error> {
    merge_dimension(d, DimensionThresholds::security())
}

fn performance_section<'de, D: Deserializer<'de>>(d: D) -> Result<DimensionThresholds, D::Error> {
    merge_dimension(d, DimensionThresholds::performance())
}

fn reliability_section<'de, D: Deserializer<'de>>(d: D) -> Result<DimensionThresholds, D::Error> {
    merge_dimension(d, DimensionThresholds::reliability())
}

fn user_experience_section<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<DimensionThresholds, D::Error> {
    merge_dimension(d, DimensionThresholds::user_experience())
}

impl DimensionThresholds {
    pub fn security() -> Self {
        Self {
            critical_top: 1,
            high_top: 0,
            high_second_above: 2,
            medium_second: 1,
        }
    }

    pub fn reliability() -> Self {
        Self {
            critical_top: 1,
            high_top: 0,
            high_second_above: 1,
            medium_second: 1,
        }
    }

    pub fn performance() -> Self {
        Self {
            critical_top: 3,
            high_top: 1,
            high_second_above: 3,
            medium_second: 1,
        }
    }

    pub fn user_experience() -> Self {
        Self {
            critical_top: 0,
            high_top: 1,
            high_second_above: 3,
            medium_second: 1,
        }
    }
}

/// Per-dimension risk thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    #[serde(
        default = "DimensionThresholds::security",
        deserialize_with = "security_section"
    )]
    pub security: DimensionThresholds,

    #[serde(
        default = "DimensionThresholds::performance",
        deserialize_with = "performance_section"
    )]
    pub performance: DimensionThresholds,

    #[serde(
        default = "DimensionThresholds::reliability",
        deserialize_with = "reliability_section"
    )]
    pub reliability: DimensionThresholds,

    #[serde(
        default = "DimensionThresholds::user_experience",
        deserialize_with = "user_experience_section"
    )]
    pub user_experience: DimensionThresholds,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            security: DimensionThresholds::security(),
            performance: DimensionThresholds::performance(),
            reliability: DimensionThresholds::reliability(),
            user_experience: DimensionThresholds::user_experience(),
        }
    }
}

/// Health cutoffs used by the decision rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionThresholds {
    /// Health below this requires a major redesign
    #[serde(default = "default_redesign_below")]
    pub redesign_health_below: f64,

    /// Health below this only allows a conditional go
    #[serde(default = "default_conditional_below")]
    pub conditional_health_below: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            redesign_health_below: default_redesign_below(),
            conditional_health_below: default_conditional_below(),
        }
    }
}

fn default_redesign_below() -> f64 {
    30.0
}
fn default_conditional_below() -> f64 {
    70.0
}

/// Inputs to the confidence assessment that are not measured by this run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Estimated test coverage percentage of the audited app (0-100)
    #[serde(default = "default_test_coverage")]
    pub test_coverage: f64,

    /// Number of phases a complete audit runs
    #[serde(default = "default_total_phases")]
    pub total_phases: usize,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            test_coverage: default_test_coverage(),
            total_phases: default_total_phases(),
        }
    }
}

fn default_test_coverage() -> f64 {
    75.0
}
fn default_total_phases() -> usize {
    5
}

/// Concurrent-user capacity requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityConfig {
    /// Concurrent users the app must support
    #[serde(default = "default_target_users")]
    pub target_users: u32,

    /// Estimate used when no phase reports a figure
    #[serde(default = "default_baseline_users")]
    pub baseline_users: u32,

    /// Measured figure that takes precedence over anything in the findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_users: Option<u32>,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            target_users: default_target_users(),
            baseline_users: default_baseline_users(),
            estimated_users: None,
        }
    }
}

fn default_target_users() -> u32 {
    150
}
fn default_baseline_users() -> u32 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_thresholds_partial_override() {
        let thresholds: RiskThresholds = toml::from_str(
            r#"
            [security]
            critical_top = 2
            high_second_above = 0
            "#,
        )
        .unwrap();
        assert_eq!(thresholds.security.critical_top, 2);
        assert_eq!(thresholds.security.high_second_above, 0);
        assert_eq!(thresholds.security.medium_second, 1);
        assert_eq!(thresholds.reliability, DimensionThresholds::reliability());
    }

    #[test]
    fn test_partial_dimension_keeps_its_own_defaults() {
        let thresholds: RiskThresholds = toml::from_str(
            r#"
            [performance]
            critical_top = 5
            "#,
        )
        .unwrap();
        assert_eq!(
            thresholds.performance,
            DimensionThresholds {
                critical_top: 5,
                ..DimensionThresholds::performance()
            }
        );
        // One MODERATE issue stays below the HIGH cutoff.
        assert_eq!(
            crate::assessment::rate_dimension(0, 1, &thresholds.performance),
            crate::classification::RiskLevel::Medium
        );
        assert_eq!(thresholds.security, DimensionThresholds::security());
    }

    #[test]
    fn test_unknown_dimension_field_is_rejected() {
        let result: Result<RiskThresholds, _> = toml::from_str("[performance]
critcal_top = 5
");
        assert!(result.is_err());
    }

    #[test]
    fn test_capacity_defaults() {
        let config = CapacityConfig::default();
        assert_eq!(config.target_users, 150);
        assert_eq!(config.baseline_users, 120);
        assert!(config.estimated_users.is_none());
    }
}
