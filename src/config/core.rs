use serde::{Deserialize, Serialize};

use super::parallel::ParallelConfig;
use super::scoring::HealthWeights;
use super::thresholds::{CapacityConfig, ConfidenceConfig, DecisionThresholds, RiskThresholds};

/// Root configuration structure for shipgate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShipgateConfig {
    /// Health score weights
    #[serde(default)]
    pub scoring: HealthWeights,

    /// Risk dimension thresholds
    #[serde(default)]
    pub risk: RiskThresholds,

    /// Confidence assessment inputs
    #[serde(default)]
    pub confidence: ConfidenceConfig,

    /// Capacity requirements and estimate overrides
    #[serde(default)]
    pub capacity: CapacityConfig,

    /// Decision rule cutoffs
    #[serde(default)]
    pub decision: DecisionThresholds,

    /// Parallel classification settings
    #[serde(default)]
    pub parallel: ParallelConfig,
}

/// Default configuration written by `shipgate init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# Shipgate Configuration

[scoring]
critical = 25
high = 10
medium = 5
deployment_blocker = 30
security_vulnerability = 20
performance_bottleneck = 15
passing_phase = 5

[risk.security]
critical_top = 1
high_second_above = 2
medium_second = 1

[risk.reliability]
critical_top = 1
high_second_above = 1
medium_second = 1

[risk.performance]
critical_top = 3
high_top = 1
high_second_above = 3
medium_second = 1

[risk.user_experience]
high_top = 1
high_second_above = 3
medium_second = 1

[confidence]
test_coverage = 75.0
total_phases = 5

[capacity]
target_users = 150
baseline_users = 120
# estimated_users = 200

[decision]
redesign_health_below = 30.0
conditional_health_below = 70.0

[parallel]
enabled = true
min_batch = 64
"#;
