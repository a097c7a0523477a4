//! Configuration validation that reports every problem at once.

use super::core::ShipgateConfig;
use crate::core::{Result, ShipgateError};

/// Collect all range problems in a config; empty means valid.
pub fn validation_errors(config: &ShipgateConfig) -> Vec<String> {
    let mut errors = Vec::new();

    let coverage = config.confidence.test_coverage;
    if !(0.0..=100.0).contains(&coverage) {
        errors.push(format!(
            "confidence.test_coverage must be within 0-100 (got {coverage})"
        ));
    }
    if config.confidence.total_phases == 0 {
        errors.push("confidence.total_phases must be positive".to_string());
    }

    if config.capacity.target_users == 0 {
        errors.push("capacity.target_users must be positive".to_string());
    }

    let decision = &config.decision;
    for (name, value) in [
        ("decision.redesign_health_below", decision.redesign_health_below),
        (
            "decision.conditional_health_below",
            decision.conditional_health_below,
        ),
    ] {
        if !(0.0..=100.0).contains(&value) {
            errors.push(format!("{name} must be within 0-100 (got {value})"));
        }
    }
    if decision.redesign_health_below > decision.conditional_health_below {
        errors.push(format!(
            "decision.redesign_health_below ({}) must not exceed decision.conditional_health_below ({})",
            decision.redesign_health_below, decision.conditional_health_below
        ));
    }

    errors
}

pub fn validate_config(config: &ShipgateConfig) -> Result<()> {
    let errors = validation_errors(config);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ShipgateError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ShipgateConfig::default()).is_ok());
    }

    #[test]
    fn test_accumulates_all_errors() {
        let mut config = ShipgateConfig::default();
        config.confidence.test_coverage = 140.0;
        config.capacity.target_users = 0;
        config.decision.redesign_health_below = 80.0;

        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].starts_with("confidence.test_coverage"));
        assert!(errors[1].starts_with("capacity.target_users"));
        assert!(errors[2].contains("must not exceed"));
    }
}
