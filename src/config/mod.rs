// Sub-modules
mod parallel;
mod scoring;
mod thresholds;

// Core configuration types
mod core;
mod loader;
pub mod validation;

pub use parallel::ParallelConfig;
pub use scoring::HealthWeights;
pub use thresholds::{
    CapacityConfig, ConfidenceConfig, DecisionThresholds, DimensionThresholds, RiskThresholds,
};

pub use core::{ShipgateConfig, DEFAULT_CONFIG_TOML};

pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

pub use validation::{validate_config, validation_errors};
