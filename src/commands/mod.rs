//! CLI command implementations for shipgate.
//!
//! Available commands:
//! - **evaluate**: Classify an audit's findings and produce a Go/No-Go verdict
//! - **init**: Write a default `.shipgate.toml`

pub mod evaluate;
pub mod init;

pub use evaluate::{handle_evaluate, resolve_config, EvaluateConfig};
pub use init::{init_config, init_config_in};

use crate::core::ShipgateError;

/// Hint printed under an error the user can fix without a code change.
pub fn user_hint(err: &anyhow::Error) -> Option<&'static str> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ShipgateError>())
        .filter(|e| e.is_user_fixable())
        .map(|_| "Fix the audit document or configuration and run again.")
}
