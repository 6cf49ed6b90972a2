//! Validator configuration with environment variable support.
//!
//! # Example
//!
//! ```ignore
//! use fieldcheck::{ValidatorConfig, Validator};
//!
//! // FIELDCHECK_POLICY=fail_fast FIELDCHECK_ARGUMENTS=strict
//! let config = ValidatorConfig::from_env()?;
//! let validator = Validator::new(config);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "FIELDCHECK_";

/// How violations are aggregated across fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Check every field and report all violations.
    #[default]
    CollectAll,
    /// Stop at the first field with a violation.
    FailFast,
}

/// How unparsable numeric rule arguments (`min=abc`) are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentMode {
    /// Compare against zero.
    #[default]
    Lenient,
    /// Reject the record's rules with `Error::InvalidArgument` before any check.
    Strict,
}

/// Error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable deserialization failed.
    #[error("Configuration error: {0}")]
    Env(#[from] envy::Error),
}

/// Settings for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub policy: Policy,
    pub arguments: ArgumentMode,
}

impl ValidatorConfig {
    /// Default configuration: collect-all, lenient arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from `FIELDCHECK_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Self>()?)
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Self>(vars)?)
    }

    /// Set the aggregation policy.
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Stop at the first violating field.
    pub fn fail_fast(self) -> Self {
        self.policy(Policy::FailFast)
    }

    /// Set the argument mode.
    pub fn arguments(mut self, mode: ArgumentMode) -> Self {
        self.arguments = mode;
        self
    }

    /// Reject unparsable numeric arguments.
    pub fn strict(self) -> Self {
        self.arguments(ArgumentMode::Strict)
    }
}

impl fmt::Display for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "policy={:?} arguments={:?}", self.policy, self.arguments)
    }
}
