//! # Runtime Configuration
//!
//! Loaded from an optional TOML file, then overridden from the environment.
//! Every file field is optional and falls back to its default.
//!
//! ## Config File Format
//!
//! ```toml
//! owner = "0x5a0b54d5dc17e0aadc383d2db43b0a0d3e029c4c"
//! seed = "seed.json"
//!
//! [budget]
//! max_adapter_calls = 10000
//! max_decomposition_depth = 16
//! max_leaves = 1024
//!
//! [signature]
//! verifying_contract = "0x0000000000000000000000000000000000000001"
//!
//! [telemetry]
//! log_level = "info"
//! json_logs = false
//! ```
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `AR_OWNER` | `owner` |
//! | `AR_VERIFYING_CONTRACT` | `signature.verifying_contract` |
//! | `AR_MAX_ADAPTER_CALLS` | `budget.max_adapter_calls` |
//! | `AR_MAX_DECOMPOSITION_DEPTH` | `budget.max_decomposition_depth` |
//! | `AR_MAX_LEAVES` | `budget.max_leaves` |
//! | `AR_LOG_LEVEL` or `RUST_LOG` | `telemetry.log_level` |
//! | `AR_JSON_LOGS` | `telemetry.json_logs` |
//! | `AR_SEED_FILE` | `seed` |

use serde::Deserialize;
use shared_types::{is_zero_address, parse_address, Address, QueryBudget, ZERO_ADDRESS};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "AR_CONFIG";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {reason}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Error message from the I/O operation.
        reason: String,
    },

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// An address field is not 20 bytes of hex.
    #[error("Invalid address for {field}: {reason}")]
    InvalidAddress {
        /// Field or variable name.
        field: &'static str,
        /// Parser message.
        reason: String,
    },

    /// A numeric or boolean field could not be parsed.
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue {
        /// Field or variable name.
        field: &'static str,
        /// Offending value.
        value: String,
    },

    /// Owner is the zero address.
    #[error("Owner is the zero address. Set AR_OWNER or `owner` in the config file.")]
    MissingOwner,

    /// A budget limit is zero.
    #[error("Budget limit {0} must be greater than zero")]
    ZeroBudget(&'static str),
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Initial owner of both registries.
    pub owner: Address,
    /// Resource limits applied to every read query.
    pub budget: QueryBudget,
    /// Signature verifier configuration.
    pub signature: SignatureConfig,
    /// Logging configuration.
    pub telemetry: TelemetryConfig,
    /// Seed file replayed at startup.
    pub seed: Option<PathBuf>,
}

/// Signature verifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureConfig {
    /// Contract address bound into the typed-data domain.
    pub verifying_contract: Address,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` string).
    pub log_level: String,
    /// Emit JSON lines instead of pretty output.
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            owner: ZERO_ADDRESS,
            budget: QueryBudget::default(),
            signature: SignatureConfig::default(),
            telemetry: TelemetryConfig::default(),
            seed: None,
        }
    }
}

// ============================================================================
// File schema
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    owner: Option<String>,
    seed: Option<PathBuf>,
    #[serde(default)]
    budget: BudgetSection,
    #[serde(default)]
    signature: SignatureSection,
    #[serde(default)]
    telemetry: TelemetrySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BudgetSection {
    max_adapter_calls: Option<usize>,
    max_decomposition_depth: Option<usize>,
    max_leaves: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SignatureSection {
    verifying_contract: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TelemetrySection {
    log_level: Option<String>,
    json_logs: Option<bool>,
}

impl RegistryConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let defaults = Self::default();
        let owner = match file.owner {
            Some(raw) => parse_address_field("owner", &raw)?,
            None => defaults.owner,
        };
        let verifying_contract = match file.signature.verifying_contract {
            Some(raw) => parse_address_field("signature.verifying_contract", &raw)?,
            None => defaults.signature.verifying_contract,
        };

        let b = file.budget;
        let budget = QueryBudget {
            max_adapter_calls: b
                .max_adapter_calls
                .unwrap_or(defaults.budget.max_adapter_calls),
            max_decomposition_depth: b
                .max_decomposition_depth
                .unwrap_or(defaults.budget.max_decomposition_depth),
            max_leaves: b.max_leaves.unwrap_or(defaults.budget.max_leaves),
        };

        let t = file.telemetry;
        let telemetry = TelemetryConfig {
            log_level: t.log_level.unwrap_or(defaults.telemetry.log_level),
            json_logs: t.json_logs.unwrap_or(defaults.telemetry.json_logs),
        };

        Ok(Self {
            owner,
            budget,
            signature: SignatureConfig { verifying_contract },
            telemetry,
            seed: file.seed,
        })
    }

    /// Configuration from the file named by `AR_CONFIG` (if set), with
    /// environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides looked up by variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("AR_OWNER") {
            self.owner = parse_address_field("AR_OWNER", &raw)?;
        }
        if let Some(raw) = lookup("AR_VERIFYING_CONTRACT") {
            self.signature.verifying_contract =
                parse_address_field("AR_VERIFYING_CONTRACT", &raw)?;
        }
        if let Some(raw) = lookup("AR_MAX_ADAPTER_CALLS") {
            self.budget.max_adapter_calls = parse_value("AR_MAX_ADAPTER_CALLS", &raw)?;
        }
        if let Some(raw) = lookup("AR_MAX_DECOMPOSITION_DEPTH") {
            self.budget.max_decomposition_depth =
                parse_value("AR_MAX_DECOMPOSITION_DEPTH", &raw)?;
        }
        if let Some(raw) = lookup("AR_MAX_LEAVES") {
            self.budget.max_leaves = parse_value("AR_MAX_LEAVES", &raw)?;
        }
        if let Some(level) = lookup("AR_LOG_LEVEL").or_else(|| lookup("RUST_LOG")) {
            self.telemetry.log_level = level;
        }
        if let Some(raw) = lookup("AR_JSON_LOGS") {
            self.telemetry.json_logs = parse_flag("AR_JSON_LOGS", &raw)?;
        }
        if let Some(path) = lookup("AR_SEED_FILE") {
            self.seed = Some(PathBuf::from(path));
        }
        Ok(())
    }

    /// Reject configurations the registries cannot start with.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - the owner is the zero address
    /// - any budget limit is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_zero_address(&self.owner) {
            return Err(ConfigError::MissingOwner);
        }
        if self.budget.max_adapter_calls == 0 {
            return Err(ConfigError::ZeroBudget("max_adapter_calls"));
        }
        if self.budget.max_decomposition_depth == 0 {
            return Err(ConfigError::ZeroBudget("max_decomposition_depth"));
        }
        if self.budget.max_leaves == 0 {
            return Err(ConfigError::ZeroBudget("max_leaves"));
        }
        Ok(())
    }
}

fn parse_address_field(field: &'static str, raw: &str) -> Result<Address, ConfigError> {
    parse_address(raw).map_err(|reason| ConfigError::InvalidAddress { field, reason })
}

fn parse_value<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field,
        value: raw.to_string(),
    })
}

/// `true`/`false` in any case, or `1`/`0`.
fn parse_flag(field: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        other => parse_value(field, &other.to_ascii_lowercase()).map_err(|_| {
            ConfigError::InvalidValue {
                field,
                value: raw.to_string(),
            }
        }),
    }
}
