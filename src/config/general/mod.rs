mod log_level;

pub use log_level::LogLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// General settings that apply to every command.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: LogLevel,
}
