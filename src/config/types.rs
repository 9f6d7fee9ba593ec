use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::devices::Device;
use crate::navigation::DEFAULT_BUS_CAPACITY;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub invitation: InvitationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub account: AccountConfig,
    /// Devices paired at startup.
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// How far a slow subscriber may fall behind (default: 64).
    #[serde(default = "default_bus_capacity")]
    pub bus_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvitationConfig {
    /// Limit for one invitation-code check in seconds (default: 10).
    #[serde(default = "default_invitation_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Local account backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default)]
    pub signed_in_user: Option<String>,
    #[serde(default = "default_network_available")]
    pub network_available: bool,
    #[serde(default)]
    pub invitation_codes: Vec<String>,
}

fn default_bus_capacity() -> usize {
    DEFAULT_BUS_CAPACITY
}

fn default_invitation_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_network_available() -> bool {
    true
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            bus_capacity: default_bus_capacity(),
        }
    }
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_invitation_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            signed_in_user: None,
            network_available: default_network_available(),
            invitation_codes: Vec::new(),
        }
    }
}
