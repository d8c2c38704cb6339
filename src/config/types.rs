//! The configuration structs used to build the AppConfig, and their impls.
use serde::Deserialize;
use strum_macros::AsRefStr;

use crate::config::ConfigError;
use crate::web::STATIC_PATH;

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub static_config: StaticConfig,
    pub activity_config: ActivityConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

/// Where the front-end bundle lives on disk and which document is its entry point.
#[derive(Deserialize, Clone, Debug)]
pub struct StaticConfig {
    pub dir: String,
    pub entry: String,
}

#[derive(Deserialize, Clone, Copy, Debug, Default)]
pub struct ActivityConfig {
    /// Reject signups once an activity reached `max_participants`.
    #[serde(default)]
    pub enforce_capacity: bool,
}

// ###################################
// ->   IMPLs
// ###################################
impl StaticConfig {
    /// The URL the root path redirects to.
    pub fn entry_url(&self) -> String {
        format!("{STATIC_PATH}/{}", self.entry.trim_start_matches('/'))
    }
}

// ###################################
// ->   TRY FROMs
// ###################################
impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail(value)),
        }
    }
}
