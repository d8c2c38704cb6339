//! Tries to create an `AppConfig` from config files and the environment.
//! Layers `config/base.toml`, `config/<environment>.toml` and `APP_` prefixed environment variables
//! with `figment`.
//! Gets initialized with `OnceLock` so it only needs to get initialized once.

mod error;
mod types;

use std::{path::Path, sync::OnceLock};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use tracing::info;

// Re-export config structs
pub use error::{ConfigError, ConfigResult};
pub use types::{ActivityConfig, AppConfig, Environment, NetConfig, StaticConfig};

/// Allocates a static `OnceLock` containing `AppConfig`.
/// This ensures configuration only gets initialized the first time we call this function.
/// Every other caller gets a &'static ref to AppConfig.
/// Panics if anything goes wrong.
pub fn get_or_init_config() -> &'static AppConfig {
    static CONFIG_INIT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG_INIT.get_or_init(|| {
        info!(
            "{:<12} - Initializing the configuration",
            "get_or_init_config"
        );
        let base_path = std::env::current_dir().expect("Failed to determine the current DIR.");
        let config_dir = base_path.join("config");

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .expect("Failed to parse APP_ENVIRONMENT.");

        AppConfig::load(&config_dir, &environment)
            .unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"))
    })
}

impl AppConfig {
    /// Builds the configuration from the files found in `config_dir`.
    /// Later sources override earlier ones: base file, environment file, `APP_` env variables.
    pub fn load(config_dir: &Path, environment: &Environment) -> ConfigResult<Self> {
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let base_file = config_dir.join("base.toml");
        let env_file = config_dir.join(environment_filename);

        let config = Self::figment(base_file, env_file)
            .merge(Env::prefixed("APP_").split("__"))
            .extract()?;

        Ok(config)
    }

    fn figment(base: impl AsRef<Path>, env_file: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Toml::file(base))
            .merge(Toml::file(env_file))
    }
}
