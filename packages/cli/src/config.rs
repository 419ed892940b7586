use javastub_compiler_python::Profile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "javastub.config.json";

/// javastub configuration file format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// JDK directory containing `bin/javap`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_home: Option<PathBuf>,

    /// Classpath handed to javap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_path: Option<String>,

    /// Regular expression for method names to leave out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<String>,

    /// Emission profile
    #[serde(default)]
    pub profile: Profile,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                anyhow::anyhow!("Invalid config file {}: {}", config_path.display(), e)
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}
