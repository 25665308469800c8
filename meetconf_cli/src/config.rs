use std::{collections::HashMap, path::{Path, PathBuf}};

use meetconf_app_backend::assign::ClassBlockLimits;
use meetconf_entities::prelude::DEFAULT_BLOCK_COUNT;

pub const CONFIG_ENV_VAR: &str = "MEETCONF_CONFIG";

#[derive(Debug, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub block_count: usize,
    pub output_path: String,
    pub logging_config: String,
    /// Classes that are only offered in the first `n` blocks.
    pub class_block_limits: HashMap<String, usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            block_count: DEFAULT_BLOCK_COUNT,
            output_path: "meetconf_assignments_output.csv".into(),
            logging_config: "info".into(),
            class_block_limits: HashMap::new(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(config: &str) -> Result<Config, anyhow::Error> {
        Ok(serde_yaml::from_str::<Config>(config)?)
    }

    pub fn block_limits(&self) -> ClassBlockLimits {
        ClassBlockLimits::from(self.class_block_limits.clone())
    }
}

pub(crate) fn read_config_inner(config_path: &Path) -> Result<Config, anyhow::Error> {
    let config = std::fs::read_to_string(config_path)?;
    Config::from_yaml_str(&config)
}

/// Reads the config from `config_path`, or from the file named by
/// `MEETCONF_CONFIG`. Without either the defaults are used.
pub fn read_config(config_path: Option<&Path>) -> Config {
    let config_path = config_path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    let Some(config_path) = config_path else {
        return Config::default();
    };

    match read_config_inner(&config_path) {
        Ok(config) => config,
        Err(e) => {
            //Print to stderr, since logging is set up in the config
            eprintln!("Warning: Failed to read config: {}", e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() -> Result<(), anyhow::Error> {
        let config = Config::from_yaml_str("output_path: out.csv\n")?;

        assert_eq!(config.output_path, "out.csv");
        assert_eq!(config.block_count, 3);
        assert_eq!(config.logging_config, "info");
        assert!(config.class_block_limits.is_empty());
        Ok(())
    }

    #[test]
    fn test_block_limits_are_read() -> Result<(), anyhow::Error> {
        let config = Config::from_yaml_str(
            "block_count: 3
class_block_limits:
  Zumba / Dance Dance Revolution: 2
",
        )?;

        let limits = config.block_limits();
        assert_eq!(limits.blocks_for("Zumba / Dance Dance Revolution", 3), 2);
        assert_eq!(limits.blocks_for("Chess", 3), 3);
        Ok(())
    }

    #[test]
    fn test_unreadable_config_falls_back_to_default() {
        let config = read_config(Some(Path::new("/nonexistent/meetconf.yaml")));

        assert_eq!(config, Config::default());
    }
}
