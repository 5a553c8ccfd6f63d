use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use wpformal::locale::Locale;

use crate::{
    error::{CalcError, CalcResult},
    magic::{
        CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_MAX_DEPTH, DEFAULT_MAX_POSTCONDITION_LEN,
        DEFAULT_MAX_PROGRAM_LEN, ENV_CONFIG_PATH,
    },
};

/// User-tunable settings of a calculation session. Missing keys take their default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Language of derivation steps, readable conditions, and the triple.
    pub locale: Locale,
    pub max_postcondition_len: usize,
    pub max_program_len: usize,
    /// Deepest statement tree accepted by [`crate::Calculator::calculate_tree`].
    pub max_depth: usize,
    /// Fixed rendering width; the terminal width is used when unset.
    pub render_width: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            max_postcondition_len: DEFAULT_MAX_POSTCONDITION_LEN,
            max_program_len: DEFAULT_MAX_PROGRAM_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
            render_width: None,
        }
    }
}

impl CalculatorConfig {
    /// Get the default path to the calculator configuration file.
    pub fn default_path() -> PathBuf {
        // Check if the environment variable is set
        if let Ok(config_path) = std::env::var(ENV_CONFIG_PATH) {
            return config_path.into();
        }

        // Fallback to default paths based on OS
        let mut path = PathBuf::new();

        #[cfg(target_os = "windows")]
        {
            if let Ok(appdata) = std::env::var("APPDATA") {
                path.push(appdata);
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
                path.push(xdg_config_home);
            } else if let Ok(home) = std::env::var("HOME") {
                path.push(home);
                path.push(".config");
            }
        }

        path.push(CONFIG_DIR_NAME);
        path.push(CONFIG_FILE_NAME);
        path
    }

    /// Load a configuration from a TOML file.
    pub fn load_from_toml(path: &Path) -> CalcResult<Self> {
        let toml_str = std::fs::read_to_string(path)?;

        toml::from_str(&toml_str).map_err(|source| CalcError::ConfigParseError {
            source,
            file: path.display().to_string(),
        })
    }

    /// Like [`Self::load_from_toml`], but a missing file yields the default configuration.
    pub fn load_or_default(path: &Path) -> CalcResult<Self> {
        match Self::load_from_toml(path) {
            Err(CalcError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no configuration at `{}`, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save the configuration to a TOML file, creating parent directories as needed.
    pub fn save_to_toml(&self, path: &Path) -> CalcResult<()> {
        let toml_str =
            toml::to_string(self).map_err(|source| CalcError::ConfigSerializeError {
                source,
                file: path.display().to_string(),
            })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, toml_str)?;
        Ok(())
    }
}
