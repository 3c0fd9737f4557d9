use multiline_format_engine::Style;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Style id {0:?} is used more than once")]
    DuplicateStyleId(String),

    #[error("No style with id or nickname {0:?}")]
    UnknownStyle(String),
}

/// The saved list of styles, in the order they are offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub styles: Vec<Style>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            styles: vec![Style::cyan_highlight(), Style::bold()],
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        log::info!(
            "loaded {} styles from {}",
            config.styles.len(),
            config_path.display()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        self.validate()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        log::info!("saved {} styles to {}", self.styles.len(), config_path.display());
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/multiline-format");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Appends a blank style with a fresh id and returns it for editing.
    pub fn add_style(&mut self) -> &mut Style {
        let id = uuid::Uuid::new_v4().to_string();
        log::debug!("adding style {id}");
        self.styles.push(Style::empty(id));
        let last = self.styles.len() - 1;
        &mut self.styles[last]
    }

    /// Removes the style with exactly this id.
    pub fn remove_style(&mut self, id: &str) -> Result<Style, ConfigError> {
        let index = self
            .styles
            .iter()
            .position(|style| style.id == id)
            .ok_or_else(|| ConfigError::UnknownStyle(id.to_string()))?;
        Ok(self.styles.remove(index))
    }

    /// Looks a style up by id, then by nickname.
    pub fn find_style(&self, key: &str) -> Option<&Style> {
        self.styles
            .iter()
            .find(|style| style.id == key)
            .or_else(|| self.styles.iter().find(|style| style.matches(key)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for style in &self.styles {
            if !seen.insert(style.id.as_str()) {
                return Err(ConfigError::DuplicateStyleId(style.id.clone()));
            }
        }
        Ok(())
    }
}
