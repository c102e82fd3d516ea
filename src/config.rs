use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locsyncrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_primary_language")]
    pub primary_language: String,
    #[serde(default, alias = "secondaryLanguages")]
    pub other_languages: Vec<String>,
    #[serde(default = "default_locales_folder")]
    pub locales_folder: String,
    /// Destination root. Omitted means syncing in place into `localesFolder`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_folder: Option<String>,
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
}

fn default_primary_language() -> String {
    "en".to_string()
}

fn default_locales_folder() -> String {
    "./locales".to_string()
}

fn default_file_extension() -> String {
    ".json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_language: default_primary_language(),
            other_languages: Vec::new(),
            locales_folder: default_locales_folder(),
            output_folder: None,
            file_extension: default_file_extension(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an extension without a leading dot or for language
    /// codes that could escape the locale folder as path segments.
    pub fn validate(&self) -> Result<()> {
        if !self.file_extension.starts_with('.') || self.file_extension.len() < 2 {
            bail!(
                "Invalid 'fileExtension': \"{}\" (must start with '.')",
                self.file_extension
            );
        }

        for language in std::iter::once(&self.primary_language).chain(&self.other_languages) {
            if language.is_empty() || language.contains(['/', '\\']) {
                bail!("Invalid language code: \"{}\"", language);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config {
        other_languages: vec!["de".to_string(), "ja".to_string()],
        ..Config::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
