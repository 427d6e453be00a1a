use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{CategoryStore, SetConfigEntry, SetsConfig};
use crate::error::{DocsetError, Result};
use crate::format::{
    validate_indentation, validate_width, FormatOptions, QuoteStyle, DEFAULT_INDENTATION,
    DEFAULT_WIDTH,
};

const CONFIG_FILE: &str = "config.toml";

const SETS_PREFIX: &str = "sets.";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# docset configuration file
# Location: ~/.docset/config.toml

[format]
# Maximum line width of the wrapped enumeration
# Default: 72
width = 72

# Number of tabs inserted after every line break
# Default: 5
indentation = 5

# Quoting of each category name: "plain" ('name') or "rst" (``'name'``)
# Default: "plain"
quote = "plain"

# Custom category sets. A set named like a builtin replaces it.
# Example:
# [sets.flavors]
# description = "Quark flavors"
# members = ["up", "down", "strange", "charm", "bottom", "top"]
[sets]
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub format: FormatConfig,

    #[serde(default)]
    pub sets: SetsConfig,
}

/// Formatting defaults, stored unvalidated so a bad file still loads for `config set`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatConfig {
    #[serde(default = "default_width")]
    pub width: i64,

    #[serde(default = "default_indentation")]
    pub indentation: i64,

    #[serde(default)]
    pub quote: QuoteStyle,
}

fn default_width() -> i64 {
    DEFAULT_WIDTH as i64
}

fn default_indentation() -> i64 {
    DEFAULT_INDENTATION as i64
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            indentation: default_indentation(),
            quote: QuoteStyle::default(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| DocsetError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), sets = config.sets.sets.len(), "loaded config");
        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| DocsetError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "format.width" => Some(self.format.width.to_string()),
            "format.indentation" => Some(self.format.indentation.to_string()),
            "format.quote" => Some(self.format.quote.to_string()),
            _ => {
                let name = key.strip_prefix(SETS_PREFIX)?;
                self.sets
                    .sets
                    .get(name)
                    .map(|entry| format_string_list(&entry.members))
            }
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "format.width" => {
                let width = parse_int(key, value)?;
                validate_width(width)?;
                self.format.width = width;
                Ok(())
            }
            "format.indentation" => {
                let indentation = parse_int(key, value)?;
                validate_indentation(indentation)?;
                self.format.indentation = indentation;
                Ok(())
            }
            "format.quote" => {
                self.format.quote = value.parse()?;
                Ok(())
            }
            _ => match key.strip_prefix(SETS_PREFIX) {
                Some(name) if !name.is_empty() => {
                    let members = parse_string_list(value)?;
                    let entry = self
                        .sets
                        .sets
                        .entry(name.to_string())
                        .or_insert_with(|| SetConfigEntry {
                            description: String::new(),
                            members: Vec::new(),
                        });
                    entry.members = members;
                    Ok(())
                }
                _ => Err(DocsetError::ConfigKeyNotFound {
                    key: key.to_string(),
                }),
            },
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            ("format.width".to_string(), self.format.width.to_string()),
            (
                "format.indentation".to_string(),
                self.format.indentation.to_string(),
            ),
            ("format.quote".to_string(), self.format.quote.to_string()),
        ];
        for (name, entry) in &self.sets.sets {
            entries.push((
                format!("{}{}", SETS_PREFIX, name),
                format_string_list(&entry.members),
            ));
        }
        entries
    }

    /// Validated formatting options
    pub fn format_options(&self) -> Result<FormatOptions> {
        Ok(FormatOptions::new(self.format.width, self.format.indentation)?
            .with_quote(self.format.quote))
    }

    /// Category store with this config's sets merged over the builtins
    pub fn category_store(&self) -> CategoryStore {
        CategoryStore::builtin().with_config(&self.sets)
    }
}

fn parse_int(key: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| DocsetError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Parse a JSON array (`["a", "b"]`) or a comma-separated list (`a,b`)
fn parse_string_list(value: &str) -> Result<Vec<String>> {
    let trimmed = value.trim();

    if trimmed.starts_with('[') {
        let items: Vec<String> = serde_json::from_str(trimmed)?;
        return Ok(items.into_iter().filter(|s| !s.is_empty()).collect());
    }

    let items: Vec<String> = trimmed
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Ok(items)
}

/// JSON array text, accepted back by `parse_string_list`
fn format_string_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_string_list_comma() {
        let result = parse_string_list("up, down,strange").unwrap();
        assert_eq!(result, vec!["up", "down", "strange"]);
    }

    #[test]
    fn test_parse_string_list_json() {
        let result = parse_string_list(r#"["noble gas", "halogen"]"#).unwrap();
        assert_eq!(result, vec!["noble gas", "halogen"]);
    }

    #[test]
    fn test_parse_string_list_json_keeps_inner_commas() {
        let result = parse_string_list(r#"["noble gas, heavy", "halogen"]"#).unwrap();
        assert_eq!(result, vec!["noble gas, heavy", "halogen"]);
    }

    #[test]
    fn test_parse_string_list_bad_json() {
        assert!(matches!(
            parse_string_list(r#"["unterminated"#),
            Err(DocsetError::Json(_))
        ));
    }

    #[test]
    fn test_sets_get_output_round_trips() {
        let mut config = Config::default();
        config
            .set("sets.q", r#"["it\"s", "a, b", "plain"]"#)
            .unwrap();
        let first = config.get("sets.q").unwrap();
        assert_eq!(first, r#"["it\"s","a, b","plain"]"#);

        config.set("sets.q", &first).unwrap();
        assert_eq!(config.get("sets.q").unwrap(), first);
        assert_eq!(
            config.sets.sets["q"].members,
            vec!["it\"s", "a, b", "plain"]
        );
    }

    #[test]
    fn test_parse_string_list_empty() {
        let result = parse_string_list("[]").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();

        config.set("format.width", "60").unwrap();
        config.set("format.quote", "rst").unwrap();
        assert_eq!(config.get("format.width").unwrap(), "60");
        assert_eq!(config.get("format.quote").unwrap(), "rst");

        config.set("sets.flavors", "up,down").unwrap();
        assert!(config.get("sets.flavors").unwrap().contains("down"));
        assert!(config.get("sets.missing").is_none());
        assert!(config.get("nope").is_none());
    }

    #[test]
    fn test_config_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("format.indentation", "-3"),
            Err(DocsetError::NegativeIndentation { value: -3 })
        ));
        assert!(matches!(
            config.set("format.width", "wide"),
            Err(DocsetError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("unknown.key", "1"),
            Err(DocsetError::ConfigKeyNotFound { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format_options().unwrap(), FormatOptions::default());
    }

    #[test]
    fn test_init_template_parses() {
        let temp = TempDir::new().unwrap();
        let path = Config::init(temp.path()).unwrap();
        assert!(path.exists());

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.format.width, 72);
        assert_eq!(config.format.indentation, 5);
        assert_eq!(config.format.quote, QuoteStyle::Plain);
        assert!(config.sets.sets.is_empty());
    }

    #[test]
    fn test_save_and_load_sets() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("sets.flavors", r#"["up", "down"]"#).unwrap();
        config.set("format.quote", "rst").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = Config::load(temp.path()).unwrap();
        assert_eq!(loaded, config);

        let store = loaded.category_store();
        assert_eq!(store.get("flavors").unwrap().members.len(), 2);
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        fs::write(Config::path(temp.path()), "[format]\nwidth = \"wide\"\n").unwrap();
        assert!(matches!(
            Config::load(temp.path()),
            Err(DocsetError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_format_options_validates_loaded_values() {
        let mut config = Config::default();
        config.format.width = 0;
        assert!(matches!(
            config.format_options(),
            Err(DocsetError::InvalidWidth { value: 0 })
        ));
    }
}
