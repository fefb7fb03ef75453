use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::ConfigError;
use crate::tree::Rank;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub lists: ListConfig,
    pub headings: HeadingConfig,
}

/// Marker lines that open and close the body of the document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub front_matter: String,
    pub page_break: String,
    pub end_document: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            front_matter: "\\tableofcontents".to_string(),
            page_break: "\\newpage".to_string(),
            end_document: "\\end{document}".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub bullet_preset: String,
    pub indent_per_level: f64,
    pub indent_unit: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            bullet_preset: "NUMBERED_DECIMAL_NESTED".to_string(),
            indent_per_level: 18.0,
            indent_unit: "PT".to_string(),
        }
    }
}

impl ListConfig {
    /// Start indentation for a list paragraph at the given nesting depth.
    pub fn indent_for_depth(&self, depth: usize) -> f64 {
        self.indent_per_level * depth as f64
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadingConfig {
    pub style_prefix: String,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            style_prefix: "HEADING_".to_string(),
        }
    }
}

impl HeadingConfig {
    /// Named paragraph style for a heading rank, e.g. `HEADING_2`.
    pub fn style_for(&self, rank: Rank) -> String {
        format!("{}{}", self.style_prefix, rank.level())
    }
}

impl Config {
    /// The defaults embedded at build time.
    pub fn compiled_default() -> Self {
        // Validated by build.rs
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::compiled_default()),
            Err(source) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Toml {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_default_matches_struct_defaults() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config =
            Config::from_toml("[lists]\nindent_per_level = 36.0\n", Path::new("t.toml")).unwrap();
        assert_eq!(config.lists.indent_per_level, 36.0);
        assert_eq!(config.lists.bullet_preset, "NUMBERED_DECIMAL_NESTED");
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = Config::from_toml("[lists\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Path::new("/nonexistent/texdocs.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn heading_style_names() {
        let headings = HeadingConfig::default();
        assert_eq!(headings.style_for(Rank::Section), "HEADING_1");
        assert_eq!(headings.style_for(Rank::Subsubsection), "HEADING_3");
        assert_eq!(ListConfig::default().indent_for_depth(2), 36.0);
    }
}
