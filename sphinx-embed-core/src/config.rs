//! Configuration parsing and management.

use crate::frontmatter::DEFAULT_PARENT;
use crate::links::{LinkProfile, RootTarget};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file name looked up when none is given
pub const DEFAULT_CONFIG_FILE: &str = "sphinx-embed.yml";

/// Sphinx output directory inside the website checkout
pub const DEFAULT_ROOT: &str = "_pages/documentation/general_docs/sphinx_docs";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Main configuration struct matching the sphinx-embed.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the generated pages; targets are relative to it
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default = "default_parent")]
    pub parent: String,

    #[serde(default)]
    pub root_target: RootTarget,

    /// Leave pages alone whose frontmatter already carries the target permalink
    #[serde(default)]
    pub skip_processed: bool,

    #[serde(default = "default_targets")]
    pub targets: Vec<TargetConfig>,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_parent() -> String {
    DEFAULT_PARENT.to_string()
}

fn default_targets() -> Vec<TargetConfig> {
    vec![
        TargetConfig::File {
            path: PathBuf::from("_modules/index.html"),
            title: "Sphinx Documentation".to_string(),
            permalink: "documentation/general_docs/stdlib_api/".to_string(),
            profile: LinkProfile::ModuleIndex,
        },
        TargetConfig::Scan {
            dir: PathBuf::from("."),
            prefix: "gem5".to_string(),
            permalink: "/documentation/general_docs/stdlib_api/".to_string(),
            profile: LinkProfile::ApiPage,
        },
    ]
}

/// One unit of work: a single well-known page or a prefix scan of a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TargetConfig {
    File {
        path: PathBuf,
        title: String,
        permalink: String,
        #[serde(default)]
        profile: LinkProfile,
    },
    Scan {
        dir: PathBuf,
        prefix: String,
        /// Permalink template; `{name}` is replaced by the file name,
        /// otherwise the name is appended
        permalink: String,
        #[serde(default = "default_scan_profile")]
        profile: LinkProfile,
    },
}

fn default_scan_profile() -> LinkProfile {
    LinkProfile::ApiPage
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            parent: default_parent(),
            root_target: RootTarget::default(),
            skip_processed: false,
            targets: default_targets(),
            config_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Parse configuration from YAML text; relative paths resolve against the
    /// working directory
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(contents)?;
        if config.parent.trim().is_empty() {
            return Err(ConfigError::MissingField("parent".to_string()));
        }
        Ok(config)
    }

    /// Serialize to YAML, as written by `init`
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Get the page root, resolved relative to config file
    pub fn root_dir(&self) -> PathBuf {
        self.resolve_path(&self.root)
    }

    /// Resolve a target path relative to the page root
    pub fn target_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root_dir().join(path)
        }
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(config_path) = &self.config_path {
            if let Some(parent) = config_path.parent() {
                parent.join(path)
            } else {
                path.to_path_buf()
            }
        } else {
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.root, PathBuf::from(DEFAULT_ROOT));
        assert_eq!(config.parent, "sphinx-docs");
        assert_eq!(config.root_target, RootTarget::Root);
        assert!(!config.skip_processed);
        assert_eq!(config.targets.len(), 2);
    }

    #[test]
    fn test_parse_targets() {
        let yaml = r#"
root: "site/api"
root_target: index-file
targets:
  - kind: file
    path: "_modules/index.html"
    title: "API"
    permalink: "api/"
  - kind: scan
    dir: "."
    prefix: "gem5"
    permalink: "/api/{name}"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.root_target, RootTarget::IndexFile);
        assert_eq!(config.parent, "sphinx-docs");
        assert_eq!(
            config.targets[0],
            TargetConfig::File {
                path: PathBuf::from("_modules/index.html"),
                title: "API".into(),
                permalink: "api/".into(),
                profile: LinkProfile::ModuleIndex,
            }
        );
        match &config.targets[1] {
            TargetConfig::Scan { prefix, profile, .. } => {
                assert_eq!(prefix, "gem5");
                assert_eq!(*profile, LinkProfile::ApiPage);
            }
            other => panic!("Expected scan target, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_parent_rejected() {
        let result = Config::from_yaml("parent: \"\"\n");
        assert!(matches!(result, Err(ConfigError::MissingField(f)) if f == "parent"));
    }

    #[test]
    fn test_paths_resolve_against_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&config_path, "root: \"out\"\ntargets: []\n").unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.root_dir(), dir.path().join("out"));
        assert_eq!(
            config.target_path(Path::new("_modules/index.html")),
            dir.path().join("out").join("_modules/index.html")
        );
        assert!(config.targets.is_empty());
    }

    #[test]
    fn test_yaml_roundtrip_of_defaults() {
        let yaml = Config::default().to_yaml().unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.targets, Config::default().targets);
    }
}
