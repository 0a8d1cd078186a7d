//! Configuration management for fieldcheck.
//!
//! Config files are markdown with YAML frontmatter. Both the global file
//! (`~/.config/fieldcheck/config.md`) and the project file
//! (`.fieldcheck/config.md`) are optional.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::*;

/// Project config location, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = ".fieldcheck/config.md";

/// Effective configuration after merging defaults, global and project files
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub output: OutputConfig,
    pub compare: CompareConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Global config (~/.config/fieldcheck/config.md)
    /// 3. Project config (.fieldcheck/config.md)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(PROJECT_CONFIG_PATH),
        )
    }

    /// Load merged configuration from the given global and project paths.
    /// Missing files are skipped.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        Ok(global_config.merge_with(project_config))
    }
}

/// Returns the path to the global config file at ~/.config/fieldcheck/config.md
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/fieldcheck/config.md"))
}

/// Split `---` delimited YAML frontmatter from a markdown body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub output: Option<PartialOutputConfig>,
    pub compare: Option<PartialCompareConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
    pub show_valid: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialCompareConfig {
    pub baseline: Option<bool>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_output = self.output.unwrap_or_default();
        let project_output = project.output.unwrap_or_default();
        let global_compare = self.compare.unwrap_or_default();
        let project_compare = project.compare.unwrap_or_default();

        Config {
            output: OutputConfig {
                // Project value > global value > default
                format: project_output
                    .format
                    .or(global_output.format)
                    .unwrap_or_default(),
                show_valid: project_output
                    .show_valid
                    .or(global_output.show_valid)
                    .unwrap_or_else(defaults::default_true),
            },
            compare: CompareConfig {
                baseline: project_compare
                    .baseline
                    .or(global_compare.baseline)
                    .unwrap_or_default(),
            },
        }
    }
}
