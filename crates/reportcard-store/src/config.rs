//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use reportcard_core::marks::{DEFAULT_TOTAL, TOTAL_RANGE};
use reportcard_core::subject::{SubjectRegistry, DEFAULT_SUBJECTS};

/// Environment variable that overrides `store_path`.
pub const STORE_ENV_VAR: &str = "REPORTCARD_STORE";

/// Top-level reportcard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportCardConfig {
    /// Where saved report cards live.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Total marks each subject starts with.
    #[serde(default = "default_total")]
    pub default_total: u32,
    /// Subjects a new report starts with (None = built-in list).
    #[serde(default)]
    pub subjects: Option<Vec<String>>,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("report_cards.json")
}
fn default_total() -> u32 {
    DEFAULT_TOTAL
}

impl Default for ReportCardConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            default_total: default_total(),
            subjects: None,
        }
    }
}

impl ReportCardConfig {
    /// The registry a new report starts with.
    pub fn initial_registry(&self) -> SubjectRegistry {
        match &self.subjects {
            Some(names) => SubjectRegistry::from_names(names),
            None => SubjectRegistry::initial(),
        }
    }

    fn validate(&self) -> Result<()> {
        if !TOTAL_RANGE.contains(&self.default_total) {
            anyhow::bail!(
                "default_total must be between {} and {}, got {}",
                TOTAL_RANGE.start(),
                TOTAL_RANGE.end(),
                self.default_total
            );
        }
        if let Some(names) = &self.subjects {
            if SubjectRegistry::from_names(names).is_empty() {
                anyhow::bail!("subjects must name at least one subject");
            }
        }
        Ok(())
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again. A `${` without a matching `}`
/// is kept as literal text.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if !after[..end].contains("${") => {
                result.push_str(&std::env::var(&after[..end]).unwrap_or_default());
                rest = &after[end + 1..];
            }
            _ => {
                result.push_str("${");
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `reportcard.toml` in the current directory
/// 2. `~/.config/reportcard/config.toml`
///
/// `REPORTCARD_STORE` overrides the store path.
pub fn load_config_from(path: Option<&Path>) -> Result<ReportCardConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("reportcard.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("using config {}", path.display());
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ReportCardConfig::default(),
    };

    if let Ok(store) = std::env::var(STORE_ENV_VAR) {
        if !store.trim().is_empty() {
            config.store_path = PathBuf::from(store);
        }
    }

    config.store_path = PathBuf::from(resolve_env_vars(&config.store_path.to_string_lossy()));
    Ok(config)
}

/// Parse and validate a TOML config string.
pub fn parse_config(content: &str) -> Result<ReportCardConfig> {
    let config: ReportCardConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("reportcard"))
}

/// Sample config written by `reportcard init`.
pub fn sample_config() -> String {
    let subjects = DEFAULT_SUBJECTS
        .iter()
        .map(|s| format!("{s:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"# reportcard configuration

# JSON file holding every saved report card. ${{VAR}} references are expanded.
store_path = "report_cards.json"

# Total marks each subject starts with (5 to 100).
default_total = {DEFAULT_TOTAL}

# Subjects a new report card starts with.
subjects = [{subjects}]
"#
    )
}
