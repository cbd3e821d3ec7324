use crate::core::input::RawInputs;
use crate::core::presets::Preset;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "promoroi.toml";

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(path) | Self::Local(path) => write!(f, "{}", path.display()),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub inputs: RawInputs,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scenarios: Vec<Preset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub json: bool,
    pub currency_symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_roi: Option<f64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            json: false,
            currency_symbol: "$".to_string(),
            min_roi: None,
        }
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }

        return Ok(LoadedConfig {
            config: read_config(path)?,
            source: ConfigSource::Explicit(path.to_path_buf()),
        });
    }

    let local_path = cwd.join(CONFIG_FILE_NAME);
    if local_path.exists() {
        return Ok(LoadedConfig {
            config: read_config(&local_path)?,
            source: ConfigSource::Local(local_path),
        });
    }

    debug!("no {} found in {}", CONFIG_FILE_NAME, cwd.display());
    Ok(LoadedConfig {
        config: Config::default(),
        source: ConfigSource::Defaults,
    })
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let mut config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;

    for idx in 0..config.scenarios.len() {
        let name = config.scenarios[idx].name.trim().to_string();
        if name.is_empty() {
            bail!("scenario without a name in {}", path.display());
        }
        if config.scenarios[..idx].iter().any(|seen| seen.matches(&name)) {
            bail!("duplicate scenario '{}' in {}", name, path.display());
        }
        config.scenarios[idx].name = name;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn falls_back_to_defaults_without_file() {
        let dir = tempdir().expect("tempdir");
        let loaded = load_config(None, dir.path()).expect("defaults");
        assert_eq!(loaded.source, ConfigSource::Defaults);
        assert_eq!(loaded.config.inputs, RawInputs::default());
        assert_eq!(loaded.config.general.currency_symbol, "$");
        assert!(loaded.config.scenarios.is_empty());
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        let err = load_config(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("passed with --config"));
    }

    #[test]
    fn reads_local_config_with_partial_sections() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[general]
min_roi = 5.0

[inputs]
uplift_pct = "12"

[[scenarios]]
name = "holiday"
description = "q4 push"

[scenarios.inputs]
baseline_revenue = "200000"
uplift_pct = "10"
bonus_cost = "30000"
churn_pct = "0"
"#,
        )
        .expect("write config");

        let loaded = load_config(None, dir.path()).expect("local config");
        assert!(matches!(loaded.source, ConfigSource::Local(_)));
        assert_eq!(loaded.config.general.min_roi, Some(5.0));
        assert_eq!(loaded.config.general.currency_symbol, "$");
        assert_eq!(loaded.config.inputs.uplift_pct, "12");
        assert_eq!(loaded.config.inputs.baseline_revenue, "120000");
        assert_eq!(loaded.config.scenarios.len(), 1);
        assert_eq!(loaded.config.scenarios[0].inputs.bonus_cost, "30000");
    }

    #[test]
    fn rejects_unnamed_scenarios() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[[scenarios]]\ndescription = \"anon\"\n").expect("write config");
        let err = load_config(Some(&path), dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("scenario without a name"));
    }

    #[test]
    fn rejects_duplicate_scenario_names() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("dupes.toml");
        fs::write(
            &path,
            r#"
[[scenarios]]
name = "holiday"
[scenarios.inputs]
uplift_pct = "10"

[[scenarios]]
name = "Holiday "
[scenarios.inputs]
uplift_pct = "20"
"#,
        )
        .expect("write config");

        let err = load_config(Some(&path), dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate scenario 'Holiday'"));
    }

    #[test]
    fn trims_scenario_names_on_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("padded.toml");
        fs::write(&path, "[[scenarios]]\nname = \" holiday \"\n").expect("write config");

        let loaded = load_config(Some(&path), dir.path()).expect("config");
        assert_eq!(loaded.config.scenarios[0].name, "holiday");
        assert!(crate::core::presets::find_preset("holiday", &loaded.config.scenarios).is_some());
    }

    #[test]
    fn default_config_round_trips_and_refuses_overwrite() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        write_default_config(&path).expect("first write");

        let loaded = load_config(Some(&path), dir.path()).expect("reload");
        assert_eq!(loaded.config.inputs, RawInputs::default());
        assert_eq!(loaded.config.general.min_roi, None);

        let err = write_default_config(&path).unwrap_err();
        assert!(err.to_string().contains("refusing to overwrite"));
    }
}
