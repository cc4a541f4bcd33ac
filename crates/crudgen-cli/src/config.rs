//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! core crate only ever sees the pieces it needs (`LayoutPaths`,
//! `EnumRuleMatching`).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `CRUDGEN_<SECTION>__<KEY>`
//! 3. Local `.crudgen.toml` in the working directory
//! 4. `--config FILE`, or the global config file
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crudgen_core::domain::{EnumRuleMatching, LayoutPaths};

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".crudgen.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CRUDGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where artifacts live, relative to the project root.
    ///
    /// The artisan backend only works with the default `models_dir`,
    /// `requests_dir` and `migrations_dir`; `crud` refuses to run otherwise.
    pub paths: LayoutPaths,
    /// Blank artifact creation.
    pub scaffold: ScaffoldConfig,
    /// Validation rule derivation.
    pub rules: RulesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub backend: ScaffolderBackend,
    pub php_binary: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            backend: ScaffolderBackend::Artisan,
            php_binary: "php".into(),
        }
    }
}

/// Which adapter creates blank entity, schema and request files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScaffolderBackend {
    /// `php artisan make:*` in the project root.
    #[default]
    Artisan,
    /// Built-in stubs, no PHP required.
    Stub,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub enum_matching: EnumRuleMatching,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `config_file` is the path given via `--config`; when present it must
    /// exist and replaces the global file.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            config_file,
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
        )
    }

    fn load_from(
        config_file: Option<&PathBuf>,
        global: Option<&Path>,
        local: &Path,
    ) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&AppConfig::default())
            .context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        builder = match (config_file, global) {
            (Some(path), _) => builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            ),
            (None, Some(path)) => builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            ),
            (None, None) => builder,
        };

        let config = builder
            .add_source(
                File::from(local)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "crudgen", "crudgen")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// The file `init` writes and `config path` reports.
    pub fn config_path(local: bool) -> PathBuf {
        if local {
            return PathBuf::from(LOCAL_CONFIG_FILE);
        }
        Self::global_config_path().unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up a dotted key such as `scaffold.backend`.
    pub fn get(&self, key: &str) -> Option<String> {
        let tree = serde_json::to_value(self).ok()?;
        let value = key
            .split('.')
            .try_fold(&tree, |node, segment| node.get(segment))?;

        Some(match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
