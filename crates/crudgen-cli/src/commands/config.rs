//! `crudgen config`: inspect the effective configuration.

use std::path::Path;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key).ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            })?;
            // Bare value so scripts can capture it.
            output.print(&value)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
                return Ok(());
            }
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            for (layer, path) in active_files(global.config.as_deref()) {
                let state = if path.exists() { "" } else { " (missing)" };
                output.item(layer, &format!("{}{state}", path.display()))?;
            }
        }
    }

    Ok(())
}

/// Files consulted by [`AppConfig::load`], lowest priority first.
fn active_files(explicit: Option<&Path>) -> Vec<(&'static str, std::path::PathBuf)> {
    let mut files = Vec::new();
    match explicit {
        Some(path) => files.push(("config", path.to_path_buf())),
        None => {
            if let Some(global) = AppConfig::global_config_path() {
                files.push(("global", global));
            }
        }
    }
    files.push(("local", Path::new(LOCAL_CONFIG_FILE).to_path_buf()));
    files
}
