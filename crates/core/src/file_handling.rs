//! Loading the demo catalog and timing configuration from YAML.

use std::fs::File;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::catalog::{DemoCatalog, DemoEntry, InstallMethod};
use crate::config::{get_config_path, Timing};
use crate::error::{Error, Result};

#[derive(Deserialize, Debug)]
struct DemoFile {
    demos: Vec<DemoEntry>,
    #[serde(default)]
    install_methods: Vec<InstallMethod>,
    #[serde(default)]
    timing: Timing,
}

/// Everything a session needs: catalog content plus pacing.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub catalog: DemoCatalog,
    pub timing: Timing,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            catalog: DemoCatalog::default(),
            timing: Timing::default(),
        }
    }
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Reads a demo catalog file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file contains invalid YAML or doesn't match the expected structure
/// - The `demos` list is empty
pub fn read_demo_config(path: &str) -> Result<DemoConfig> {
    let reader = get_reader("demo catalog", path)?;

    // Not shortcut with ? so the error carries the path
    let parsed: serde_yaml::Result<DemoFile> = serde_yaml::from_reader(reader);
    let demo_file = parsed.map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "demo catalog".to_string(),
            path.to_string(),
            e,
        )
    })?;

    if demo_file.demos.is_empty() {
        return Err(Error::empty_catalog(path.to_string()));
    }

    info!(
        "Loaded {} demos and {} install methods from `{}`",
        demo_file.demos.len(),
        demo_file.install_methods.len(),
        path
    );

    Ok(DemoConfig {
        catalog: DemoCatalog::new(demo_file.demos, demo_file.install_methods)?,
        timing: demo_file.timing,
    })
}

/// Resolves and loads the configuration.
///
/// An explicitly given path must exist. When no path is given and the default
/// file is absent, the built-in catalog is used.
///
/// # Errors
///
/// Propagates any error from [`read_demo_config`].
pub fn load_demo_config(config_path_arg: &Option<String>) -> Result<DemoConfig> {
    let config_path = get_config_path(config_path_arg);
    debug!("Config path: `{}`", config_path);

    if config_path_arg.is_none() && !Path::new(&config_path).exists() {
        debug!("No catalog at default path, using built-in demos");
        return Ok(DemoConfig::default());
    }

    read_demo_config(&config_path)
}
