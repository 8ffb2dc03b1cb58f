//! # fiuba-chat Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges, and validates the client configuration: where
//! the backend lives, which chat variant to run, and where reports go.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line overrides (`--endpoint`, `--variant`, `--report-dir`)
//! 2. Project-specific `.fiuba-chat.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/fiuba-chat/config.toml`
//! 4. Default values defined in the code
//!
//! An explicit `--config FILE` replaces sources 2 and 3.
//!
//! ## Examples
//!
//! ```toml
//! [endpoint]
//! base_url = "http://127.0.0.1:5000"
//! find_chunk_path = "/find_chunk"
//! create_kg_path = "/create_kg"
//!
//! [chat]
//! variant = "guided"
//!
//! [report]
//! directory = "~/Descargas"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(&overrides)?;
//! let client = BackendClient::new(&cfg.endpoint)?;
//! ```
//!
use crate::chat::variant::Variant;
use crate::common::fs::io;
use crate::core::error::{ChatError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".fiuba-chat.toml";

/// The effective configuration after every layer has been applied.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub chat: ChatConfig,
    pub report: ReportConfig,
}

/// Location of the chunk-finding backend.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointConfig {
    /// Scheme, host and port, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
    pub find_chunk_path: String,
    pub create_kg_path: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChatConfig {
    pub variant: Variant,
}

/// Where `/report` writes transcripts.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Directory for report files (can use ~). Will be expanded.
    pub directory: String,
}

/// One TOML file as written on disk. A key left out of the file is `None`,
/// so the layer below keeps its value for it.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    endpoint: EndpointFile,
    #[serde(default)]
    chat: ChatFile,
    #[serde(default)]
    report: ReportFile,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct EndpointFile {
    base_url: Option<String>,
    find_chunk_path: Option<String>,
    create_kg_path: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ChatFile {
    variant: Option<Variant>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ReportFile {
    directory: Option<String>,
}

/// Values given on the command line. `None` leaves the file value in place.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub variant: Option<Variant>,
    pub report_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
fn default_find_chunk_path() -> String {
    "/find_chunk".to_string()
}
fn default_create_kg_path() -> String {
    "/create_kg".to_string()
}
fn default_report_dir() -> String {
    ".".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            find_chunk_path: default_find_chunk_path(),
            create_kg_path: default_create_kg_path(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            directory: default_report_dir(),
        }
    }
}

impl EndpointConfig {
    pub fn find_chunk_url(&self) -> String {
        join_url(&self.base_url, &self.find_chunk_path)
    }

    pub fn create_kg_url(&self) -> String {
        join_url(&self.base_url, &self.create_kg_path)
    }
}

impl ReportConfig {
    pub fn directory_path(&self) -> PathBuf {
        PathBuf::from(&self.directory)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Loads the effective configuration for one command invocation.
pub fn load_config(overrides: &ConfigOverrides) -> Result<Config> {
    let mut config = match &overrides.config_file {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            merge_configs(Some(load_config_from_path(path)?), None)
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config, project_config)
        }
    };
    apply_overrides(&mut config, overrides);
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("ar", "FIUBA", "fiuba-chat") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
            Ok(None)
        }
    }
}

/// Walks up from `start` looking for `.fiuba-chat.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = io::read_file_to_string(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Key by key, a value set in the project file wins over the user file, and
/// the user file wins over the built-in default.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default();
    let project = project.unwrap_or_default();

    Config {
        endpoint: EndpointConfig {
            base_url: project
                .endpoint
                .base_url
                .or(user.endpoint.base_url)
                .unwrap_or_else(default_base_url),
            find_chunk_path: project
                .endpoint
                .find_chunk_path
                .or(user.endpoint.find_chunk_path)
                .unwrap_or_else(default_find_chunk_path),
            create_kg_path: project
                .endpoint
                .create_kg_path
                .or(user.endpoint.create_kg_path)
                .unwrap_or_else(default_create_kg_path),
        },
        chat: ChatConfig {
            variant: project.chat.variant.or(user.chat.variant).unwrap_or_default(),
        },
        report: ReportConfig {
            directory: project
                .report
                .directory
                .or(user.report.directory)
                .unwrap_or_else(default_report_dir),
        },
    }
}

fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(endpoint) = &overrides.endpoint {
        config.endpoint.base_url = endpoint.clone();
    }
    if let Some(variant) = overrides.variant {
        config.chat.variant = variant;
    }
    if let Some(dir) = &overrides.report_dir {
        config.report.directory = dir.to_string_lossy().into_owned();
    }
}

fn expand_config_paths(config: &mut Config) {
    config.report.directory = shellexpand::tilde(&config.report.directory).into_owned();
    debug!("Expanded report directory: {}", config.report.directory);
}

fn validate_config(config: &Config) -> Result<()> {
    let base = &config.endpoint.base_url;
    let url = reqwest::Url::parse(base).map_err(|e| {
        anyhow!(ChatError::Config(format!(
            "Invalid endpoint base_url '{}': {}",
            base, e
        )))
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(anyhow!(ChatError::Config(format!(
            "Endpoint base_url '{}' must use http or https.",
            base
        ))));
    }
    for (name, path) in [
        ("find_chunk_path", &config.endpoint.find_chunk_path),
        ("create_kg_path", &config.endpoint.create_kg_path),
    ] {
        if !path.starts_with('/') {
            return Err(anyhow!(ChatError::Config(format!(
                "Endpoint {} '{}' must start with '/'.",
                name, path
            ))));
        }
    }
    let report_dir = config.report.directory_path();
    if report_dir.is_file() {
        return Err(anyhow!(ChatError::Config(format!(
            "Configured report directory '{}' exists but is not a directory.",
            report_dir.display()
        ))));
    }
    Ok(())
}
