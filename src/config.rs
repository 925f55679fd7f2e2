//! Startup configuration.
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! YAML file (`-c`), then command-line flags and their environment variables.
//!
//! ```yaml
//! port: 8080
//! root_dir: /srv/files
//! verbose: true
//! ```

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub root_dir: PathBuf,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            root_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            verbose: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the path does not correspond to a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("cannot read directory {path}: {source}")]
    Unreadable { path: PathBuf, source: io::Error },
    #[error("cannot write to directory: {0}")]
    ReadOnly(PathBuf),
}

impl Config {
    pub fn from_yaml_str(s: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(s).context("invalid YAML configuration")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Ports below 1024 other than 80 are allowed but worth a warning.
    pub fn is_well_known_port(&self) -> bool {
        self.port < 1024 && self.port != 80
    }

    /// Checks that the root exists, is a directory, and is readable and
    /// writable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let metadata = std::fs::metadata(&self.root_dir)
            .map_err(|_| ConfigError::NotADirectory(self.root_dir.clone()))?;

        if !metadata.is_dir() {
            return Err(ConfigError::NotADirectory(self.root_dir.clone()));
        }

        std::fs::read_dir(&self.root_dir).map_err(|source| ConfigError::Unreadable {
            path: self.root_dir.clone(),
            source,
        })?;

        if metadata.permissions().readonly() {
            return Err(ConfigError::ReadOnly(self.root_dir.clone()));
        }

        Ok(())
    }
}

/// httpfs is a simple file server.
#[derive(Debug, Parser)]
#[command(name = "httpfs", version)]
pub struct Cli {
    /// Prints debugging messages
    #[arg(short, long)]
    pub verbose: bool,

    /// Port the server listens on (default 8080)
    #[arg(short, long, env = "HTTPFS_PORT")]
    pub port: Option<u16>,

    /// Directory used to read and write requested files (default: current directory)
    #[arg(short = 'd', long = "dir", env = "HTTPFS_DIR")]
    pub root_dir: Option<PathBuf>,

    /// Optional YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merges flags over the config file (if any) and the defaults.
    pub fn into_config(self) -> anyhow::Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(port) = self.port {
            cfg.port = port;
        }
        if let Some(dir) = self.root_dir {
            cfg.root_dir = dir;
        }
        cfg.verbose |= self.verbose;

        Ok(cfg)
    }
}
