mod common;

use std::path::PathBuf;

use clap::Parser;
use common::TempDir;
use httpfs::config::{Cli, Config, ConfigError};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.listen_addr(), "0.0.0.0:8080");
    assert_eq!(cfg.root_dir, std::env::current_dir().unwrap());
    assert!(!cfg.verbose);
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml_str("port: 3000\nverbose: true\n").unwrap();

    assert_eq!(cfg.port, 3000);
    assert!(cfg.verbose);
    assert_eq!(cfg.host, "0.0.0.0");
}

#[test]
fn test_config_invalid_yaml() {
    assert!(Config::from_yaml_str("port: not-a-number").is_err());
    assert!(Config::from_yaml_str("port: 70000").is_err());
}

#[test]
fn test_config_load_from_file() {
    let dir = TempDir::new("config-file");
    let path = dir.write("httpfs.yaml", "port: 9001\nroot_dir: /srv/files\n");

    let cfg = Config::load(&path).unwrap();

    assert_eq!(cfg.port, 9001);
    assert_eq!(cfg.root_dir, PathBuf::from("/srv/files"));
}

#[test]
fn test_cli_flags() {
    let cli = Cli::try_parse_from(["httpfs", "-v", "-p", "9000", "-d", "/tmp/served"]).unwrap();
    let cfg = cli.into_config().unwrap();

    assert!(cfg.verbose);
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.root_dir, PathBuf::from("/tmp/served"));
}

#[test]
fn test_cli_overrides_config_file() {
    let dir = TempDir::new("config-override");
    let path = dir.write("httpfs.yaml", "port: 9001\nverbose: true\n");

    let cli = Cli::try_parse_from(["httpfs", "-c", path.to_str().unwrap(), "-p", "9002"]).unwrap();
    let cfg = cli.into_config().unwrap();

    assert_eq!(cfg.port, 9002);
    assert!(cfg.verbose);
}

#[test]
fn test_cli_rejects_out_of_range_port() {
    assert!(Cli::try_parse_from(["httpfs", "-p", "70000"]).is_err());
    assert!(Cli::try_parse_from(["httpfs", "-p", "-1"]).is_err());
}

#[test]
fn test_cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["httpfs", "--bogus"]).is_err());
}

#[test]
fn test_well_known_port() {
    let mut cfg = Config::default();

    cfg.port = 22;
    assert!(cfg.is_well_known_port());
    cfg.port = 80;
    assert!(!cfg.is_well_known_port());
    cfg.port = 1024;
    assert!(!cfg.is_well_known_port());
}

#[test]
fn test_validate_accepts_directory() {
    let dir = TempDir::new("config-valid");
    let cfg = Config {
        root_dir: dir.path().to_path_buf(),
        ..Config::default()
    };

    assert!(cfg.validate().is_ok());
}

#[test]
fn test_validate_rejects_missing_or_file() {
    let dir = TempDir::new("config-invalid");
    let file = dir.write("plain.txt", "x");

    let cfg = Config {
        root_dir: dir.path().join("missing"),
        ..Config::default()
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::NotADirectory(_))));

    let cfg = Config {
        root_dir: file,
        ..Config::default()
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::NotADirectory(_))));
}
