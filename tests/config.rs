use std::path::PathBuf;
use showsync::cli::Args;
use showsync::config::{load_config, Config, ConfigError, FileConfig};

fn make_args(port: Option<u16>, root: Option<PathBuf>, song_id: Option<String>) -> Args {
    Args {
        port,
        root,
        song_id,
        config: None,
        localhost: false,
    }
}

#[test]
fn test_defaults_when_nothing_set() {
    let config = Config::resolve(None, &make_args(None, None, None));
    assert_eq!(config.port, 8000);
    assert_eq!(config.root, PathBuf::from("."));
    assert_eq!(config.song_id, "15A01");
    assert_eq!(config.media_dir, PathBuf::from("media/videos"));
    assert!(!config.localhost);
}

#[test]
fn test_cli_flag_overrides_default() {
    let config = Config::resolve(None, &make_args(Some(9000), None, None));
    assert_eq!(config.port, 9000);
}

#[test]
fn test_toml_overrides_default() {
    let file = FileConfig {
        port: Some(7777),
        song_id: Some("22B07".to_string()),
        ..FileConfig::default()
    };
    let config = Config::resolve(Some(file), &make_args(None, None, None));
    assert_eq!(config.port, 7777);
    assert_eq!(config.song_id, "22B07");
}

#[test]
fn test_cli_overrides_toml() {
    let file = FileConfig {
        port: Some(7777),
        root: Some(PathBuf::from("/srv/from-file")),
        ..FileConfig::default()
    };
    let args = make_args(Some(9000), Some(PathBuf::from("/srv/from-cli")), None);
    let config = Config::resolve(Some(file), &args);
    assert_eq!(config.port, 9000); // CLI wins
    assert_eq!(config.root, PathBuf::from("/srv/from-cli"));
}

#[test]
fn test_media_path_is_under_root() {
    let file = FileConfig { media_dir: Some(PathBuf::from("clips")), ..FileConfig::default() };
    let config = Config::resolve(Some(file), &make_args(None, Some(PathBuf::from("/show")), None));
    assert_eq!(config.media_path(), PathBuf::from("/show/clips"));
}

#[test]
fn test_bind_addr_follows_localhost_flag() {
    let mut args = make_args(Some(8123), None, None);
    assert_eq!(Config::resolve(None, &args).bind_addr().to_string(), "0.0.0.0:8123");
    args.localhost = true;
    assert_eq!(Config::resolve(None, &args).bind_addr().to_string(), "127.0.0.1:8123");
}

#[test]
fn test_toml_parse() {
    let toml_str = "port = 9000\nsong_id = \"15A02\"\nmedia_dir = \"media/clips\"\n";
    let parsed: FileConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(parsed.port, Some(9000));
    assert_eq!(parsed.song_id.as_deref(), Some("15A02"));
    assert_eq!(parsed.media_dir, Some(PathBuf::from("media/clips")));
}

#[test]
fn test_toml_unknown_fields_ignored() {
    // Future keys must not break parsing
    let toml_str = "port = 9000\nunknown_future_key = true\n";
    let parsed: Result<FileConfig, _> = toml::from_str(toml_str);
    assert!(parsed.is_ok());
}

#[test]
fn test_load_config_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("showsync.toml");
    std::fs::write(&path, "port = \"not a number\"\n").unwrap();
    assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_config_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(load_config(&path), Err(ConfigError::Io(_))));
}
