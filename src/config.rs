use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::sync::store::DEFAULT_SONG_ID;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MEDIA_DIR: &str = "media/videos";

#[derive(Deserialize, Default, Debug)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub root: Option<PathBuf>,
    pub song_id: Option<String>,
    /// Expected media directory, relative to the serving root.
    pub media_dir: Option<PathBuf>,
    pub localhost: Option<bool>,
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub root: PathBuf,
    pub song_id: String,
    pub media_dir: PathBuf,
    pub localhost: bool,
}

impl Config {
    pub fn resolve(file: Option<FileConfig>, args: &crate::cli::Args) -> Self {
        let file = file.unwrap_or_default();
        Config {
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            root: args.root.clone().or(file.root).unwrap_or_else(|| PathBuf::from(".")),
            song_id: args
                .song_id
                .clone()
                .or(file.song_id)
                .unwrap_or_else(|| DEFAULT_SONG_ID.to_string()),
            media_dir: file.media_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR)),
            localhost: args.localhost || file.localhost.unwrap_or(false),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        let ip = if self.localhost {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        };
        SocketAddr::new(ip, self.port)
    }

    /// Media directory as seen from the process, i.e. joined onto the serving root.
    pub fn media_path(&self) -> PathBuf {
        self.root.join(&self.media_dir)
    }
}

pub fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let cwd_config = PathBuf::from("showsync.toml");
    if cwd_config.exists() {
        return Some(cwd_config);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("showsync").join("config.toml");
        if xdg_config.exists() {
            return Some(xdg_config);
        }
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}
