use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "showsync",
    about = "Serve a show's viewer pages and media, plus a shared start/stop clock viewers poll",
    long_about = None,
    version,
)]
pub struct Args {
    /// HTTP port to listen on [default: 8000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory to serve files from [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Song identifier reported in the sync status [default: 15A01]
    #[arg(long)]
    pub song_id: Option<String>,

    /// Path to TOML config file (overrides default search: ./showsync.toml, ~/.config/showsync/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces (0.0.0.0)
    #[arg(long)]
    pub localhost: bool,
}
