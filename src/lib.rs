//! Local show-sync server — serve viewer pages and media, and keep every viewer on one start/stop clock.

pub mod cli;
pub mod config;
pub mod files;
pub mod http;
pub mod sync;
