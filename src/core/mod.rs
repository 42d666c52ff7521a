pub mod config;
pub mod download;
pub mod progress;
pub mod releases;
