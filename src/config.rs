use crate::cli::Cli;
use crate::loader::LoaderConfig;
use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;
use tracing::Level;

const TRACE_LEVELS: [&'static str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

pub static SETTINGS: Lazy<Settings> = Lazy::new(|| Settings::new());

// Settings are a singleton generated at runtime. All settings may be
// configured via environment variables. Example:
// LEADERBOARD_URL="xxx" would set leaderboard_url to the xxx value.
#[derive(Deserialize, Debug)]
pub struct Settings {
    #[serde(default = "default_trace_level")]
    trace_level: String,
    pub leaderboard_url: String,
    #[serde(default = "default_root_key")]
    pub root_key: String,
    #[serde(default = "default_status_key")]
    pub status_key: String,
    #[serde(default = "default_message_key")]
    pub message_key: String,
    #[serde(default = "default_status_ok")]
    pub status_ok: String,
    #[serde(default = "default_cache_ttl_sec")]
    pub cache_ttl_sec: u64,
    #[serde(default = "default_http_timeout_sec")]
    pub http_timeout_sec: u64,
    // Whether to bypass the response cache entirely
    #[serde(default = "default_no_cache")]
    pub no_cache: bool,
}

impl Settings {
    pub fn new() -> Self {
        let local_settings_yaml_file = ".env.local.yaml";
        let settings: Settings = match Path::new(local_settings_yaml_file).exists() {
            true => {
                println!(
                    "\n######################################\n\
                       ##   Found '.env.local.yaml' file,  ##\n\
                       ##   loading local configuration.   ##\n\
                       ######################################\n\
                    "
                );
                Figment::new()
                    .merge(Yaml::file(local_settings_yaml_file))
                    .merge(Env::raw())
                    .merge(Serialized::defaults(Cli::parse()))
                    .extract()
                    .unwrap()
            }
            false => Figment::new()
                .merge(Env::raw())
                .merge(Serialized::defaults(Cli::parse()))
                .extract()
                .unwrap(),
        };

        settings
    }

    pub fn get_trace_level(&self) -> Level {
        get_trace_level(&self.trace_level)
    }

    pub fn loader_config(&self) -> LoaderConfig {
        LoaderConfig::new(self.leaderboard_url.clone())
            .with_root(self.root_key.clone())
            .with_status_key(self.status_key.clone())
            .with_message_key(self.message_key.clone())
            .with_status_ok(self.status_ok.clone())
            .with_ttl(self.cache_ttl_sec)
    }
}

fn get_trace_level(level_str: &str) -> Level {
    match level_str {
        level if level == TRACE_LEVELS[0] => Level::TRACE,
        level if level == TRACE_LEVELS[1] => Level::DEBUG,
        level if level == TRACE_LEVELS[2] => Level::INFO,
        level if level == TRACE_LEVELS[3] => Level::WARN,
        level if level == TRACE_LEVELS[4] => Level::ERROR,
        // Default trace level
        _ => Level::INFO,
    }
}

fn default_trace_level() -> String {
    "INFO".to_string()
}

fn default_root_key() -> String {
    "leaderboard".to_string()
}

fn default_status_key() -> String {
    "status".to_string()
}

fn default_message_key() -> String {
    "message".to_string()
}

fn default_status_ok() -> String {
    "OK".to_string()
}

fn default_cache_ttl_sec() -> u64 {
    60
}

fn default_http_timeout_sec() -> u64 {
    5
}

fn default_no_cache() -> bool {
    false
}
