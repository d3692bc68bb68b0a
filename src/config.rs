use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_download_timeout")]
    pub download_timeout: u64,
    #[serde(default = "default_cache_max_age_days")]
    pub cache_max_age_days: u64,
}

fn default_download_timeout() -> u64 {
    300
}

fn default_cache_max_age_days() -> u64 {
    14
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download_timeout: default_download_timeout(),
            cache_max_age_days: default_cache_max_age_days(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("com", "vistatools", "vista-tools") {
            let config_path = proj_dirs.config_dir().join("config.toml");

            if config_path.exists() {
                if let Ok(content) = fs::read_to_string(config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Config::default()
    }
}
