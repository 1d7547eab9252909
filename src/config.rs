use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/dungeon_chat.json";

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an AI Dungeon Master for a Dungeons and Dragons 5e campaign. \
You will need to keep track of everything in order to maintain immersion for the player. \
This means player HP, amount of gold, equipped gear, spells, etc. \
You will retrieve relevant database entries for people, places, and things throughout the game \
and update these files according to outcomes of the player's actions. \
You are to maintain realism by giving logical outcomes for player actions within the context of the game.";

/// Identifiers of the three surface elements the relay binds to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementIds {
    pub form: String,
    pub input: String,
    pub container: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "chat-form".to_string(),
            input: "chat-input".to_string(),
            container: "chat-container".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL the client resolves `/message` against.
    pub server_url: String,
    pub element_ids: ElementIds,
    /// Rows visible in the message container at once.
    pub viewport_rows: usize,

    pub listen_addr: String,
    pub llama_url: String,
    pub llama_timeout_secs: u64,
    pub temperature: f32,
    pub n_predict: u32,
    pub system_prompt: String,

    pub database_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            element_ids: ElementIds::default(),
            viewport_rows: 20,
            listen_addr: "0.0.0.0:5000".to_string(),
            llama_url: "http://127.0.0.1:8080/completion".to_string(),
            llama_timeout_secs: 120,
            temperature: 0.7,
            n_predict: 6000,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            database_path: "game.db".to_string(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("dungeon_chat_{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = load_config("definitely/not/here.json");
        assert_eq!(config.server_url, "http://127.0.0.1:5000");
        assert_eq!(config.element_ids, ElementIds::default());
        assert_eq!(config.n_predict, 6000);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let path = scratch_file("{ not json");
        let config = load_config(path.to_str().unwrap());
        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        fs::remove_file(path).ok();
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let path = scratch_file(r#"{"server_url": "http://dm.local:9000", "viewport_rows": 5}"#);
        let config = load_config(path.to_str().unwrap());
        assert_eq!(config.server_url, "http://dm.local:9000");
        assert_eq!(config.viewport_rows, 5);
        assert_eq!(config.llama_timeout_secs, 120);
        fs::remove_file(path).ok();
    }
}
