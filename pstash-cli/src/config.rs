use crate::constants::PSTASH_CLI;
use confy::ConfyError;
use pstash_core::rest_storage::RestStorage;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct PstashConfig {
    pub base_url: String,
    pub api_key: String,
}

impl Default for PstashConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:54321/rest/v1"),
            api_key: String::from(""),
        }
    }
}

pub fn get_storage() -> RestStorage {
    let config: Result<PstashConfig, ConfyError> = confy::load(PSTASH_CLI, None);
    match config {
        Ok(config) => RestStorage::new(config.base_url, config.api_key),
        _ => {
            eprintln!("Error: Problem loading config. Exiting...");
            std::process::exit(exitcode::CONFIG);
        }
    }
}
