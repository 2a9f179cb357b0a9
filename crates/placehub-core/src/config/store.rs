//! Item store configuration.

use serde::{Deserialize, Serialize};

/// Which item store backend to talk to and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store backend: `"memory"` or `"http"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Base URL of the HTTP engine, e.g. `http://localhost:8080/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// The container whose items are listed and placed.
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// JSON file with an array of items preloaded into the memory backend.
    #[serde(default)]
    pub seed_file: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            base_url: default_base_url(),
            container_id: default_container_id(),
            seed_file: None,
        }
    }
}

fn default_backend() -> String {
    "memory".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_container_id() -> String {
    "default".to_string()
}
