use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Resolver to query, as `IP:PORT`.
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Record type used when none is given on the command line.
    #[serde(default = "default_record_type")]
    pub record_type: String,

    #[serde(default = "default_true")]
    pub recursion_desired: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            timeout_ms: default_timeout_ms(),
            record_type: default_record_type(),
            recursion_desired: default_true(),
        }
    }
}

fn default_server() -> String {
    "8.8.8.8:53".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_record_type() -> String {
    "A".to_string()
}

fn default_true() -> bool {
    true
}
