use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `warn` or `dnsprobe=debug`.
    ///
    /// Unset means `RUST_LOG` decides, then `warn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}
