use dnsprobe_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;

    debug!(
        server = %config.client.server,
        record_type = %config.client.record_type,
        timeout_ms = config.client.timeout_ms,
        "Configuration loaded"
    );

    Ok(config)
}
