use anyhow::Context;
use dnsprobe_domain::Config;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "warn";

/// Where the active filter directive came from.
#[derive(Debug, PartialEq, Eq)]
enum Directive<'a> {
    /// `--log-level` or `[logging] level`; must parse.
    Configured(&'a str),
    /// `RUST_LOG`
    Env(&'a str),
    Default,
}

/// `--log-level` (already folded into the config), then `[logging] level`,
/// then `RUST_LOG`, then `warn`.
fn choose_directive<'a>(configured: Option<&'a str>, env: Option<&'a str>) -> Directive<'a> {
    match (configured, env) {
        (Some(level), _) => Directive::Configured(level),
        (None, Some(env)) if !env.trim().is_empty() => Directive::Env(env),
        _ => Directive::Default,
    }
}

fn build_filter(directive: &Directive<'_>) -> anyhow::Result<EnvFilter> {
    match directive {
        Directive::Configured(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level '{}'", level)),
        Directive::Env(env) => {
            Ok(EnvFilter::try_new(env).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)))
        }
        Directive::Default => Ok(EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

/// Logs go to stderr so the report on stdout stays clean.
pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = choose_directive(config.logging.level.as_deref(), env.as_deref());
    let filter = build_filter(&directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Directive::Env(env) = directive {
        if EnvFilter::try_new(env).is_err() {
            tracing::warn!(directive = env, "Ignoring invalid RUST_LOG, using warn");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_beats_env() {
        assert_eq!(
            choose_directive(Some("debug"), Some("error")),
            Directive::Configured("debug")
        );
    }

    #[test]
    fn test_env_used_when_nothing_configured() {
        assert_eq!(choose_directive(None, Some("info")), Directive::Env("info"));
    }

    #[test]
    fn test_default_when_nothing_set() {
        assert_eq!(choose_directive(None, None), Directive::Default);
        assert_eq!(choose_directive(None, Some("  ")), Directive::Default);
    }

    #[test]
    fn test_invalid_configured_level_is_an_error() {
        let err = build_filter(&Directive::Configured("dnsprobe=loud")).unwrap_err();
        assert!(err.to_string().contains("Invalid log level 'dnsprobe=loud'"));
    }

    #[test]
    fn test_invalid_env_falls_back() {
        assert!(build_filter(&Directive::Env("dnsprobe=loud")).is_ok());
    }

    #[test]
    fn test_valid_directives_build() {
        assert!(build_filter(&Directive::Configured("dnsprobe=trace,warn")).is_ok());
        assert!(build_filter(&Directive::Default).is_ok());
    }
}
