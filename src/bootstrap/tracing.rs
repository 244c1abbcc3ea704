//! Tracing configuration for CiviLink
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a
//! stdout `fmt` layer. `RUST_LOG` wins over everything; otherwise the
//! build profile picks the base level and the config file may add
//! directives on top.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives.
///
/// ## Behavior / 行为
/// - **Development**: debug for everything
/// - **Production**: info, with the storage layers kept at info as well
/// - `configured` directives are appended last so they take precedence
fn build_filter_directives(is_dev: bool, configured: &str) -> Vec<String> {
    let mut directives = vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if is_dev { "cl_infra=debug" } else { "cl_infra=info" }.to_string(),
    ];
    directives.extend(
        configured
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string),
    );
    directives
}

/// Initialize the global tracing subscriber.
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered or the configured
/// directives do not parse.
pub fn init_tracing_subscriber(configured_filter: &str) -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(
            build_filter_directives(is_development(), configured_filter).join(","),
        )?,
    };

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stdout);

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev = build_filter_directives(true, "");
        assert_eq!(dev, vec!["debug".to_string(), "cl_infra=debug".to_string()]);

        let prod = build_filter_directives(false, "");
        assert!(prod.contains(&"info".to_string()));
        assert!(prod.contains(&"cl_infra=info".to_string()));
    }

    #[test]
    fn test_configured_directives_are_appended() {
        let directives = build_filter_directives(false, " cl_app=trace, ,cl_core=warn");

        assert_eq!(
            &directives[2..],
            &["cl_app=trace".to_string(), "cl_core=warn".to_string()]
        );
        assert!(EnvFilter::try_new(directives.join(",")).is_ok());
    }
}
