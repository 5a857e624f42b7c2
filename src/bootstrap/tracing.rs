//! Tracing configuration for cuttingboard
//!
//! ## Behavior / 行为
//!
//! - **Development**: debug level, outputs to stderr
//! - **Production**: info level, outputs to stderr
//! - **Verbose acquisition**: `cb_platform=trace` so per-format probe lines appear
//! - **Environment filter**: `RUST_LOG` overrides everything above
//!
//! Output goes to stderr so the probe CLI can print snippets on stdout
//! without log lines mixed in.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool, verbose: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if verbose {
            "cb_platform=trace"
        } else if is_dev {
            "cb_platform=debug"
        } else {
            "cb_platform=info"
        }
        .to_string(),
    ]
}

/// Initialize the global tracing subscriber.
/// 初始化全局 tracing 订阅器。
///
/// Call once, before any adapter is constructed.
///
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     cuttingboard::bootstrap::tracing::init_tracing_subscriber(false)?;
///     // ...
/// }
/// ```
///
/// # Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(verbose: bool) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), verbose);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_dev() {
        let directives = build_filter_directives(true, false);
        assert_eq!(directives, vec!["debug", "cb_platform=debug"]);
    }

    #[test]
    fn test_filter_directives_prod() {
        let directives = build_filter_directives(false, false);
        assert_eq!(directives, vec!["info", "cb_platform=info"]);
    }

    #[test]
    fn test_verbose_raises_platform_to_trace() {
        for is_dev in [true, false] {
            let directives = build_filter_directives(is_dev, true);
            assert!(directives.contains(&"cb_platform=trace".to_string()));
        }
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        let directives = build_filter_directives(false, true).join(",");
        assert!(EnvFilter::try_new(directives).is_ok());
    }
}
