use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset, empty, or unparseable.
pub const DEFAULT_LOG_DIRECTIVE: &str = "turnin=info";

/// Builds the log filter from the value of `RUST_LOG`, if any.
///
/// A usable `RUST_LOG` replaces the default entirely, so `RUST_LOG=turnin=debug`
/// really does turn on debug output.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(filter: EnvFilter) -> String {
        filter.to_string().to_lowercase()
    }

    #[test]
    fn test_default_when_unset_or_blank() {
        assert_eq!(render(log_filter(None)), DEFAULT_LOG_DIRECTIVE);
        assert_eq!(render(log_filter(Some("  "))), DEFAULT_LOG_DIRECTIVE);
    }

    #[test]
    fn test_rust_log_overrides_default_level() {
        assert_eq!(render(log_filter(Some("turnin=debug"))), "turnin=debug");
    }

    #[test]
    fn test_unparseable_rust_log_falls_back() {
        assert_eq!(
            render(log_filter(Some("turnin=loud"))),
            DEFAULT_LOG_DIRECTIVE
        );
    }
}
