//! Setup logging subsystem.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

use super::config::{self, LogFormat};

/// Contains guards necessary for logging. Dropping it flushes and stops the
/// background writers, so hold it for as long as the process runs.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

/// Setup logging sub-system specifying the logging configuration, service (binary) name, and the
/// crates logged at the configured level. Everything else is logged at `WARN` and above.
pub fn setup(
    config: &config::Log,
    service_name: &str,
    crates_to_filter: impl AsRef<[&'static str]>,
) -> TelemetryGuard {
    let mut guards = Vec::new();

    let console_layer = if config.console.enabled {
        let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);

        let console_filter = get_envfilter(
            config.console.filtering_directive.as_ref(),
            config.console.level.into_level(),
            crates_to_filter.as_ref(),
        );
        let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.console.log_format {
            LogFormat::Default => fmt::layer()
                .with_writer(console_writer)
                .with_target(true)
                .boxed(),
            LogFormat::Json => fmt::layer()
                .json()
                .with_writer(console_writer)
                .with_current_span(true)
                .with_span_list(false)
                .boxed(),
        };
        Some(layer.with_filter(console_filter))
    } else {
        None
    };

    let initialised = tracing_subscriber::registry().with(console_layer).try_init();
    match initialised {
        Ok(()) => tracing::debug!(service = service_name, "logging subsystem initialised"),
        #[allow(clippy::print_stderr)]
        Err(error) => eprintln!("Logging subsystem was already initialised: {error}"),
    }

    TelemetryGuard {
        _log_guards: guards,
    }
}

fn get_envfilter(
    filtering_directive: Option<&String>,
    filter_log_level: tracing::Level,
    crates_to_filter: &[&'static str],
) -> EnvFilter {
    filtering_directive
        .map(|filter| {
            // Invalid directives in an explicit filter are skipped
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .parse_lossy(filter)
        })
        .unwrap_or_else(|| {
            // Construct a default target filter otherwise
            let directive = crates_to_filter
                .iter()
                .map(|krate| format!("{krate}={filter_log_level}"))
                .collect::<Vec<_>>()
                .join(",");

            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .parse_lossy(directive)
        })
}
