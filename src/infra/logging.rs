//! For setting up logging.
//!
//! Logs go to stderr so stdout only carries the greeting.

use super::{config::LoggingConfig, error::Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Flushes logs upon being dropped.
#[derive(Debug)]
pub struct LogGuard {
    _guards: Vec<WorkerGuard>,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initializes logging.
///
/// `RUST_LOG` takes priority over [`LoggingConfig::level`].
/// Fails if either filter is invalid, or if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<LogGuard> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(config, rust_log.as_deref())?;

    let (non_blocking_stderr, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::registry()
        .with(build_layer(config, non_blocking_stderr))
        .with(filter)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(LogGuard {
        _guards: vec![stderr_guard],
    })
}

/// Builds the filter from `RUST_LOG` if it is set, otherwise from the configured level.
fn build_filter(config: &LoggingConfig, rust_log: Option<&str>) -> Result<EnvFilter> {
    let directives = rust_log.unwrap_or(&config.level);
    Ok(EnvFilter::try_new(directives)?)
}

/// Formats events as json or as human readable text.
fn build_layer<W>(config: &LoggingConfig, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if config.json {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
            .json()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(writer).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_filter, build_layer, init_logging};
    use crate::infra::{config::LoggingConfig, error::Error};
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::{layer::SubscriberExt, Registry};

    fn config(level: &str, json: bool) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            json,
        }
    }

    #[test]
    fn level_is_used_without_rust_log() {
        let filter = build_filter(&config("warn", false), None).unwrap();
        assert_eq!(Some(LevelFilter::WARN), filter.max_level_hint());
    }

    #[test]
    fn rust_log_takes_priority_over_level() {
        let filter = build_filter(&config("warn", false), Some("trace")).unwrap();
        assert_eq!(Some(LevelFilter::TRACE), filter.max_level_hint());
    }

    #[test]
    fn invalid_rust_log_fails() {
        let filter = build_filter(&config("warn", false), Some("foo=notalevel"));
        assert!(matches!(filter, Err(Error::Logging(_))));
    }

    #[test]
    fn invalid_level_fails() {
        let filter = build_filter(&config("foo=notalevel", false), None);
        assert!(matches!(filter, Err(Error::Logging(_))));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn log_one_event(config: &LoggingConfig) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let layer = build_layer(config, move || writer.clone());
        let subscriber = Registry::default().with(layer);
        tracing::subscriber::with_default(subscriber, || tracing::info!("greeting the world"));
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn json_logs_json() {
        let output = log_one_event(&config("info", true));
        assert!(output.starts_with('{'), "{output}");
        assert!(output.contains(r#""message":"greeting the world""#), "{output}");
    }

    #[test]
    fn plain_logs_text() {
        let output = log_one_event(&config("info", false));
        assert!(!output.starts_with('{'), "{output}");
        assert!(output.contains("greeting the world"), "{output}");
    }

    #[test]
    fn second_init_fails_instead_of_panicking() {
        let config = LoggingConfig::default();
        let _first = init_logging(&config);
        let second = init_logging(&config);
        assert!(matches!(second, Err(Error::Logging(_))));
    }
}
