use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

/// Targets that are too chatty at the default level. Applied only when
/// `RUST_LOG` is unset so an explicit filter always wins.
const QUIET_DIRECTIVES: &[&str] = &["sqlx::query=warn"];

/// Install a global tracing subscriber using the provided logging settings.
///
/// `RUST_LOG` directives refine the configured default level.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    let mut env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        for directive in QUIET_DIRECTIVES {
            let directive = directive.parse().map_err(|err| {
                InfraError::telemetry(format!("invalid log directive `{directive}`: {err}"))
            })?;
            env_filter = env_filter.add_directive(directive);
        }
    }

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}
