use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre report hooks.
///
/// Call early in main(), before any fallible operations. Safe to call
/// more than once; later installs are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global tracing subscriber.
///
/// Production (`APP_ENV=production`) emits JSON with flattened events for
/// log aggregation; development emits pretty human-readable output. The
/// `RUST_LOG` variable overrides the per-environment default filter.
/// [`tracing_error::ErrorLayer`] is attached in both modes so reports can
/// carry span traces.
///
/// Safe to call more than once; re-initialization is skipped, which is
/// common in tests.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info,tower_http=info,sea_orm=warn")
        } else {
            EnvFilter::new("trace")
        }
    });

    let base = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_error::ErrorLayer::default());

    let result = if environment.is_production() {
        base.with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(false)
                .flatten_event(true),
        )
        .try_init()
    } else {
        base.with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .pretty(),
        )
        .try_init()
    };

    if result.is_ok() {
        info!(?environment, "tracing initialized");
    } else {
        debug!("tracing already initialized, leaving the existing subscriber");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_in_development() {
        init_tracing(&Environment::Development);
    }

    #[test]
    fn initializes_in_production() {
        init_tracing(&Environment::Production);
    }

    #[test]
    fn repeat_initialization_is_a_noop() {
        init_tracing(&Environment::Development);
        init_tracing(&Environment::Development);
    }

    #[test]
    fn rust_log_overrides_the_default_filter() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            init_tracing(&Environment::Production);
        });
    }
}
