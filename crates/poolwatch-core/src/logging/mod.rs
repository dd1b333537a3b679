use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional verbose mode.
///
/// When `verbose` is false (the default), only error-level events are
/// emitted so stdout stays clean for dashboard output. When `verbose` is
/// true, info-level and above events are emitted as JSON on stderr.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "error" };

    let mut filter = EnvFilter::from_default_env();
    for target in ["poolwatch", "poolwatch_core"] {
        filter = filter.add_directive(
            format!("{target}={level}")
                .parse()
                .expect("Invalid log directive"),
        );
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
