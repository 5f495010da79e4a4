use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// `CHALLENGE_LOG` takes EnvFilter syntax; without it `default_level` from the
/// config applies. An unparsable config level falls back to `warn`.
pub fn init(default_level: &str) {
    let env_filter = EnvFilter::try_from_env("CHALLENGE_LOG")
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    if subscriber.try_init().is_err() {
        return;
    }

    tracing::debug!("tracing initialized");
}
