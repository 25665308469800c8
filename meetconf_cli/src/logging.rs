use tracing_subscriber::EnvFilter;

/// Sets up the global subscriber. `filter` uses the `RUST_LOG` directive syntax.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid logging config '{}': {}", filter, e);
        EnvFilter::new("info")
    });

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: Logging was already initialized");
    }
}
