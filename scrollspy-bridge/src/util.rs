use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only session replies.
pub fn init_tracing() {
    // RUST_LOG=scrollspy_core=trace,scrollspy_bridge=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Route panics (including ones raised inside caller-supplied spy rules)
/// through tracing before unwinding.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = match info.payload().downcast_ref::<&str>() {
            Some(s) => (*s).to_string(),
            None => info
                .payload()
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| "<non-string panic payload>".to_string()),
        };
        let location = info
            .location()
            .map_or_else(|| "<unknown>".to_string(), |l| format!("{}:{}", l.file(), l.line()));
        let thread = std::thread::current().name().unwrap_or("<unnamed>").to_string();

        tracing::error!(%thread, %location, %payload, "scrollspy bridge panicked");
    }));
}
