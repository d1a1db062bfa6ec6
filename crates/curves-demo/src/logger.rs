use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cfg!(debug_assertions) { "debug" } else { "info" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // closing spans report their busy time, that's where the LUT timings show up
        .with_span_events(FmtSpan::CLOSE)
        .init();

    std::panic::set_hook(Box::new(tracing_panic::panic_hook));
}
