//! Test dispatcher entry point

fn main() {
    // Structured logging to stderr so the child's stdout is untouched; quiet unless RUN_TESTS_LOG asks otherwise
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env(run_tests::cli::LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    run_tests::cli::run();
}
