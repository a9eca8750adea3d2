//! treeline — directory tree reporter.
//!
//! Thin binary entry point. All logic lives in the `treeline-core`
//! and `treeline-cli` crates.

fn main() -> anyhow::Result<()> {
    // Initialise structured logging. The report itself goes to stdout, so
    // diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("treeline starting");

    treeline_cli::run()
}
