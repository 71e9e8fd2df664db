use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;
use unisym::cli::Args;

fn main() -> Result<()> {
    // Silent on the success path unless RUST_LOG opts in.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let report = unisym::generate(&args.input, &args.output)?;

    tracing::info!(
        symbols = report.symbols,
        lines = report.lines,
        output = %args.output.display(),
        "wrote symbol table fragment"
    );

    Ok(())
}
