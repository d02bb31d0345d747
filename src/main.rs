use clap::Parser;
use token_estimator::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "token_estimator=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    if let Err(e) = token_estimator::run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
