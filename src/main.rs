mod cli;

use clap::Parser;
use cli::Args;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "hootsuite=debug"
    } else {
        "hootsuite=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = cli::run(args).await {
        eprintln!("Error: {e}");
        if let Some(body) = e.body() {
            eprintln!("{body}");
        }
        std::process::exit(1);
    }
}
