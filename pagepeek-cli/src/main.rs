mod arguments;

use std::time::Duration;

use anyhow::Context;
use arguments::Args;
use clap::Parser;
use pagepeek_resolver::Resolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Args = Args::parse();

    let resolver = Resolver::with_timeout(Duration::from_secs(args.timeout));
    let metadata = resolver
        .resolve(&args.url)
        .await
        .with_context(|| format!("Cannot resolve '{}'", args.url))?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&metadata)?
    } else {
        serde_json::to_string(&metadata)?
    };
    println!("{output}");

    Ok(())
}
