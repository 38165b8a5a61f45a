//! Geospot command-line entry point.

use clap::Parser;
use tracing::debug;

use geospot::cli::{Cli, Commands, OutputArgs};
use geospot::client::{ClientConfig, WikiClient};
use geospot::error::GeospotError;
use geospot::output::json;
use geospot::output::markup::MarkupDocument;
use geospot::output::staticmap::{MapOptions, StaticMap};
use geospot::spot::{Spot, resolve_spots};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        match error.downcast_ref::<GeospotError>() {
            Some(geospot_error) => eprintln!("{}", geospot_error.user_message()),
            None => eprintln!("Error: {error:#}"),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = WikiClient::new(&ClientConfig::default())?;

    match cli.command {
        Commands::Json(args) => {
            let spots = resolve(&args, &client).await?;
            json::emit(&spots, args.filename.as_deref())?;
        }
        Commands::Markup(args) => {
            let spots = resolve(&args, &client).await?;
            MarkupDocument::new(spots).emit(args.filename.as_deref())?;
        }
        Commands::Map(args) => {
            let spots = resolve(&args.output, &client).await?;
            let options = MapOptions {
                map_type: args.map_type,
                size: args.size,
                path: args.path,
                region: args.region,
            };

            let map = StaticMap::from_spots(&spots, &options);
            match args.output.filename.as_deref() {
                Some(path) => map.save(&client, path).await?,
                None => println!("{}", map.url()),
            }
        }
    }

    Ok(())
}

async fn resolve(args: &OutputArgs, client: &WikiClient) -> anyhow::Result<Vec<Spot>> {
    let spots = resolve_spots(&args.wikiobj, args.language, client).await?;
    debug!("Resolved {} spots", spots.len());
    Ok(spots)
}
