use std::sync::Arc;

use clap::Parser;
use pw_core::{DocumentExtractor, FetchConfig};
use pw_extract::{NoopExtractor, PdfExtractor};
use pw_fetchers::{ApiFetcher, FetchPipeline, RssFetcher};
use pw_storage::JsonFileStorage;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the fetch pipeline once and write the output file
    Fetch {
        /// Where to write the ranked articles
        #[arg(long, default_value = JsonFileStorage::DEFAULT_PATH)]
        output: String,
        /// How many top-ranked articles to keep
        #[arg(long, default_value_t = 3)]
        top: usize,
        /// Skip PDF download and text extraction
        #[arg(long)]
        skip_pdf: bool,
    },
    /// Print the configured keywords and feed endpoints
    Sources,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            output,
            top,
            skip_pdf,
        } => {
            let config = FetchConfig::default();
            let extractor: Arc<dyn DocumentExtractor> = if skip_pdf {
                Arc::new(NoopExtractor)
            } else {
                Arc::new(PdfExtractor::new())
            };
            info!("📖 Document extractor: {}", extractor.name());

            let primary = ApiFetcher::new(config.clone(), extractor.clone());
            let fallback = RssFetcher::new(config, extractor);
            let storage = JsonFileStorage::new(&output);
            let pipeline = FetchPipeline::new(
                Box::new(primary),
                Box::new(fallback),
                Box::new(storage),
            )
            .with_top_n(top);

            pipeline.run().await?;
        }
        Commands::Sources => {
            let config = FetchConfig::default();
            println!("Keywords ({}):", config.keywords.len());
            for keyword in &config.keywords {
                println!("  {}", keyword);
            }
            println!("Feeds ({}):", config.feeds.len());
            for feed in &config.feeds {
                println!("  {}", feed);
            }
        }
    }

    Ok(())
}
