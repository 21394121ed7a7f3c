mod app;
mod config;
mod error;
mod exporter;
mod extractor;
mod logger;
mod models;
mod reddit;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "clippings")]
#[command(about = "Export news headlines and subreddit search results to CSV")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape article titles and links from the configured news page
    News {
        /// Destination CSV path (default: news_articles.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Search a subreddit and export the matching posts
    Reddit {
        /// The subreddit to search in
        subreddit: String,

        /// The search query to filter posts
        query: String,

        /// Maximum number of posts to fetch
        #[arg(long, default_value_t = 100)]
        limit: u32,

        /// Destination CSV path (default: reddit_<subreddit>_<query>_posts.csv)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run(cli.command).await
}
