use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use url::Url;

use crate::config::{Config, EnsureOutcome};
use crate::exporter::{export_articles, export_posts};
use crate::extractor::fetch_articles;
use crate::logger::init_logger;
use crate::reddit::RedditClient;
use crate::Command;

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 13.5; rv:116.0) Gecko/20100101 Firefox/116.0";

pub async fn run(command: Command) -> Result<()> {
    // 0) Initialize logger
    init_logger()?;
    debug!("Logger initialized");

    // 1) Ensure config exists
    let config_outcome: EnsureOutcome = Config::ensure_user_config()?;
    if config_outcome.created {
        info!(
            "Config file created at {}. Please edit it and restart the app.",
            config_outcome.path.display()
        );
        return Ok(());
    }

    let cfg = Config::get_user_config()?;
    debug!("User config loaded");

    // 2) Create HTTP client
    // Reddit requests override this with the configured API user agent
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.request_timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(BROWSER_USER_AGENT)
        .build()?;
    debug!("HTTP client created");

    // 3) Run the requested pipeline
    match command {
        Command::News { output } => run_news(&cfg, &client, output).await,
        Command::Reddit {
            subreddit,
            query,
            limit,
            output,
        } => run_reddit(&cfg, &client, &subreddit, &query, limit, output).await,
    }
}

async fn run_news(
    cfg: &Config,
    client: &reqwest::Client,
    output: Option<PathBuf>,
) -> Result<()> {
    let url = Url::parse(&cfg.news_url)
        .with_context(|| format!("news_url in the config file is not a valid URL: {}", cfg.news_url))?;

    let articles = fetch_articles(client, &url).await?;
    info!("Fetched {} articles from {}", articles.len(), url);

    for article in articles.iter().take(5) {
        info!("  {} -> {}", article.title, article.link);
    }

    let path = output.unwrap_or_else(|| PathBuf::from("news_articles.csv"));
    export_articles(&articles, &path)?;

    Ok(())
}

async fn run_reddit(
    cfg: &Config,
    client: &reqwest::Client,
    subreddit: &str,
    query: &str,
    limit: u32,
    output: Option<PathBuf>,
) -> Result<()> {
    let creds = cfg.reddit_credentials()?;

    let reddit = RedditClient::authenticate(client, &creds).await?;
    debug!("Reddit token acquired");

    let posts = reddit.search(subreddit, query, limit).await?;
    info!(
        "Search for {:?} in r/{} returned {} posts",
        query,
        subreddit,
        posts.len()
    );

    for post in posts.iter().take(5) {
        info!("  {} {} {}", post.date, post.timestamp, post.title);
    }

    let path = output
        .unwrap_or_else(|| PathBuf::from(format!("reddit_{}_{}_posts.csv", subreddit, query)));
    export_posts(&posts, &path)?;

    Ok(())
}
