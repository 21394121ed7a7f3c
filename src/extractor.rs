use crate::error::PipelineError;
use crate::models::Article;
use log::{debug, warn};
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Fetches the news page once and extracts every matching article.
///
/// A non-2xx status or transport failure aborts the run with a network
/// error; the body is never parsed on failure.
pub async fn fetch_articles(client: &Client, url: &Url) -> Result<Vec<Article>, PipelineError> {
    debug!("Requesting news page {}", url);

    let body = client
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(parse_articles(&body))
}

/// Extracts `{title, link}` from every `article.news-article` container, in
/// document order. The title is the first `h2`'s trimmed text; the link is
/// the first `a[href]`'s raw href value.
///
/// A container missing either child is skipped with a warning rather than
/// aborting the run, so malformed markup costs one row, not the whole file.
pub fn parse_articles(html: &str) -> Vec<Article> {
    let document = Html::parse_document(html);

    let container_selector = Selector::parse("article.news-article").unwrap();
    let heading_selector = Selector::parse("h2").unwrap();
    let link_selector = Selector::parse("a[href]").unwrap();

    let mut articles = Vec::new();

    for container in document.select(&container_selector) {
        let title = container
            .select(&heading_selector)
            .next()
            .map(|h| h.text().collect::<Vec<_>>().join(" ").trim().to_string());

        let link = container
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string);

        match (title, link) {
            (Some(title), Some(link)) => articles.push(Article { title, link }),
            (None, _) => {
                warn!("Skipping article node without an h2 heading");
            }
            (_, None) => {
                warn!("Skipping article node without a link");
            }
        }
    }

    debug!("Extracted {} articles", articles.len());
    articles
}
