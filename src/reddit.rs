use crate::config::RedditCredentials;
use crate::error::PipelineError;
use crate::models::Post;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const SEARCH_BASE: &str = "https://oauth.reddit.com";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: ListingPost,
}

#[derive(Debug, Deserialize)]
struct ListingPost {
    title: String,
    // Reddit serves epoch seconds as a float
    created_utc: f64,
}

/// An authenticated reddit API client scoped to one run.
pub struct RedditClient<'a> {
    http: &'a Client,
    user_agent: String,
    access_token: String,
}

impl<'a> RedditClient<'a> {
    /// Exchanges the configured app credentials for an access token using
    /// the client-credentials grant.
    pub async fn authenticate(
        http: &'a Client,
        creds: &RedditCredentials,
    ) -> Result<RedditClient<'a>, PipelineError> {
        debug!("Requesting reddit access token");

        let response = http
            .post(TOKEN_URL)
            .basic_auth(&creds.client_id, Some(&creds.client_secret))
            .header(reqwest::header::USER_AGENT, &creds.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(PipelineError::Auth(format!(
                "token request rejected with status {}",
                status
            )));
        }
        let response = response.error_for_status()?;

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::Parse(format!("token response: {}", e)))?;

        // Reddit reports bad grants with a 200 and an error field
        if let Some(error) = token.error {
            return Err(PipelineError::Auth(format!("token request failed: {}", error)));
        }

        let access_token = token.access_token.ok_or_else(|| {
            PipelineError::Parse("token response carried no access_token".to_string())
        })?;

        Ok(RedditClient {
            http,
            user_agent: creds.user_agent.clone(),
            access_token,
        })
    }

    /// Runs one bounded search in a subreddit and returns the posts in the
    /// order the API yields them. Zero matches is an empty Vec, not an
    /// error.
    pub async fn search(
        &self,
        subreddit: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Post>, PipelineError> {
        let url = format!("{}/r/{}/search", SEARCH_BASE, subreddit);
        debug!("Searching r/{} for {:?} (limit {})", subreddit, query, limit);

        let limit = limit.to_string();
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .query(&[
                ("q", query),
                ("restrict_sr", "on"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(PipelineError::Auth(format!(
                "search rejected with status {} (token expired or revoked?)",
                status
            )));
        }
        let body = response.error_for_status()?.text().await?;

        parse_listing(&body)
    }
}

/// Shapes a raw listing body into posts. Kept separate from the network
/// call so the conversion is testable in isolation.
pub fn parse_listing(body: &str) -> Result<Vec<Post>, PipelineError> {
    let listing: Listing = serde_json::from_str(body)
        .map_err(|e| PipelineError::Parse(format!("search listing: {}", e)))?;

    let posts = listing
        .data
        .children
        .into_iter()
        .filter_map(|child| {
            let timestamp = child.data.created_utc as i64;
            match Post::from_timestamp(timestamp, child.data.title) {
                Some(post) => Some(post),
                None => {
                    warn!("Skipping post with out-of-range timestamp {}", timestamp);
                    None
                }
            }
        })
        .collect();

    Ok(posts)
}
