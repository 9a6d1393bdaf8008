use crate::www;
use anyhow::Result;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use vigil_client::prelude::*;

//////////////////////////////////////////////////////////////////////////////////////
// Functions
//////////////////////////////////////////////////////////////////////////////////////

/// Fetch articles matching `keywords`, published on or after `from`, most
/// popular first. The search is restricted to article titles and to
/// English-language sources.
pub async fn fetch(
    client: &Client,
    keywords: &str,
    from: NaiveDate,
    api_key: &str,
) -> Result<Vec<Article>> {
    let from = from.to_string();
    let response: NewsResponse = client
        .get_json(
            www::NEWS_ENDPOINT,
            &[
                ("q", keywords),
                ("searchIn", "title"),
                ("from", from.as_str()),
                ("language", "en"),
                ("sortBy", "popularity"),
                ("apiKey", api_key),
            ],
        )
        .await?;
    Ok(response.articles)
}

//////////////////////////////////////////////////////////////////////////////////////
// Schema
//////////////////////////////////////////////////////////////////////////////////////

#[derive(Deserialize, Serialize, Debug)]
pub struct NewsResponse {
    pub status: String,
    #[serde(rename = "totalResults")]
    pub total_results: u64,
    pub articles: Vec<Article>,
}

/// The slice of an article the alert message is built from; briefs are
/// nullable on the wire.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
}

//////////////////////////////////////////////////////////////////////////////////////
// Tests
//////////////////////////////////////////////////////////////////////////////////////
