use crate::change;
use crate::config;
use crate::endp::{alphavantage, newsapi, twilio};
use crate::message;
use anyhow::Result;
use chrono::{Days, Local, NaiveDate};
use reqwest::Client;

/// Cap on the number of articles relayed per run.
const MAX_ARTICLES: usize = 3;

/// Full pass: fetch the latest closes and, when the move breaches the
/// threshold, text out the top headlines one message at a time.
pub async fn alert(client: &Client) -> Result<()> {
    let today = Local::now().date_naive();

    let pct = daily_change(client, today).await?;
    if !change::breaches_threshold(pct) {
        log::info!(
            "[{}] {pct}% is within the {}% threshold; nothing to send",
            config::TICKER,
            config::MOVE_THRESHOLD
        );
        return Ok(());
    }

    // threshold met; find out why the price moved
    log::info!("[{}] fetching headlines ...", config::TICKER);
    let articles = newsapi::fetch(
        client,
        config::KEY_WORDS,
        today - Days::new(1),
        config::NEWS_API_KEY,
    )
    .await?;

    if articles.is_empty() {
        log::warn!("[{}] threshold met but no articles found", config::TICKER);
        return Ok(());
    }

    // one SMS per headline, in the provider's popularity order
    for article in top_articles(&articles) {
        let body = message::format_alert(config::TICKER, pct, article);
        let receipt = twilio::send(client, &body).await?;
        log::info!(
            "[{}] message {} accepted ({})",
            config::TICKER,
            receipt.sid,
            receipt.status
        );
    }

    Ok(())
}

/// Quote lookup and close-pair selection; returns the rounded day-on-day
/// change in percent.
pub async fn daily_change(client: &Client, today: NaiveDate) -> Result<f64> {
    log::info!("[{}] fetching daily series ...", config::TICKER);
    let series = alphavantage::fetch(client, config::TICKER, config::STOCK_API_KEY).await?;

    let pair = change::select_close_pair(&series, today)?;
    let pct = change::percent_change(&pair);
    log::info!(
        "[{}] close {} ({}) against {} ({}): {pct}%",
        config::TICKER,
        pair.recent.close,
        pair.recent.dated,
        pair.previous.close,
        pair.previous.dated
    );
    Ok(pct)
}

// at most MAX_ARTICLES of the returned articles, in order
fn top_articles(articles: &[newsapi::Article]) -> &[newsapi::Article] {
    &articles[..articles.len().min(MAX_ARTICLES)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endp::newsapi::Article;

    fn articles(count: usize) -> Vec<Article> {
        (0..count)
            .map(|i| Article {
                title: format!("headline {i}"),
                description: None,
            })
            .collect()
    }

    #[test]
    fn at_most_three_articles_are_relayed() {
        assert_eq!(top_articles(&articles(5)).len(), 3);
        assert_eq!(top_articles(&articles(3)).len(), 3);
        assert_eq!(top_articles(&articles(2)).len(), 2);
        assert!(top_articles(&articles(0)).is_empty());
    }

    #[test]
    fn relayed_articles_keep_their_order() {
        let all = articles(5);
        let top = top_articles(&all);
        assert_eq!(top[0].title, "headline 0");
        assert_eq!(top[2].title, "headline 2");
    }
}
