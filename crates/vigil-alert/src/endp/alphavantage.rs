use crate::www;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use vigil_client::prelude::*;

//////////////////////////////////////////////////////////////////////////////////////
// Functions
//////////////////////////////////////////////////////////////////////////////////////

/// Fetch the `TIME_SERIES_DAILY` dataset of a single stock.
pub async fn fetch(client: &Client, ticker: &str, api_key: &str) -> Result<DailySeries> {
    let response: DailyResponse = client
        .get_json(
            www::QUOTE_ENDPOINT,
            &[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", ticker),
                ("apikey", api_key),
            ],
        )
        .await?;

    match (response.meta, response.series) {
        (Some(meta), Some(series)) => Ok(DailySeries { meta, series }),

        // quota/symbol problems come back inside a 200 body
        _ => {
            let reason = response
                .error_message
                .or(response.note)
                .unwrap_or_else(|| "no daily series in response".to_string());
            anyhow::bail!("[{ticker}] quote lookup failed: {reason}")
        }
    }
}

//////////////////////////////////////////////////////////////////////////////////////
// Schema
//////////////////////////////////////////////////////////////////////////////////////

/// A validated daily series; `series` maps `YYYY-MM-DD` strings to OHLCV cells.
#[derive(Debug, Clone)]
pub struct DailySeries {
    pub meta: MetaData,
    pub series: BTreeMap<String, DailyCell>,
}

// raw wire shape; either the data fields or one of the error strings is set
#[derive(Deserialize, Debug)]
struct DailyResponse {
    #[serde(rename = "Meta Data")]
    meta: Option<MetaData>,
    #[serde(rename = "Time Series (Daily)")]
    series: Option<BTreeMap<String, DailyCell>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MetaData {
    #[serde(rename = "2. Symbol")]
    pub symbol: String,
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: String,
}

impl MetaData {
    /// `"3. Last Refreshed"` read as a calendar date.
    pub fn last_refreshed_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.last_refreshed, "%Y-%m-%d").with_context(|| {
            format!("unreadable last-refreshed date: {}", self.last_refreshed)
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DailyCell {
    #[serde(rename = "1. open", deserialize_with = "de_quoted_f64")]
    pub open: f64,
    #[serde(rename = "2. high", deserialize_with = "de_quoted_f64")]
    pub high: f64,
    #[serde(rename = "3. low", deserialize_with = "de_quoted_f64")]
    pub low: f64,
    #[serde(rename = "4. close", deserialize_with = "de_quoted_f64")]
    pub close: f64,
    #[serde(rename = "5. volume", deserialize_with = "de_quoted_u64")]
    pub volume: u64,
}

/// The provider quotes every number, e.g. `"4. close": "171.8900"`.
fn de_quoted_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: String = Deserialize::deserialize(deserializer)?;
    value.parse::<f64>().map_err(serde::de::Error::custom)
}

fn de_quoted_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value: String = Deserialize::deserialize(deserializer)?;
    value.parse::<u64>().map_err(serde::de::Error::custom)
}

//////////////////////////////////////////////////////////////////////////////////////
// Tests
//////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "Meta Data": {
            "1. Information": "Daily Prices (open, high, low, close) and Volumes",
            "2. Symbol": "TSLA",
            "3. Last Refreshed": "2024-05-10",
            "4. Output Size": "Compact",
            "5. Time Zone": "US/Eastern"
        },
        "Time Series (Daily)": {
            "2024-05-10": {
                "1. open": "170.0000",
                "2. high": "172.5000",
                "3. low": "168.0000",
                "4. close": "171.8900",
                "5. volume": "123456789"
            },
            "2024-05-09": {
                "1. open": "168.0000",
                "2. high": "171.0000",
                "3. low": "167.2500",
                "4. close": "169.0100",
                "5. volume": "98765432"
            }
        }
    }"#;

    #[test]
    fn daily_series_deserializes() {
        let response: DailyResponse = serde_json::from_str(FIXTURE).unwrap();

        let meta = response.meta.unwrap();
        assert_eq!(meta.symbol, "TSLA");
        assert_eq!(meta.last_refreshed, "2024-05-10");

        let series = response.series.unwrap();
        let cell = &series["2024-05-10"];
        assert!((cell.close - 171.89).abs() < 1e-9);
        assert!((cell.open - 170.0).abs() < 1e-9);
        assert_eq!(cell.volume, 123456789);
    }

    #[test]
    fn error_body_carries_provider_text() {
        let raw = r#"{"Error Message": "Invalid API call."}"#;
        let response: DailyResponse = serde_json::from_str(raw).unwrap();

        assert!(response.meta.is_none());
        assert!(response.series.is_none());
        assert_eq!(response.error_message.as_deref(), Some("Invalid API call."));
    }

    #[test]
    fn last_refreshed_reads_as_date() {
        let meta = MetaData {
            symbol: "TSLA".to_string(),
            last_refreshed: "2024-05-10".to_string(),
        };
        assert_eq!(
            meta.last_refreshed_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
        );
    }

    #[test]
    fn garbage_last_refreshed_errors() {
        let meta = MetaData {
            symbol: "TSLA".to_string(),
            last_refreshed: "whenever".to_string(),
        };
        assert!(meta.last_refreshed_date().is_err());
    }
}
