use crate::config;
use crate::endp::alphavantage::DailySeries;
use anyhow::{Context, Result};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// A single trading-day close.
#[derive(Debug, Clone, PartialEq)]
pub struct Close {
    pub dated: NaiveDate,
    pub close: f64,
}

/// The two closes a day-on-day change is computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePair {
    pub recent: Close,
    pub previous: Close,
}

/// Pick the two closes relevant to `today`.
///
/// Saturday through Monday the market was shut the previous calendar day, so
/// the pair comes from the provider's last-refreshed date and the day before
/// it; any other weekday uses yesterday and the day before that directly.
///
/// Market holidays are not accounted for: this is a weekday heuristic, not a
/// trading-calendar lookup, and around a holiday it can ask for a date the
/// series has no row for. The lookup then aborts with that date named.
pub fn select_close_pair(series: &DailySeries, today: NaiveDate) -> Result<PricePair> {
    let (recent, previous) = if market_was_closed(today) {
        let last_refreshed = series.meta.last_refreshed_date()?;
        (last_refreshed, last_refreshed - Days::new(1))
    } else {
        (today - Days::new(1), today - Days::new(2))
    };

    Ok(PricePair {
        recent: close_on(series, recent)?,
        previous: close_on(series, previous)?,
    })
}

// Saturday, Sunday, or Monday: yesterday's market was closed
fn market_was_closed(today: NaiveDate) -> bool {
    matches!(today.weekday(), Weekday::Sat | Weekday::Sun | Weekday::Mon)
}

fn close_on(series: &DailySeries, dated: NaiveDate) -> Result<Close> {
    let cell = series
        .series
        .get(&dated.to_string())
        .with_context(|| format!("[{}] no daily quote for {dated}", series.meta.symbol))?;
    Ok(Close {
        dated,
        close: cell.close,
    })
}

/// Day-on-day change of the pair, in percent, rounded to 2 decimal places.
pub fn percent_change(pair: &PricePair) -> f64 {
    let change = (pair.recent.close - pair.previous.close) / pair.previous.close * 100.0;
    (change * 100.0).round() / 100.0
}

/// `true` once the rounded move reaches [`config::MOVE_THRESHOLD`] in either
/// direction.
pub fn breaches_threshold(change: f64) -> bool {
    change.abs() >= config::MOVE_THRESHOLD
}

//////////////////////////////////////////////////////////////////////////////////////
// Tests
//////////////////////////////////////////////////////////////////////////////////////
