pub const QUOTE_ENDPOINT: &str = "https://www.alphavantage.co/query";
pub const NEWS_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// Twilio scopes message sends under the account.
pub fn message_url(account_sid: &str) -> String {
    format!("https://api.twilio.com/2010-04-01/Accounts/{account_sid}/Messages.json")
}
