//////////////////////////////////////////////////////////////////////////////////////
// Credentials - fill these in before building
//////////////////////////////////////////////////////////////////////////////////////

pub const STOCK_API_KEY: &str = "YOUR ALPHAVANTAGE API KEY";
pub const NEWS_API_KEY: &str = "YOUR NEWSAPI.ORG API KEY";

pub const TWILIO_ACCOUNT_SID: &str = "YOUR TWILIO ACCOUNT SID";
pub const TWILIO_AUTH_TOKEN: &str = "YOUR TWILIO AUTH TOKEN";
pub const TWILIO_PHONE: &str = "YOUR TWILIO PHONE NUMBER";
pub const RECEIVING_NUMBER: &str = "YOUR NUMBER TO SEND MESSAGES TO";

//////////////////////////////////////////////////////////////////////////////////////
// Watch settings
//////////////////////////////////////////////////////////////////////////////////////

/// Ticker under watch.
pub const TICKER: &str = "TSLA";

/// Search terms for the news lookup.
pub const KEY_WORDS: &str = "Elon Musk AND Tesla";

/// Absolute day-on-day move (in %) that opens the news/notify path.
pub const MOVE_THRESHOLD: f64 = 5.0;

/// `User-Agent` header sent with every request.
pub const USER_AGENT: &str = "vigil/0.1";
