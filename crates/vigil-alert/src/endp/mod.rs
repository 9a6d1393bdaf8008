pub mod alphavantage;
pub mod newsapi;
pub mod twilio;
