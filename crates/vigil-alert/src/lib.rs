//! Watches one ticker's daily closes; when the day-on-day move is large
//! enough, pulls the most popular related headlines and texts them out,
//! one SMS per article.

pub mod change;
pub mod config;
pub mod endp;
pub mod message;
pub mod run;
pub mod www;
