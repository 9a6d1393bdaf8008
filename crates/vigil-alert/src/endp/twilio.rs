use crate::config;
use crate::www;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use vigil_client::prelude::*;

//////////////////////////////////////////////////////////////////////////////////////
// Functions
//////////////////////////////////////////////////////////////////////////////////////

/// Send one SMS with `body` from the configured Twilio number to the
/// receiving number.
pub async fn send(client: &Client, body: &str) -> Result<MessageReceipt> {
    let receipt = client
        .post_form(
            &www::message_url(config::TWILIO_ACCOUNT_SID),
            (config::TWILIO_ACCOUNT_SID, config::TWILIO_AUTH_TOKEN),
            &[
                ("From", config::TWILIO_PHONE),
                ("To", config::RECEIVING_NUMBER),
                ("Body", body),
            ],
        )
        .await?;
    Ok(receipt)
}

//////////////////////////////////////////////////////////////////////////////////////
// Schema
//////////////////////////////////////////////////////////////////////////////////////

/// The slice of the send-message response worth logging.
#[derive(Deserialize, Serialize, Debug)]
pub struct MessageReceipt {
    pub sid: String,
    pub status: String,
}

//////////////////////////////////////////////////////////////////////////////////////
// Tests
//////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_deserializes() {
        let raw = r#"{
            "sid": "SM123",
            "status": "queued",
            "num_segments": "1",
            "direction": "outbound-api"
        }"#;
        let receipt: MessageReceipt = serde_json::from_str(raw).unwrap();

        assert_eq!(receipt.sid, "SM123");
        assert_eq!(receipt.status, "queued");
    }
}
