use std::time::Duration;

use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Role vocabulary of the generateContent API. The assistant side is
/// called "model" on the wire.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "model")]
    Assistant,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Part {
    pub text: String,
}

/// One entry in the `contents` array of a generateContent request.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: Role, text: &str) -> Self {
        Content {
            role,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

/// Requests the next model turn for the given conversation contents.
/// The system instruction shapes the persona and is constant across
/// the session. Non-2xx responses are returned as errors so transport,
/// auth, and quota failures all surface uniformly to the caller.
pub async fn generate_content(
    contents: &[Content],
    system_instruction: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Value, Error> {
    let payload = json!({
        "system_instruction": {"parts": [{"text": system_instruction}]},
        "contents": contents,
    });
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        api_hostname.trim_end_matches("/"),
        model
    );
    let response = reqwest::Client::new()
        .post(url)
        .header("x-goog-api-key", api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60))
        .json(&payload)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response)
}

/// Extracts the generated text from a generateContent response by
/// concatenating the parts of the first candidate. Returns `None` when
/// the response carries no candidate content at all.
pub fn response_text(response: &Value) -> Option<String> {
    let parts = response["candidates"][0]["content"]["parts"].as_array()?;
    let text = parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect::<Vec<&str>>()
        .join("");
    Some(text)
}
