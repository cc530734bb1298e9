// src/core/net.rs

// JSON POST over HTTP(S), blocking. One request per call, no retry.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use reqwest::StatusCode;
use serde::Serialize;

use crate::config::consts::{REFERER as REFERER_URL, USER_AGENT};

#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(StatusCode),
}

/// Build the shared client. `timeout` bounds the whole request.
pub fn client(timeout: Duration) -> Result<Client, NetError> {
    let mut headers = HeaderMap::new();
    headers.insert(REFERER, HeaderValue::from_static(REFERER_URL));

    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// POST `body` as JSON and return the response text on a 2xx status.
pub fn post_json<B>(client: &Client, url: &str, body: &B) -> Result<String, NetError>
where
    B: Serialize + ?Sized,
{
    let resp = client.post(url).json(body).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(NetError::Status(status));
    }
    Ok(resp.text()?)
}
