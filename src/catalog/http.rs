// HTTP helpers for talking to the PaperMC API
//
// Every request gets its own client. It lives for exactly one exchange and is
// dropped with the response on every return path.

use crate::constants::USER_AGENT;
use crate::error::{DownloadError, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Build a fresh client with the crate User-Agent
fn client(url: &str) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| DownloadError::Transport {
            url: url.to_string(),
            source,
        })
}

/// GET a URL and return the response if the status is 200
pub async fn get_ok(url: &str) -> Result<Response> {
    let response = client(url)?
        .get(url)
        .send()
        .await
        .map_err(|source| DownloadError::Transport {
            url: url.to_string(),
            source,
        })?;

    ensure_ok(url, response)
}

/// Fetch JSON from a URL and deserialize it
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = client(url)?
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|source| DownloadError::Transport {
            url: url.to_string(),
            source,
        })?;

    let response = ensure_ok(url, response)?;

    let body = response
        .text()
        .await
        .map_err(|source| DownloadError::Transport {
            url: url.to_string(),
            source,
        })?;

    serde_json::from_str(&body).map_err(|e| DownloadError::malformed(url, e))
}

fn ensure_ok(url: &str, response: Response) -> Result<Response> {
    if response.status() != StatusCode::OK {
        log::debug!("{} answered {}", url, response.status());
        return Err(DownloadError::status(url, response.status()));
    }
    Ok(response)
}
