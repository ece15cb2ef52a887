#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::error::Error as _;

use crate::shared::types::{AirQualityMap, DatePredictionDto, ForecastMap};

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(std::time::Duration::from_secs(2))
        // The first hit after a service restart fits the models; give it room.
        .timeout(std::time::Duration::from_secs(60))
        .build()
        .expect("client")
});

fn base_url() -> String {
    env::var("AQI_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string())
}

/// Error body shape the prediction service uses for failures. It has sent
/// both `message` and `error` keys over time; accept either.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// A failure message supplied by the upstream service itself, as opposed to
/// a transport or decode error. Carried through anyhow so callers can
/// surface it verbatim.
#[derive(Debug)]
pub struct ApiMessage(pub String);

impl std::fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ApiMessage {}

pub async fn fetch_upstream<T: for<'de> Deserialize<'de> + Send + 'static>(
    path: &str,
) -> Result<T> {
    let url = format!("{}{}", base_url(), path);
    eprintln!("[upstream] GET {}", url);
    let req = CLIENT.get(&url).header("Cache-Control", "no-store");
    let res = match req.send().await {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[upstream] request error on GET {}: {}", url, e);
            if e.is_timeout() {
                eprintln!("[upstream] hint: request timed out (model fits take a while on a cold service)");
            }
            if e.is_connect() {
                eprintln!(
                    "[upstream] hint: connection failed (DNS/route/refused). Check AQI_API_URL and that the prediction service is up"
                );
            }
            let mut chain = Vec::new();
            let mut src: Option<&dyn std::error::Error> = e.source();
            while let Some(s) = src {
                chain.push(s.to_string());
                src = s.source();
            }
            if !chain.is_empty() {
                eprintln!("[upstream] error chain: {}", chain.join(" -> "));
            }
            return Err(anyhow!("sending GET {}: {}", url, e));
        }
    };
    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        eprintln!("[upstream] request failed: status={} body=\n{}", status, text);
        if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
            if let Some(msg) = body.message.or(body.error).filter(|m| !m.is_empty()) {
                return Err(anyhow::Error::new(ApiMessage(msg)));
            }
        }
        return Err(anyhow!("GET {} failed with status {}", url, status));
    }
    let bytes = res
        .bytes()
        .await
        .with_context(|| format!("reading body from GET {}", url))?;
    let data: T = serde_json::from_slice(&bytes).map_err(|e| {
        let snip = String::from_utf8_lossy(&bytes);
        let snip = snip.chars().take(300).collect::<String>();
        anyhow!(
            "decoding JSON from GET {} failed: {}\nBody snippet: {}",
            url,
            e,
            snip
        )
    })?;
    Ok(data)
}

pub async fn fetch_air_quality() -> Result<AirQualityMap> {
    fetch_upstream("/air-quality").await
}

pub async fn fetch_forecast() -> Result<ForecastMap> {
    fetch_upstream("/forecast").await
}

pub async fn fetch_prediction(date: &str) -> Result<Vec<DatePredictionDto>> {
    fetch_upstream(&format!("/predict/{}", date)).await
}
