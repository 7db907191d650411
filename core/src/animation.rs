//! Decorative animation loading
//!
//! The home page shows a Lottie animation fetched over HTTP. The body is kept
//! as an untouched JSON value; [`LottieSummary`] pulls out the few header
//! fields the terminal widget displays.

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Animation body as received from the remote resource
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationData {
    value: serde_json::Value,
}

impl AnimationData {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// The raw JSON body
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    /// Header fields of the animation, when the body looks like Lottie
    pub fn summary(&self) -> LottieSummary {
        serde_json::from_value(self.value.clone()).unwrap_or_default()
    }
}

/// Header fields of a Lottie document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LottieSummary {
    #[serde(rename = "nm", default)]
    pub name: Option<String>,
    #[serde(rename = "v", default)]
    pub version: Option<String>,
    #[serde(rename = "fr", default)]
    pub frame_rate: Option<f64>,
    #[serde(rename = "ip", default)]
    pub in_point: Option<f64>,
    #[serde(rename = "op", default)]
    pub out_point: Option<f64>,
    #[serde(rename = "w", default)]
    pub width: Option<f64>,
    #[serde(rename = "h", default)]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "count_layers")]
    pub layers: usize,
}

fn count_layers<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let layers = Option::<Vec<serde::de::IgnoredAny>>::deserialize(deserializer)?;
    Ok(layers.map(|l| l.len()).unwrap_or(0))
}

impl LottieSummary {
    /// Number of frames between the in and out points
    pub fn frame_count(&self) -> Option<u64> {
        match (self.in_point, self.out_point) {
            (Some(ip), Some(op)) if op > ip => Some((op - ip).round() as u64),
            _ => None,
        }
    }

    /// Playback length at the declared frame rate
    pub fn duration(&self) -> Option<Duration> {
        let frames = self.frame_count()?;
        let rate = self.frame_rate.filter(|r| *r > 0.0)?;
        Some(Duration::from_secs_f64(frames as f64 / rate))
    }

    /// Time between frames, falling back to 30fps
    pub fn frame_interval(&self) -> Duration {
        let rate = self.frame_rate.filter(|r| *r > 0.0).unwrap_or(30.0);
        Duration::from_secs_f64(1.0 / rate)
    }
}

/// Source of animation data
#[async_trait]
pub trait AnimationSource: Send + Sync {
    /// Fetch and parse the animation at `url`
    async fn fetch(&self, url: &str) -> Result<AnimationData, FetchError>;
}

/// Loads animations over HTTP with a fixed deadline and no retries
#[derive(Debug, Clone)]
pub struct HttpAnimationSource {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpAnimationSource {
    /// Create a new source whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("comment-docs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport {
                message: e.to_string(),
            })?;

        Ok(Self::with_client(client, timeout))
    }

    /// Wrap an existing client; every request is still bounded by `timeout`
    pub fn with_client(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    fn map_error(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                after: self.timeout,
            }
        } else {
            FetchError::Transport {
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl AnimationSource for HttpAnimationSource {
    async fn fetch(&self, url: &str) -> Result<AnimationData, FetchError> {
        debug!("Fetching animation from {}", url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.map_error(e))?;
        let value = serde_json::from_slice(&body).map_err(|e| FetchError::InvalidBody {
            message: e.to_string(),
        })?;

        debug!("Animation loaded ({} bytes)", body.len());
        Ok(AnimationData::new(value))
    }
}
