use std::time::Duration;

use log::{debug, warn};

use crate::Result;
use crate::error::Error;
use crate::http::{Transport, TransportError};
use crate::types::ReleaseMetadata;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub attempts: u32,
    pub backoff_step: Duration,
    pub politeness_delay: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.discogs.com".to_string(),
            attempts: 3,
            backoff_step: Duration::from_secs(5),
            politeness_delay: Duration::from_millis(300),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

pub struct MetadataFetcher<T, S> {
    config: FetchConfig,
    transport: T,
    sleeper: S,
}

impl<T: Transport, S: Sleeper> MetadataFetcher<T, S> {
    pub fn new(config: FetchConfig, transport: T, sleeper: S) -> Self {
        Self {
            config,
            transport,
            sleeper,
        }
    }

    pub fn release_url(&self, release_id: u64) -> String {
        format!(
            "{}/releases/{}",
            self.config.base_url.trim_end_matches('/'),
            release_id
        )
    }

    pub fn fetch(&mut self, release_id: u64) -> Result<ReleaseMetadata> {
        let url = self.release_url(release_id);
        let body = self.request_with_retry(&url)?;
        serde_json::from_str(&body).map_err(|source| Error::MalformedMetadata { url, source })
    }

    /// GETs `url` until it answers 200, sleeping `backoff_step * attempt`
    /// after each failed attempt. Timeouts count as failed attempts; any other
    /// transport error is returned immediately.
    pub fn request_with_retry(&mut self, url: &str) -> Result<String> {
        let mut attempt = 0;
        while attempt < self.config.attempts {
            match self.transport.get(url, self.config.request_timeout) {
                Ok(response) if response.status == 200 => {
                    debug!("{} answered on attempt {}", url, attempt + 1);
                    self.sleeper.sleep(self.config.politeness_delay);
                    return Ok(response.body);
                }
                Ok(response) => {
                    warn!("{} returned status {}", url, response.status);
                }
                Err(TransportError::Timeout) => {
                    warn!("{} timed out", url);
                }
                Err(TransportError::Other(message)) => {
                    return Err(Error::Transport {
                        url: url.to_string(),
                        message,
                    });
                }
            }

            attempt += 1;
            self.sleeper.sleep(self.config.backoff_step * attempt);
        }

        Err(Error::MetadataUnavailable {
            url: url.to_string(),
            attempts: self.config.attempts,
        })
    }
}
