use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use std::time::Duration;

use crate::error::{LoaderError, LoaderResult};

/// Raw response envelope: a JSON object mapping string keys to arbitrary
/// values. Key presence is only checked later, during validation.
pub type SourceData = Map<String, Value>;

/// Capability to load the remote leaderboard document. Implementations own
/// the transport and parse work; the loader treats them as opaque calls.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn load(&self, url: &str) -> LoaderResult<SourceData>;
}

pub struct HttpFetcher {
    http_client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> LoaderResult<HttpFetcher> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(HttpFetcher { http_client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn load(&self, url: &str) -> LoaderResult<SourceData> {
        let response = self.http_client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                match serde_json::from_str::<Value>(&body)? {
                    Value::Object(data) => Ok(data),
                    _ => Err(LoaderError::Parse(
                        "leaderboard response is not a JSON object".to_string(),
                    )),
                }
            }
            status => Err(LoaderError::Http(format!("{}", status))),
        }
    }
}
