/*!
 * HTTP client for the movie-media lookup service.
 *
 * The service is a key-value fetch: `GET <endpoint>?movieId=<id>` returns
 * `{"videoUrl": string|null, "subtitleUrl": string|null}`. The player
 * treats every non-success response and every transport failure the same
 * way, so errors here carry just enough detail for logging.
 */

use async_trait::async_trait;
use log::{debug, warn};
use std::time::Duration;
use url::Url;

use crate::app_config::MediaConfig;
use crate::errors::MediaError;
use crate::media::{MediaLookup, MediaUrls};

/// Client for the external media lookup service
#[derive(Debug, Clone)]
pub struct HttpMediaLookup {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpMediaLookup {
    /// Create a client for the given endpoint with a request timeout
    pub fn new(endpoint: &str, timeout_secs: u64) -> Result<Self, MediaError> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| MediaError::InvalidEndpoint(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| MediaError::RequestFailed(e.to_string()))?;

        Ok(HttpMediaLookup { client, endpoint })
    }

    /// Create a client from the media section of the application config
    pub fn from_config(config: &MediaConfig) -> Result<Self, MediaError> {
        Self::new(&config.endpoint, config.timeout_secs)
    }

    fn lookup_url(&self, movie_id: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("movieId", &movie_id.to_string());
        url
    }
}

#[async_trait]
impl MediaLookup for HttpMediaLookup {
    async fn lookup(&self, movie_id: u32) -> Result<MediaUrls, MediaError> {
        let url = self.lookup_url(movie_id);
        debug!("Looking up media for movie {}", movie_id);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MediaError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Media lookup for movie {} returned status {}", movie_id, status);
            return Err(MediaError::RequestFailed(format!(
                "unexpected status {}",
                status
            )));
        }

        response
            .json::<MediaUrls>()
            .await
            .map_err(|e| MediaError::InvalidResponse(e.to_string()))
    }
}
