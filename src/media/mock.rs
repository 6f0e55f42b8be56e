/*!
 * Mock media lookup implementations for testing.
 *
 * This module provides scripted lookups that simulate different service
 * behaviors:
 * - `MockMediaLookup::attached(...)` - Returns the given URLs
 * - `MockMediaLookup::missing()` - No media bound, both URLs null
 * - `MockMediaLookup::failing()` - Always fails with a transport error
 * - `MockMediaLookup::slow(...)` - Delays before returning URLs
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::MediaError;
use crate::media::{MediaLookup, MediaUrls};

/// Behavior mode for the mock lookup
#[derive(Debug, Clone, PartialEq)]
pub enum MockMediaBehavior {
    /// Media is bound to the movie
    Attached {
        /// Video URL to return
        video_url: String,
        /// Subtitle URL to return
        subtitle_url: Option<String>,
    },
    /// No media row exists; the service answers with nulls
    Missing,
    /// The request fails at the transport layer
    Failing,
    /// Media is bound but the service is slow (for timeout testing)
    Slow {
        /// Delay before answering
        delay_ms: u64,
        /// Video URL to return after the delay
        video_url: String,
    },
}

/// Mock lookup for testing player media behavior
#[derive(Debug)]
pub struct MockMediaLookup {
    behavior: MockMediaBehavior,
    request_count: Arc<AtomicUsize>,
}

impl MockMediaLookup {
    /// Create a mock with the specified behavior
    pub fn new(behavior: MockMediaBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock that returns the given URLs
    pub fn attached(video_url: &str, subtitle_url: Option<&str>) -> Self {
        Self::new(MockMediaBehavior::Attached {
            video_url: video_url.to_string(),
            subtitle_url: subtitle_url.map(|s| s.to_string()),
        })
    }

    /// Create a mock with no media bound
    pub fn missing() -> Self {
        Self::new(MockMediaBehavior::Missing)
    }

    /// Create a mock that always fails
    pub fn failing() -> Self {
        Self::new(MockMediaBehavior::Failing)
    }

    /// Create a slow mock that answers after a delay
    pub fn slow(delay_ms: u64, video_url: &str) -> Self {
        Self::new(MockMediaBehavior::Slow {
            delay_ms,
            video_url: video_url.to_string(),
        })
    }

    /// Number of lookups served so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockMediaLookup {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl MediaLookup for MockMediaLookup {
    async fn lookup(&self, _movie_id: u32) -> Result<MediaUrls, MediaError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockMediaBehavior::Attached {
                video_url,
                subtitle_url,
            } => Ok(MediaUrls {
                video_url: Some(video_url.clone()),
                subtitle_url: subtitle_url.clone(),
            }),

            MockMediaBehavior::Missing => Ok(MediaUrls::default()),

            MockMediaBehavior::Failing => Err(MediaError::RequestFailed(
                "simulated lookup failure".to_string(),
            )),

            MockMediaBehavior::Slow { delay_ms, video_url } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                Ok(MediaUrls {
                    video_url: Some(video_url.clone()),
                    subtitle_url: None,
                })
            }
        }
    }
}
