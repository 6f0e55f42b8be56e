/*!
 * Media lookup boundary for movie playback.
 *
 * Media files live behind an external key-value service: given a movie
 * identifier it returns the video and subtitle URLs bound to that movie,
 * or nulls when nothing has been attached yet. This module defines the
 * lookup trait, the response shape, and the tri-state availability the
 * player renders from:
 * - `http`: client for the real lookup service
 * - `mock`: scripted lookups for tests
 */

use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::Debug;

use crate::errors::MediaError;

/// URLs bound to a movie, as returned by the lookup service.
/// Either field may be null when no media has been attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaUrls {
    /// Video file URL, if one is attached
    #[serde(default)]
    pub video_url: Option<String>,
    /// Subtitle file URL, if one is attached
    #[serde(default)]
    pub subtitle_url: Option<String>,
}

/// Observable availability of a movie's media within a viewing session.
///
/// Any lookup failure and any lookup that yields no video URL collapse to
/// `Unavailable`; the UI renders a static fallback and the rest of the
/// session keeps working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaState {
    /// The one-shot lookup has not settled yet
    Loading,
    /// A video URL is attached; the subtitle track is optional
    Available {
        /// Video file URL
        video_url: String,
        /// Subtitle file URL, when one is attached
        subtitle_url: Option<String>,
    },
    /// Lookup failed or returned no video URL; terminal for this session
    Unavailable,
}

impl MediaState {
    /// Settle the pending state from a lookup outcome
    pub fn settle(result: Result<MediaUrls, MediaError>) -> Self {
        match result {
            Ok(MediaUrls {
                video_url: Some(video_url),
                subtitle_url,
            }) => MediaState::Available {
                video_url,
                subtitle_url,
            },
            Ok(_) | Err(_) => MediaState::Unavailable,
        }
    }

    /// Whether the lookup has not settled yet
    pub fn is_loading(&self) -> bool {
        matches!(self, MediaState::Loading)
    }

    /// Whether playable media is attached
    pub fn is_available(&self) -> bool {
        matches!(self, MediaState::Available { .. })
    }
}

/// Common trait for media lookup implementations
///
/// This trait defines the interface the player uses to resolve a movie's
/// media URLs, allowing the HTTP client and test mocks to be used
/// interchangeably.
#[async_trait]
pub trait MediaLookup: Send + Sync + Debug {
    /// Resolve the media URLs bound to a movie
    ///
    /// # Arguments
    /// * `movie_id` - The movie identifier to look up
    ///
    /// # Returns
    /// * `Result<MediaUrls, MediaError>` - The bound URLs or a lookup error
    async fn lookup(&self, movie_id: u32) -> Result<MediaUrls, MediaError>;
}

pub mod http;
pub mod mock;
