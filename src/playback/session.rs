//! Now-playing metadata for the platform media session.

use crate::api::{Track, ARTWORK_SIZES};
use crate::error::PlaybackError;

#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub src: String,
    /// e.g. `"96x96"`
    pub sizes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub artwork: Vec<Artwork>,
}

impl NowPlaying {
    pub fn for_track(track: &Track) -> Self {
        let artwork = track
            .artwork_location()
            .map(|src| {
                ARTWORK_SIZES
                    .iter()
                    .map(|size| Artwork {
                        src: src.clone(),
                        sizes: format!("{size}x{size}"),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: track.title.clone(),
            artist: track.artist.clone(),
            album: track.album.clone(),
            artwork,
        }
    }
}

/// Platform surface that shows what is playing (lock screen, media keys overlay).
pub trait MediaSession {
    /// Whether the platform offers a media session at all.
    fn is_available(&self) -> bool;
    fn publish(&self, now_playing: &NowPlaying) -> Result<(), PlaybackError>;
}
