use serde::{Deserialize, Serialize};

/// Square sizes requested for album art in now-playing metadata.
pub const ARTWORK_SIZES: [u32; 6] = [96, 128, 192, 256, 384, 512];

/// One library item as returned by the beets web endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Track {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub album_id: Option<u64>,
    #[serde(default)]
    pub track: Option<u32>,
    #[serde(default)]
    pub tracktotal: Option<u32>,
    #[serde(default)]
    pub disc: Option<u32>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub bitrate: Option<u32>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub mb_trackid: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl Track {
    /// Where the audio for this track is streamed from.
    pub fn playback_location(&self) -> String {
        format!("item/{}/file", self.id)
    }

    /// Album cover location, if the track belongs to an album.
    pub fn artwork_location(&self) -> Option<String> {
        self.album_id.map(|album_id| format!("album/{album_id}/art"))
    }

    pub fn musicbrainz_url(&self) -> Option<String> {
        self.mb_trackid
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .map(|id| format!("https://musicbrainz.org/recording/{id}"))
    }

    /// "3/12", "3" or nothing.
    pub fn track_position(&self) -> Option<String> {
        match (self.track, self.tracktotal) {
            (Some(0), _) | (None, _) => None,
            (Some(n), Some(total)) if total > 0 => Some(format!("{n}/{total}")),
            (Some(n), _) => Some(n.to_string()),
        }
    }
}

/// Body of `GET item/query/...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Track>,
}
