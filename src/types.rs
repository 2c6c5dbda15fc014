use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackInfo {
    pub position: String,
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Release description as served by `GET /releases/{id}`. Fields the splitter
/// does not use are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseMetadata {
    pub title: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub tracklist: Vec<TrackInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTags {
    pub track: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_artist: String,
}

impl TrackTags {
    /// Key/value pairs in the order they are handed to the encoder.
    pub fn pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("track", self.track.as_str()),
            ("title", self.title.as_str()),
            ("artist", self.artist.as_str()),
            ("album", self.album.as_str()),
            ("albumartist", self.album_artist.as_str()),
        ]
    }
}
