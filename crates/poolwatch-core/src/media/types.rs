use serde::Serialize;
use std::fmt;

/// How a media file should be presented.
///
/// The backend serves `.mp4` files as video and everything else as images.
/// The suffix match is exact and case-sensitive, matching the server's own
/// routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn from_filename(filename: &str) -> Self {
        if filename.ends_with(".mp4") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Image => write!(f, "image"),
        }
    }
}

/// One entry of the backend's media catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaFile {
    /// Filename as listed by the backend
    pub name: String,
    /// Presentation kind derived from the filename
    pub kind: MediaKind,
    /// Absolute retrieval URL
    pub url: String,
}
