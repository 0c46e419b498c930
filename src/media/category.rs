//! Media categories and filename classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MediatecaError;

/// Classification bucket for stored files.
///
/// The wire and directory name of the image bucket is `imagen`, matching the
/// protocol spoken by existing clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Audio files (mp3, wav, ogg).
    Audio,
    /// Video files (mp4, avi, mkv).
    Video,
    /// Image files (jpg, jpeg, png, gif).
    Imagen,
}

impl Category {
    /// All categories in listing order. The ordinal ids assigned by a listing
    /// depend on this order, so it must stay fixed.
    pub const ALL: [Category; 3] = [Category::Audio, Category::Video, Category::Imagen];

    /// Classify a filename by its extension.
    ///
    /// Takes the substring after the last `.`, ASCII-lowercased, and looks it
    /// up in the fixed extension table. A name without a dot is looked up
    /// whole. Returns `None` for anything outside the table, including the
    /// empty string. Classification is name-based only; file content is never
    /// inspected.
    pub fn from_filename(filename: &str) -> Option<Category> {
        let ext = filename.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
        match ext.as_str() {
            "mp3" | "wav" | "ogg" => Some(Category::Audio),
            "mp4" | "avi" | "mkv" => Some(Category::Video),
            "jpg" | "jpeg" | "png" | "gif" => Some(Category::Imagen),
            _ => None,
        }
    }

    /// The directory and wire name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Audio => "audio",
            Category::Video => "video",
            Category::Imagen => "imagen",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = MediatecaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio" => Ok(Category::Audio),
            "video" => Ok(Category::Video),
            "imagen" => Ok(Category::Imagen),
            _ => Err(MediatecaError::UnsupportedType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_audio_extensions() {
        assert_eq!(Category::from_filename("song.mp3"), Some(Category::Audio));
        assert_eq!(Category::from_filename("voice.wav"), Some(Category::Audio));
        assert_eq!(Category::from_filename("loop.ogg"), Some(Category::Audio));
    }

    #[test]
    fn test_classify_video_extensions() {
        assert_eq!(Category::from_filename("clip.mp4"), Some(Category::Video));
        assert_eq!(Category::from_filename("movie.avi"), Some(Category::Video));
        assert_eq!(Category::from_filename("show.mkv"), Some(Category::Video));
    }

    #[test]
    fn test_classify_image_extensions() {
        assert_eq!(Category::from_filename("photo.jpg"), Some(Category::Imagen));
        assert_eq!(Category::from_filename("photo.jpeg"), Some(Category::Imagen));
        assert_eq!(Category::from_filename("icon.png"), Some(Category::Imagen));
        assert_eq!(Category::from_filename("anim.gif"), Some(Category::Imagen));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Category::from_filename("SONG.MP3"), Some(Category::Audio));
        assert_eq!(Category::from_filename("Photo.JPeG"), Some(Category::Imagen));
    }

    #[test]
    fn test_classify_unsupported_extension() {
        assert_eq!(Category::from_filename("doc.txt"), None);
        assert_eq!(Category::from_filename("archive.tar.gz"), None);
    }

    #[test]
    fn test_classify_no_dot_uses_whole_name() {
        // Without a dot the whole lowercased name is the lookup key.
        assert_eq!(Category::from_filename("archivo"), None);
        assert_eq!(Category::from_filename("mp3"), Some(Category::Audio));
    }

    #[test]
    fn test_classify_empty_filename() {
        assert_eq!(Category::from_filename(""), None);
    }

    #[test]
    fn test_classify_trailing_dot() {
        assert_eq!(Category::from_filename("song."), None);
    }

    #[test]
    fn test_listing_order_is_fixed() {
        assert_eq!(
            Category::ALL,
            [Category::Audio, Category::Video, Category::Imagen]
        );
    }

    #[test]
    fn test_as_str_and_display() {
        assert_eq!(Category::Audio.as_str(), "audio");
        assert_eq!(Category::Video.to_string(), "video");
        assert_eq!(Category::Imagen.as_str(), "imagen");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("audio".parse::<Category>().unwrap(), Category::Audio);
        assert_eq!("imagen".parse::<Category>().unwrap(), Category::Imagen);
        assert!("document".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(serde_json::to_string(&Category::Imagen).unwrap(), "\"imagen\"");
        let parsed: Category = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(parsed, Category::Video);
    }
}
