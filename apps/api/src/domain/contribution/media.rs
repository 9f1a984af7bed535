//! Upload checks applied to contribution files before anything is sent to
//! storage.

use super::entity::ContentCategory;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Default upload ceiling (50 MB).
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "ogg", "flac", "aac"];
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt", "rtf", "odt"];

lazy_static! {
    static ref UNSAFE_NAME_CHARS: Regex = Regex::new(r"[^A-Za-z0-9 _-]").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
    Document,
}

impl MediaKind {
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Image => IMAGE_EXTENSIONS,
            Self::Audio => AUDIO_EXTENSIONS,
            Self::Document => DOCUMENT_EXTENSIONS,
        }
    }

    /// Classifies a file by its extension; `None` for anything unrecognised.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = extension(file_name)?;
        [Self::Image, Self::Audio, Self::Document]
            .into_iter()
            .find(|kind| kind.extensions().contains(&ext.as_str()))
    }

    /// The kind a category's file must have. Events and place info accept
    /// any attachment.
    pub fn expected_for(category: ContentCategory) -> Option<Self> {
        match category {
            ContentCategory::Image => Some(Self::Image),
            ContentCategory::Audio => Some(Self::Audio),
            ContentCategory::Document => Some(Self::Document),
            ContentCategory::Event | ContentCategory::PlaceInfo => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Document => "document",
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum UploadRejection {
    #[error("File is empty")]
    Empty,
    #[error(
        "File size ({:.1}MB) exceeds maximum allowed size ({}MB)",
        megabytes(.size),
        megabytes(.max)
    )]
    TooLarge { size: usize, max: usize },
    #[error("File type mismatch. Expected {expected} file for {category}")]
    TypeMismatch {
        expected: MediaKind,
        category: &'static str,
    },
}

/// Checks size and extension against the declared category.
pub fn validate_upload(
    file_name: &str,
    size: usize,
    category: ContentCategory,
    max_bytes: usize,
) -> Result<(), UploadRejection> {
    if size == 0 {
        return Err(UploadRejection::Empty);
    }
    if size > max_bytes {
        return Err(UploadRejection::TooLarge {
            size,
            max: max_bytes,
        });
    }
    if let Some(expected) = MediaKind::expected_for(category) {
        if MediaKind::from_file_name(file_name) != Some(expected) {
            return Err(UploadRejection::TypeMismatch {
                expected,
                category: category.label(),
            });
        }
    }
    Ok(())
}

/// Builds a collision-free object key:
/// `<category>/<YYYYmmdd_HHMMSS>_<8 hex>_<sanitised base>[.<ext>]`.
pub fn storage_key(
    file_name: &str,
    category: ContentCategory,
    now: DateTime<Utc>,
    unique: Uuid,
) -> String {
    let base = match file_name.rsplit_once('.') {
        Some((base, _)) => base,
        None => file_name,
    };
    let cleaned = UNSAFE_NAME_CHARS.replace_all(base, "");
    let cleaned = cleaned.trim().replace(' ', "_");
    let safe_base = if cleaned.is_empty() { "upload" } else { cleaned.as_str() };

    let unique = unique.simple().to_string();
    let stem = format!(
        "{}/{}_{}_{}",
        category.as_str(),
        now.format("%Y%m%d_%H%M%S"),
        &unique[..8],
        safe_base
    );

    let safe_ext = extension(file_name)
        .map(|ext| ext.chars().filter(char::is_ascii_alphanumeric).collect::<String>())
        .filter(|ext| !ext.is_empty());
    match safe_ext {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    }
}

fn megabytes(bytes: &usize) -> f64 {
    *bytes as f64 / 1024.0 / 1024.0
}

fn extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}
