//! Pre-flight checks for file uploads
//!
//! Oversized or mistyped files are rejected here, before any bytes go
//! over the wire. Limits match what the backend enforces on its side.

use atrium_client::FilePart;
use thiserror::Error;

/// Upper bound for training videos
pub const MAX_VIDEO_BYTES: u64 = 500 * 1024 * 1024;

/// Upper bound for PDF documents
pub const MAX_DOCUMENT_BYTES: u64 = 50 * 1024 * 1024;

/// What an upload slot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Training videos, up to [`MAX_VIDEO_BYTES`]
    Video,
    /// PDF documents, up to [`MAX_DOCUMENT_BYTES`]
    Document,
    /// Carousel and cover images
    Image,
}

impl UploadKind {
    fn label(&self) -> &'static str {
        match self {
            UploadKind::Video => "video",
            UploadKind::Document => "document",
            UploadKind::Image => "image",
        }
    }

    fn size_limit(&self) -> Option<u64> {
        match self {
            UploadKind::Video => Some(MAX_VIDEO_BYTES),
            UploadKind::Document => Some(MAX_DOCUMENT_BYTES),
            UploadKind::Image => None,
        }
    }

    fn accepts(&self, part: &FilePart) -> bool {
        let ext = part.extension().unwrap_or_default();
        match self {
            UploadKind::Video => {
                part.mime.starts_with("video/")
                    || matches!(ext.as_str(), "mp4" | "webm" | "mov" | "mkv")
            }
            UploadKind::Document => part.mime == "application/pdf" || ext == "pdf",
            UploadKind::Image => {
                part.mime.starts_with("image/")
                    || matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp")
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("{file_name} is not a {kind} file")]
    WrongType {
        kind: &'static str,
        file_name: String,
    },

    #[error("{file_name} is {size} bytes, over the {limit} byte {kind} limit")]
    TooLarge {
        kind: &'static str,
        file_name: String,
        size: u64,
        limit: u64,
    },
}

/// Check a staged file against the slot's type and size rules
pub fn check_upload(kind: UploadKind, part: &FilePart) -> Result<(), UploadError> {
    if !kind.accepts(part) {
        return Err(UploadError::WrongType {
            kind: kind.label(),
            file_name: part.file_name.clone(),
        });
    }

    if let Some(limit) = kind.size_limit() {
        if part.size() > limit {
            return Err(UploadError::TooLarge {
                kind: kind.label(),
                file_name: part.file_name.clone(),
                size: part.size(),
                limit,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part_of_size(file_name: &str, mime: &str, size: u64) -> FilePart {
        FilePart::new(file_name, mime, vec![0u8; size as usize])
    }

    #[test]
    fn test_video_at_limit_passes() {
        let part = part_of_size("intro.mp4", "video/mp4", MAX_VIDEO_BYTES);
        assert!(check_upload(UploadKind::Video, &part).is_ok());
    }

    #[test]
    fn test_video_over_limit_is_rejected() {
        let part = part_of_size("intro.mp4", "video/mp4", MAX_VIDEO_BYTES + 1);
        let err = check_upload(UploadKind::Video, &part).expect_err("must reject");
        assert!(matches!(err, UploadError::TooLarge { .. }));
    }

    #[test]
    fn test_document_over_limit_is_rejected() {
        let part = part_of_size("rules.pdf", "application/pdf", MAX_DOCUMENT_BYTES + 1);
        let err = check_upload(UploadKind::Document, &part).expect_err("must reject");
        assert!(matches!(
            err,
            UploadError::TooLarge {
                limit: MAX_DOCUMENT_BYTES,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_type_is_rejected_regardless_of_size() {
        let part = FilePart::new("setup.exe", "application/octet-stream", vec![1, 2, 3]);
        let err = check_upload(UploadKind::Video, &part).expect_err("must reject");
        assert!(matches!(err, UploadError::WrongType { .. }));
    }

    #[test]
    fn test_extension_alone_is_enough() {
        // Browsers sometimes send a generic MIME type
        let part = FilePart::new("clip.webm", "application/octet-stream", vec![0u8; 16]);
        assert!(check_upload(UploadKind::Video, &part).is_ok());
    }

    #[test]
    fn test_images_have_no_size_cap() {
        let part = part_of_size("banner.png", "image/png", MAX_DOCUMENT_BYTES + 1);
        assert!(check_upload(UploadKind::Image, &part).is_ok());
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let part = FilePart::new("SCAN.PDF", "application/octet-stream", vec![0u8; 8]);
        assert!(check_upload(UploadKind::Document, &part).is_ok());
    }
}
