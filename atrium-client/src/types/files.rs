//! File upload and popup carousel types

use serde::{Deserialize, Serialize};

/// File contents staged for a multipart upload
#[derive(Clone, Debug)]
pub struct FilePart {
    pub file_name: String,
    /// MIME type sent with the part, e.g. "application/pdf"
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Size of the staged payload in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Lowercased extension of the file name, if it has one
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// Stored file handle returned by the upload endpoint
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub id: String,
    pub file_name: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub mime: Option<String>,
}

/// One image in the portal popup carousel.
///
/// Images have no id of their own; the server-side path both identifies
/// the image and fixes its slot in the display order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PopupImage {
    pub path: String,
}

/// Body of the popup order save call: every path, first-to-last
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PopupOrderRequest {
    pub images: Vec<String>,
}
