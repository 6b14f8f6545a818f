//! Response payloads returned to the chat client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a message could not be turned into a download link.
///
/// The `Display` text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("مش فاهم اسم المادة 😕 (مثال: algorithm / math)")]
    SubjectNotRecognized,

    #[error("مش فاهم رقم المحاضرة 😕 (مثال: الأولى / 1 / first)")]
    LectureNumberNotRecognized,

    #[error("محاضرة {lecture} لمادة {subject} مش موجودة.")]
    ResourceNotFound { subject: String, lecture: u32 },
}

/// JSON body answered for every message, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponsePayload {
    Error {
        message: String,
    },
    File {
        message: String,
        download_url: String,
    },
}

impl ResponsePayload {
    /// Success payload for `file`, linked under `download_prefix`.
    #[must_use]
    pub fn file(subject: &str, lecture: u32, file: &str, download_prefix: &str) -> Self {
        Self::File {
            message: format!("تمام ✅ دي محاضرة {lecture} من مادة {subject}"),
            download_url: format!("{}/{file}", download_prefix.trim_end_matches('/')),
        }
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Error { message } | Self::File { message, .. } => message,
        }
    }

    #[must_use]
    pub fn download_url(&self) -> Option<&str> {
        match self {
            Self::File { download_url, .. } => Some(download_url),
            Self::Error { .. } => None,
        }
    }
}

impl From<ResolveError> for ResponsePayload {
    fn from(err: ResolveError) -> Self {
        Self::Error {
            message: err.to_string(),
        }
    }
}
