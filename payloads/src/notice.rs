//! User-facing (Indonesian) titles and messages for failed actions.
//!
//! A structured [`ErrorCode`] is looked up first. Errors without one fall
//! back to substring checks on the message, in a fixed order where the
//! first match wins.

use crate::{ErrorCode, ServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    AuctionEnded,
    AlreadyExists,
    NotFound,
    LoginRequired,
    Generic,
}

impl NoticeKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::AuctionEnded => "Lelang Telah Berakhir",
            Self::AlreadyExists => "Sudah Ada",
            Self::NotFound => "Item Tidak Ditemukan",
            Self::LoginRequired => "Login Diperlukan",
            Self::Generic => "Terjadi Kesalahan",
        }
    }

    fn fixed_message(&self) -> &'static str {
        match self {
            Self::AuctionEnded => {
                "Lelang ini sudah berakhir atau masa berlakunya telah habis."
            }
            Self::AlreadyExists => "Item ini sudah ada di daftar Anda.",
            Self::NotFound => {
                "Item yang Anda cari tidak ditemukan atau sudah dihapus."
            }
            Self::LoginRequired => {
                "Silakan login terlebih dahulu untuk melanjutkan."
            }
            Self::Generic => "Terjadi kesalahan. Silakan coba lagi nanti.",
        }
    }
}

impl From<ErrorCode> for NoticeKind {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::AuctionEnded => Self::AuctionEnded,
            ErrorCode::AlreadyExists => Self::AlreadyExists,
            ErrorCode::NotFound => Self::NotFound,
            ErrorCode::Unauthorized => Self::LoginRequired,
        }
    }
}

/// Ordered substring rules for errors without a code.
const MESSAGE_RULES: &[(&[&str], NoticeKind)] = &[
    (&["ended", "expired"], NoticeKind::AuctionEnded),
    (&["already exists"], NoticeKind::AlreadyExists),
    (&["not found"], NoticeKind::NotFound),
    (&["unauthorized", "login"], NoticeKind::LoginRequired),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, message: String) -> Self {
        Self {
            kind,
            title: kind.title(),
            message,
        }
    }
}

pub fn classify_message(message: &str) -> NoticeKind {
    let message = message.to_lowercase();
    MESSAGE_RULES
        .iter()
        .find(|(needles, _)| {
            needles.iter().any(|needle| message.contains(needle))
        })
        .map(|(_, kind)| *kind)
        .unwrap_or(NoticeKind::Generic)
}

/// Notice for an error that only has message text.
pub fn notice_for_message(message: &str) -> Notice {
    let kind = classify_message(message);
    notice_for_kind(kind, message)
}

/// Notice for a normalized service error.
pub fn notice_for(error: &ServiceError) -> Notice {
    let kind = match error.code {
        Some(code) => NoticeKind::from(code),
        None => classify_message(&error.message),
    };
    notice_for_kind(kind, &error.message)
}

fn notice_for_kind(kind: NoticeKind, original: &str) -> Notice {
    let message = match kind {
        NoticeKind::Generic if !original.trim().is_empty() => {
            original.trim().to_string()
        }
        _ => kind.fixed_message().to_string(),
    };
    Notice::new(kind, message)
}
