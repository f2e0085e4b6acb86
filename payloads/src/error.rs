//! The single error shape that service functions hand to the UI.

use crate::{ClientError, responses::ErrorBody};

/// Machine-readable error codes the backend may attach to an error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    AuctionEnded,
    AlreadyExists,
    NotFound,
    Unauthorized,
}

impl ErrorCode {
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "AUCTION_ENDED" | "AUCTION_EXPIRED" => Some(Self::AuctionEnded),
            "ALREADY_EXISTS" => Some(Self::AlreadyExists),
            "NOT_FOUND" => Some(Self::NotFound),
            "UNAUTHORIZED" => Some(Self::Unauthorized),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuctionEnded => "AUCTION_ENDED",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
        }
    }
}

/// A failed service call reduced to a displayable message.
///
/// Status codes and the rest of the response are intentionally dropped;
/// only the backend's message (or the caller's fallback) and a known error
/// code survive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ServiceError {
    pub message: String,
    pub code: Option<ErrorCode>,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Normalize a transport error. The backend's `message` wins when the
    /// response body carries a non-empty one; otherwise `fallback` is used.
    pub fn from_client(error: &ClientError, fallback: &str) -> Self {
        let body = match error {
            ClientError::APIError(_, text) => {
                serde_json::from_str::<ErrorBody>(text).ok()
            }
            ClientError::Network(_) => None,
        };
        let Some(body) = body else {
            return Self::new(fallback);
        };

        let message = body
            .message
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        let code = body.code.as_deref().and_then(ErrorCode::parse);
        Self { message, code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn api_error(status: StatusCode, body: &str) -> ClientError {
        ClientError::APIError(status, body.to_string())
    }

    #[test]
    fn backend_message_wins() {
        let error = api_error(
            StatusCode::NOT_FOUND,
            r#"{"message":"Auction not found","code":"NOT_FOUND"}"#,
        );
        let normalized = ServiceError::from_client(&error, "fallback");
        assert_eq!(normalized.message, "Auction not found");
        assert_eq!(normalized.code, Some(ErrorCode::NotFound));
        assert_eq!(normalized.to_string(), "Auction not found");
    }

    #[test]
    fn fallback_when_body_has_no_message() {
        let fallback = "Gagal memuat galeri";
        for body in ["", "Internal Server Error", "{}", r#"{"message":""}"#]
        {
            let error = api_error(StatusCode::INTERNAL_SERVER_ERROR, body);
            let normalized = ServiceError::from_client(&error, fallback);
            assert_eq!(normalized.message, fallback, "body: {body:?}");
            assert_eq!(normalized.code, None);
        }
    }

    #[test]
    fn unknown_codes_are_dropped() {
        let error = api_error(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Bid too low","code":"BID_TOO_LOW"}"#,
        );
        let normalized = ServiceError::from_client(&error, "fallback");
        assert_eq!(normalized.message, "Bid too low");
        assert_eq!(normalized.code, None);
    }

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!(ErrorCode::parse("unauthorized"), Some(ErrorCode::Unauthorized));
        assert_eq!(ErrorCode::parse("AUCTION_EXPIRED"), Some(ErrorCode::AuctionEnded));
        assert_eq!(ErrorCode::parse("nope"), None);
    }
}
