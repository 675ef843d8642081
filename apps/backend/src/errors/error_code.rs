//! Error codes for the Durak backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Invalid chat id in the route
    InvalidChatId,
    /// Invalid user id in the route or body
    InvalidUserId,
    /// Card token could not be parsed
    ParseCard,
    /// Trump derivation on an empty deck
    EmptyDeck,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// No session stored under the key
    SessionNotFound,
    /// User is not registered in the session
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Session Conflicts
    /// Join attempted after the first deal
    GameAlreadyStarted,
    /// Join attempted by a registered player
    PlayerAlreadyJoined,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidChatId => "INVALID_CHAT_ID",
            Self::InvalidUserId => "INVALID_USER_ID",
            Self::ParseCard => "PARSE_CARD",
            Self::EmptyDeck => "EMPTY_DECK",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::PlayerAlreadyJoined => "PLAYER_ALREADY_JOINED",
            Self::Conflict => "CONFLICT",

            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
