use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::domain::ChatId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Chat id taken from the `{chat_id}` route segment.
///
/// Any `i64` is accepted: group chats use negative ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatIdPath(pub ChatId);

impl FromRequest for ChatIdPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_segment(req, "chat_id", ErrorCode::InvalidChatId).map(ChatIdPath))
    }
}

pub(crate) fn parse_segment(req: &HttpRequest, name: &str, code: ErrorCode) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {name} parameter")))?;
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request(code, format!("Invalid {name}: {raw}")))
}
