use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use super::chat_id::parse_segment;
use crate::domain::PlayerId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// User id taken from the `{user_id}` route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub PlayerId);

impl FromRequest for UserIdPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_segment(req, "user_id", ErrorCode::InvalidUserId).map(UserIdPath))
    }
}
