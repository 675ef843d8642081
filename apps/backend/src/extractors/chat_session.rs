use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use super::chat_id::ChatIdPath;
use crate::error::AppError;
use crate::services::SessionHandle;
use crate::state::AppState;

/// Session for the `{chat_id}` in the route, created on first use.
#[derive(Debug, Clone)]
pub struct ChatSession(pub SessionHandle);

impl FromRequest for ChatSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        ready(resolve(req, payload))
    }
}

fn resolve(req: &HttpRequest, payload: &mut Payload) -> Result<ChatSession, AppError> {
    let ChatIdPath(chat_id) = ChatIdPath::from_request(req, payload).into_inner()?;
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;
    Ok(ChatSession(state.sessions.get_or_create(chat_id)))
}
