//! Session HTTP routes under `/api/sessions`.
//!
//! Thin adapter over `SessionHandle`: each handler performs one handle
//! operation and returns the public projection. Hands are only served by
//! the per-player `hand` route.

use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::{ChatIdPath, ChatSession, UserIdPath, ValidatedJson};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub user_id: i64,
}

/// GET /api/sessions/{chat_id}
async fn get_snapshot(session: ChatSession) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(session.0.project()))
}

/// POST /api/sessions/{chat_id}/players
///
/// 409 `GAME_ALREADY_STARTED` after a deal, 409 `PLAYER_ALREADY_JOINED` on a repeat.
/// The session is resolved only once the body has been read and parsed.
async fn join(
    chat_id: ChatIdPath,
    body: ValidatedJson<JoinRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let handle = app_state.sessions.get_or_create(chat_id.0);
    handle.add_player(body.user_id)?;
    Ok(HttpResponse::Ok().json(handle.project()))
}

/// DELETE /api/sessions/{chat_id}/players/{user_id}
async fn leave(session: ChatSession, user: UserIdPath) -> Result<HttpResponse, AppError> {
    let ChatSession(handle) = session;
    handle.remove_player(user.0)?;
    Ok(HttpResponse::Ok().json(handle.project()))
}

/// POST /api/sessions/{chat_id}/deal
async fn deal(session: ChatSession) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(session.0.deal()))
}

/// POST /api/sessions/{chat_id}/turn
///
/// Moves the turn pointer to the next player. No play is validated.
async fn advance_turn(session: ChatSession) -> Result<HttpResponse, AppError> {
    let ChatSession(handle) = session;
    handle.advance_turn();
    Ok(HttpResponse::Ok().json(handle.project()))
}

/// GET /api/sessions/{chat_id}/players/{user_id}/hand
///
/// 404 `PLAYER_NOT_FOUND` unless the user has joined this chat.
///
/// Serves the cards of whichever `{user_id}` is in the path. There is no
/// caller authentication here; the fronting bot must only forward a user's
/// own id on this route.
async fn get_hand(session: ChatSession, user: UserIdPath) -> Result<HttpResponse, AppError> {
    let view = session.0.player_view(user.0)?;
    Ok(HttpResponse::Ok().json(view))
}

/// DELETE /api/sessions/{chat_id}
async fn close(
    chat_id: ChatIdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.sessions.remove(chat_id.0)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{chat_id}")
            .route(web::get().to(get_snapshot))
            .route(web::delete().to(close)),
    )
    .service(web::resource("/{chat_id}/players").route(web::post().to(join)))
    .service(web::resource("/{chat_id}/players/{user_id}").route(web::delete().to(leave)))
    .service(web::resource("/{chat_id}/players/{user_id}/hand").route(web::get().to(get_hand)))
    .service(web::resource("/{chat_id}/deal").route(web::post().to(deal)))
    .service(web::resource("/{chat_id}/turn").route(web::post().to(advance_turn)));
}
