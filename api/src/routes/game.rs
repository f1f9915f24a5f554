//! Player game sessions
//!
//! Every handler first checks that the caller is a player. Session ids are
//! only visible to the player who started them; anyone else gets 404.

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;
use wc_core::repositories::{MorphemeRepository, UserRepository, WordRepository};
use wc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::game::{StartSessionRequest, SubmitRequest, ToggleRequest};
use crate::handlers::error::{handle_validation_errors, ApiError, Localize};
use crate::i18n::request_language;
use crate::middleware::auth::AuthContext;

/// GET /api/v1/game/morphemes
pub async fn morphemes<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_player().localized(lang)?;

    let morphemes = state
        .game_service
        .available_morphemes()
        .await
        .localized(lang)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(morphemes)))
}

/// POST /api/v1/game/sessions
///
/// `{"mode": "main_game"}` offers the 3x3 grid, `free_build` every morpheme.
/// `prefix_matcher` answers 501.
pub async fn start_session<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    request: web::Json<StartSessionRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_player().localized(lang)?;

    let view = state
        .game_play
        .start_session(auth.user_id, request.mode)
        .await
        .localized(lang)?;
    Ok(HttpResponse::Created().json(ApiResponse::success(view)))
}

/// GET /api/v1/game/sessions/{id}
pub async fn session<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_player().localized(lang)?;

    let view = state
        .game_play
        .session(auth.user_id, path.into_inner())
        .await
        .localized(lang)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(view)))
}

/// DELETE /api/v1/game/sessions/{id}
pub async fn end_session<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_player().localized(lang)?;

    state
        .game_play
        .end(auth.user_id, path.into_inner())
        .await
        .localized(lang)?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/v1/game/sessions/{id}/toggle
///
/// Selects the morpheme, or deselects it when already selected.
pub async fn toggle<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<ToggleRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_player().localized(lang)?;

    let view = state
        .game_play
        .toggle(auth.user_id, path.into_inner(), request.morpheme_id)
        .await
        .localized(lang)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(view)))
}

/// POST /api/v1/game/sessions/{id}/clear
pub async fn clear<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_player().localized(lang)?;

    let view = state
        .game_play
        .clear(auth.user_id, path.into_inner())
        .await
        .localized(lang)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(view)))
}

/// POST /api/v1/game/sessions/{id}/new-round
pub async fn new_round<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_player().localized(lang)?;

    let view = state
        .game_play
        .new_round(auth.user_id, path.into_inner())
        .await
        .localized(lang)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(view)))
}

/// POST /api/v1/game/sessions/{id}/verify
///
/// Main game only. An unknown combination is not an error: the body has
/// `"valid": false` and the selection is cleared all the same.
pub async fn verify<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_player().localized(lang)?;

    let outcome = state
        .game_play
        .verify_word(auth.user_id, path.into_inner())
        .await
        .localized(lang)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(outcome)))
}

/// POST /api/v1/game/sessions/{id}/submit
///
/// Free build only. A definition that does not mention every selected
/// morpheme answers 400 and keeps the selection.
pub async fn submit<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    request: web::Json<SubmitRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_player().localized(lang)?;
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors, lang));
    }

    let outcome = state
        .game_play
        .submit_free_build(auth.user_id, path.into_inner(), &request.definition)
        .await
        .localized(lang)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(outcome)))
}
