use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use wc_core::domain::value_objects::UserSummary;
use wc_core::repositories::{MorphemeRepository, UserRepository, WordRepository};
use wc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::account::{
    AccountDeletedResponse, FoundWordsResponse, UpdatePasswordRequest, UpdateUsernameRequest,
};
use crate::handlers::error::{handle_validation_errors, ApiError, Localize};
use crate::i18n::request_language;
use crate::middleware::auth::AuthContext;

/// GET /api/v1/account
pub async fn profile<U, M, W>(
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
    let user = state.auth_service.profile(auth.user_id).await.localized(lang)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserSummary::from(&user))))
}

/// PUT /api/v1/account/username
///
/// The token keeps the old username until the next login; handlers only
/// trust its user id.
pub async fn update_username<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    request: web::Json<UpdateUsernameRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors, lang));
    }

    let user = state
        .auth_service
        .update_username(auth.user_id, &request.username)
        .await
        .localized(lang)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(UserSummary::from(&user))))
}

/// PUT /api/v1/account/password
pub async fn update_password<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    request: web::Json<UpdatePasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors, lang));
    }

    state
        .auth_service
        .update_password(
            auth.user_id,
            &request.old_password,
            &request.new_password,
            &request.confirm_password,
        )
        .await
        .localized(lang)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(json!({ "updated": true }))))
}

/// DELETE /api/v1/account
///
/// Removes the account and the words it found, then closes its open game
/// sessions.
pub async fn delete_account<U, M, W>(
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
    state
        .auth_service
        .delete_account(auth.user_id)
        .await
        .localized(lang)?;
    let ended_sessions = state.game_play.end_sessions_for(auth.user_id).await;

    log::info!(
        "Account {} ({}) deleted, {} session(s) ended",
        auth.user_id,
        auth.username,
        ended_sessions
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(AccountDeletedResponse { ended_sessions })))
}

/// GET /api/v1/account/words
pub async fn found_words<U, M, W>(
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
    let words = state
        .player_service
        .found_words(auth.user_id)
        .await
        .localized(lang)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(FoundWordsResponse::from(words))))
}
