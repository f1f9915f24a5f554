use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;
use wc_core::domain::value_objects::UserSummary;
use wc_core::repositories::{MorphemeRepository, UserRepository, WordRepository};
use wc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, RegisterRequest};
use crate::handlers::error::{handle_validation_errors, ApiError, Localize};
use crate::i18n::request_language;

/// Handler for POST /api/v1/auth/register
///
/// Creates a player account with a score of zero.
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "secret" }
/// ```
///
/// # Response
///
/// - 201 Created with the new account summary
/// - 400 Missing username or password, or username longer than 50 characters
/// - 409 Username already taken
pub async fn register<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    request: web::Json<RegisterRequest>,
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
        .register_player(&request.username, &request.password)
        .await
        .localized(lang)?;

    Ok(HttpResponse::Created().json(ApiResponse::success(UserSummary::from(&user))))
}

/// Handler for POST /api/v1/auth/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": {
///         "access_token": "eyJ...",
///         "token_type": "Bearer",
///         "expires_in": 3600,
///         "user": { "id": 2, "username": "alice", "role": "PLAYER", "score": 15 }
///     },
///     "timestamp": "2024-05-01T10:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Missing username or password
/// - 401 Unknown user or wrong password (same message for both)
pub async fn login<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    request: web::Json<LoginRequest>,
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

    let response = state
        .auth_service
        .login(&request.username, &request.password)
        .await
        .localized(lang)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
