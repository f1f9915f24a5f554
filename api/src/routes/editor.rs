//! Dictionary maintenance, restricted to admins

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;
use wc_core::domain::value_objects::UserSummary;
use wc_core::repositories::{MorphemeRepository, UserRepository, WordRepository};
use wc_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::editor::{AddMorphemeRequest, AddWordRequest, CreateAdminRequest};
use crate::handlers::error::{handle_validation_errors, ApiError, Localize};
use crate::i18n::request_language;
use crate::middleware::auth::AuthContext;

/// GET /api/v1/editor/morphemes
pub async fn list_morphemes<U, M, W>(
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
    auth.require_admin().localized(lang)?;

    let morphemes = state.editor_service.all_morphemes().await.localized(lang)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(morphemes)))
}

/// POST /api/v1/editor/morphemes
pub async fn add_morpheme<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    request: web::Json<AddMorphemeRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_admin().localized(lang)?;
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors, lang));
    }

    let morpheme = state
        .editor_service
        .add_morpheme(&request.text, &request.definition)
        .await
        .localized(lang)?;
    log::info!("Admin {} added morpheme {}", auth.username, morpheme.text);
    Ok(HttpResponse::Created().json(ApiResponse::success(morpheme)))
}

/// GET /api/v1/editor/words
pub async fn list_words<U, M, W>(
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
    auth.require_admin().localized(lang)?;

    let words = state.editor_service.all_words().await.localized(lang)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(words)))
}

/// POST /api/v1/editor/words
///
/// # Request Body
///
/// ```json
/// {
///     "text": "refaire",
///     "morpheme_ids": [2, 5],
///     "points": 5,
///     "definition": "Faire de nouveau"
/// }
/// ```
///
/// ## Errors
/// - 400 Missing field, unknown morpheme id, points outside 1..=100
/// - 409 A word with this text already exists
pub async fn add_word<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    request: web::Json<AddWordRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_admin().localized(lang)?;
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors, lang));
    }

    let word = state
        .editor_service
        .add_word(
            &request.text,
            &request.morpheme_ids,
            request.points,
            &request.definition,
        )
        .await
        .localized(lang)?;
    log::info!("Admin {} added word {}", auth.username, word.text);
    Ok(HttpResponse::Created().json(ApiResponse::success(word)))
}

/// POST /api/v1/editor/admins
pub async fn create_admin<U, M, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, M, W>>,
    auth: AuthContext,
    request: web::Json<CreateAdminRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let lang = request_language(&req);
    auth.require_admin().localized(lang)?;
    if let Err(errors) = request.validate() {
        return Ok(handle_validation_errors(&errors, lang));
    }

    let admin = state
        .editor_service
        .create_admin(
            &request.username,
            &request.password,
            &request.confirm_password,
        )
        .await
        .localized(lang)?;
    log::info!("Admin {} created admin account {}", auth.username, admin.username);
    Ok(HttpResponse::Created().json(ApiResponse::success(UserSummary::from(&admin))))
}
