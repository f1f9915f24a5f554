//! Application state and factory
//!
//! This module wires the core services into the application state and
//! provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::{JsonPayloadError, PathError},
    middleware::{Condition, Logger},
    web, App, Error, HttpRequest, HttpResponse,
};
use wc_core::errors::{DomainError, GameError};
use wc_core::repositories::{MorphemeRepository, UserRepository, WordRepository};
use wc_core::services::{
    AuthService, AuthServiceConfig, EditorService, GamePlay, GameService, PlayerService,
    TokenService, TokenServiceConfig,
};
use wc_shared::{
    error_codes, AppConfig, AuthConfig, ErrorResponse, HealthResponse, HealthStatus,
};

use crate::handlers::error::ApiError;
use crate::i18n::{get_error_message, request_language};
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{account, auth, editor, game};

pub const SERVICE_NAME: &str = "wordcrafter-api";

/// Services shared by every worker
pub struct AppState<U, M, W>
where
    U: UserRepository,
    M: MorphemeRepository,
    W: WordRepository,
{
    pub user_repository: Arc<U>,
    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService<U>>,
    pub game_service: Arc<GameService<M, W>>,
    pub player_service: Arc<PlayerService<U, W>>,
    pub game_play: Arc<GamePlay<U, M, W>>,
    pub editor_service: Arc<EditorService<U, M, W>>,
}

impl<U, M, W> AppState<U, M, W>
where
    U: UserRepository,
    M: MorphemeRepository,
    W: WordRepository,
{
    pub fn new(
        user_repository: Arc<U>,
        morpheme_repository: Arc<M>,
        word_repository: Arc<W>,
        config: &AuthConfig,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            Arc::clone(&token_service),
            AuthServiceConfig::from(&config.password),
        ));
        let game_service = Arc::new(GameService::new(
            Arc::clone(&morpheme_repository),
            Arc::clone(&word_repository),
        ));
        let player_service = Arc::new(PlayerService::new(
            Arc::clone(&user_repository),
            Arc::clone(&word_repository),
        ));
        let game_play = Arc::new(GamePlay::new(
            Arc::clone(&user_repository),
            Arc::clone(&game_service),
            Arc::clone(&player_service),
        ));
        let editor_service = Arc::new(EditorService::new(
            morpheme_repository,
            word_repository,
            Arc::clone(&auth_service),
        ));

        Self {
            user_repository,
            token_service,
            auth_service,
            game_service,
            player_service,
            game_play,
            editor_service,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, M, W>(
    app_state: web::Data<AppState<U, M, W>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let cors = create_cors(config.environment, &config.server.allowed_origins);
    let jwt = JwtAuth::new(Arc::clone(&app_state.token_service));

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .wrap(cors)
        .wrap(Condition::new(config.logging.access_log, Logger::default()))
        .route("/health", web::get().to(health_check::<U, M, W>))
        .service(
            web::scope("/api/v1")
                .route("/", web::get().to(api_documentation))
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, M, W>))
                        .route("/login", web::post().to(auth::login::<U, M, W>)),
                )
                .service(
                    web::scope("/account")
                        .wrap(jwt.clone())
                        .route("", web::get().to(account::profile::<U, M, W>))
                        .route("", web::delete().to(account::delete_account::<U, M, W>))
                        .route(
                            "/username",
                            web::put().to(account::update_username::<U, M, W>),
                        )
                        .route(
                            "/password",
                            web::put().to(account::update_password::<U, M, W>),
                        )
                        .route("/words", web::get().to(account::found_words::<U, M, W>)),
                )
                .service(
                    web::scope("/game")
                        .wrap(jwt.clone())
                        .route("/morphemes", web::get().to(game::morphemes::<U, M, W>))
                        .route("/sessions", web::post().to(game::start_session::<U, M, W>))
                        .route("/sessions/{id}", web::get().to(game::session::<U, M, W>))
                        .route(
                            "/sessions/{id}",
                            web::delete().to(game::end_session::<U, M, W>),
                        )
                        .route(
                            "/sessions/{id}/toggle",
                            web::post().to(game::toggle::<U, M, W>),
                        )
                        .route("/sessions/{id}/clear", web::post().to(game::clear::<U, M, W>))
                        .route(
                            "/sessions/{id}/new-round",
                            web::post().to(game::new_round::<U, M, W>),
                        )
                        .route(
                            "/sessions/{id}/verify",
                            web::post().to(game::verify::<U, M, W>),
                        )
                        .route(
                            "/sessions/{id}/submit",
                            web::post().to(game::submit::<U, M, W>),
                        ),
                )
                .service(
                    web::scope("/editor")
                        .wrap(jwt)
                        .route(
                            "/morphemes",
                            web::get().to(editor::list_morphemes::<U, M, W>),
                        )
                        .route(
                            "/morphemes",
                            web::post().to(editor::add_morpheme::<U, M, W>),
                        )
                        .route("/words", web::get().to(editor::list_words::<U, M, W>))
                        .route("/words", web::post().to(editor::add_word::<U, M, W>))
                        .route("/admins", web::post().to(editor::create_admin::<U, M, W>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Malformed or mistyped JSON bodies
fn json_error(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log::debug!("Rejected JSON body on {}: {}", req.path(), err);
    ApiError::new(
        DomainError::Validation {
            message: err.to_string(),
        },
        request_language(req),
    )
    .into()
}

/// Path segments only carry session ids, so an unparsable one names no session
fn path_error(err: PathError, req: &HttpRequest) -> Error {
    log::debug!("Rejected path {}: {}", req.path(), err);
    ApiError::new(GameError::SessionNotFound, request_language(req)).into()
}

/// Health check endpoint handler
async fn health_check<U, M, W>(state: web::Data<AppState<U, M, W>>) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MorphemeRepository + 'static,
    W: WordRepository + 'static,
{
    let database = match state.user_repository.count().await {
        Ok(_) => HealthStatus::Healthy,
        Err(e) => {
            log::warn!("Health check could not reach the database: {}", e);
            HealthStatus::Unhealthy
        }
    };

    let health = HealthResponse::new(SERVICE_NAME, env!("CARGO_PKG_VERSION"), database);
    if database == HealthStatus::Healthy {
        HttpResponse::Ok().json(health)
    } else {
        HttpResponse::ServiceUnavailable().json(health)
    }
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "WordCrafter API v1",
        "endpoints": {
            "health": { "path": "/health", "method": "GET" },
            "auth": {
                "register": { "path": "/api/v1/auth/register", "method": "POST", "body": { "username": "string (max 50)", "password": "string" } },
                "login": { "path": "/api/v1/auth/login", "method": "POST", "body": { "username": "string", "password": "string" } }
            },
            "account": {
                "requires_auth": true,
                "profile": { "path": "/api/v1/account", "method": "GET" },
                "delete": { "path": "/api/v1/account", "method": "DELETE" },
                "rename": { "path": "/api/v1/account/username", "method": "PUT", "body": { "username": "string" } },
                "password": { "path": "/api/v1/account/password", "method": "PUT", "body": { "old_password": "string", "new_password": "string", "confirm_password": "string" } },
                "found_words": { "path": "/api/v1/account/words", "method": "GET" }
            },
            "game": {
                "requires_auth": true,
                "role": "PLAYER",
                "morphemes": { "path": "/api/v1/game/morphemes", "method": "GET" },
                "start": { "path": "/api/v1/game/sessions", "method": "POST", "body": { "mode": "main_game | free_build | prefix_matcher" } },
                "session": { "path": "/api/v1/game/sessions/{id}", "method": "GET" },
                "end": { "path": "/api/v1/game/sessions/{id}", "method": "DELETE" },
                "toggle": { "path": "/api/v1/game/sessions/{id}/toggle", "method": "POST", "body": { "morpheme_id": "integer" } },
                "clear": { "path": "/api/v1/game/sessions/{id}/clear", "method": "POST" },
                "new_round": { "path": "/api/v1/game/sessions/{id}/new-round", "method": "POST" },
                "verify": { "path": "/api/v1/game/sessions/{id}/verify", "method": "POST" },
                "submit": { "path": "/api/v1/game/sessions/{id}/submit", "method": "POST", "body": { "definition": "string" } }
            },
            "editor": {
                "requires_auth": true,
                "role": "ADMIN",
                "morphemes": { "path": "/api/v1/editor/morphemes", "method": "GET | POST", "body": { "text": "string", "definition": "string" } },
                "words": { "path": "/api/v1/editor/words", "method": "GET | POST", "body": { "text": "string", "morpheme_ids": "[integer]", "points": "integer (1-100)", "definition": "string" } },
                "admins": { "path": "/api/v1/editor/admins", "method": "POST", "body": { "username": "string", "password": "string", "confirm_password": "string" } }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found(req: HttpRequest) -> HttpResponse {
    let lang = request_language(&req);
    let (code, message) = get_error_message("general", "route_not_found", lang)
        .map(|(code, message, _)| (code, message))
        .unwrap_or_else(|| {
            (
                error_codes::NOT_FOUND.to_string(),
                "The requested resource was not found".to_string(),
            )
        });

    HttpResponse::NotFound().json(ErrorResponse::new(code, message).add_detail("path", req.path()))
}
