//! Conversion of domain errors into localized HTTP responses

use std::collections::HashMap;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use validator::ValidationErrors;
use wc_core::errors::{AuthError, DomainError, GameError, TokenError, ValidationError};
use wc_shared::{error_codes, ErrorResponse, Language};

use crate::i18n::{format_message, get_error_message};

/// Catalog entry for an error, with its placeholder values
struct CatalogKey {
    category: &'static str,
    key: &'static str,
    params: HashMap<&'static str, String>,
}

impl CatalogKey {
    fn new(category: &'static str, key: &'static str) -> Self {
        Self {
            category,
            key,
            params: HashMap::new(),
        }
    }

    fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.insert(name, value.to_string());
        self
    }
}

fn catalog_key(error: &DomainError) -> CatalogKey {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => CatalogKey::new("auth", "invalid_credentials"),
            AuthError::UserNotFound => CatalogKey::new("auth", "user_not_found"),
            AuthError::UserAlreadyExists => CatalogKey::new("auth", "user_already_exists"),
            AuthError::InsufficientPermissions => {
                CatalogKey::new("auth", "insufficient_permissions")
            }
            AuthError::PasswordMismatch => CatalogKey::new("auth", "password_mismatch"),
            AuthError::IncorrectPassword => CatalogKey::new("auth", "incorrect_password"),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::TokenExpired => CatalogKey::new("token", "token_expired"),
            TokenError::TokenGenerationFailed => CatalogKey::new("token", "generation_failed"),
            TokenError::InvalidTokenFormat
            | TokenError::InvalidSignature
            | TokenError::InvalidClaims => CatalogKey::new("token", "invalid_token"),
        },
        DomainError::ValidationErr(validation_error) => match validation_error {
            ValidationError::RequiredField { field } => {
                CatalogKey::new("validation", "required_field").param("field", field)
            }
            ValidationError::TooShort { field, min } => CatalogKey::new("validation", "too_short")
                .param("field", field)
                .param("min", min),
            ValidationError::OutOfRange { field, min, max } => {
                CatalogKey::new("validation", "out_of_range")
                    .param("field", field)
                    .param("min", min)
                    .param("max", max)
            }
            ValidationError::InvalidFormat { field } => {
                CatalogKey::new("validation", "invalid_format").param("field", field)
            }
            ValidationError::DuplicateValue { field } => {
                CatalogKey::new("validation", "duplicate_value").param("field", field)
            }
        },
        DomainError::Game(game_error) => match game_error {
            GameError::EmptySelection => CatalogKey::new("game", "empty_selection"),
            GameError::MorphemeNotAvailable { id } => {
                CatalogKey::new("game", "morpheme_not_available").param("id", id)
            }
            GameError::SessionNotFound => CatalogKey::new("game", "session_not_found"),
            GameError::DefinitionRequired => CatalogKey::new("game", "definition_required"),
            GameError::DefinitionMismatch {
                morpheme,
                definition,
            } => CatalogKey::new("game", "definition_mismatch")
                .param("morpheme", morpheme)
                .param("definition", definition),
            GameError::ModeNotAvailable { mode } => {
                CatalogKey::new("game", "mode_not_available").param("mode", mode)
            }
            GameError::NotAPlayer => CatalogKey::new("game", "not_a_player"),
            GameError::WrongMode { mode } => {
                CatalogKey::new("game", "wrong_mode").param("mode", mode)
            }
        },
        DomainError::Validation { .. } => CatalogKey::new("validation", "invalid_request"),
        DomainError::NotFound { resource } => {
            CatalogKey::new("general", "not_found").param("resource", resource)
        }
        DomainError::Unauthorized => CatalogKey::new("auth", "authentication_required"),
        DomainError::Database { .. } => CatalogKey::new("general", "database_error"),
        DomainError::Internal { .. } => CatalogKey::new("general", "internal_error"),
    }
}

/// Field-level details clients can use to highlight the offending input
fn add_details(response: ErrorResponse, error: &DomainError) -> ErrorResponse {
    match error {
        DomainError::ValidationErr(validation_error) => {
            response.add_detail("field", validation_error.field())
        }
        DomainError::Game(GameError::MorphemeNotAvailable { id }) => {
            response.add_detail("morpheme_id", id)
        }
        DomainError::Game(GameError::DefinitionMismatch { morpheme, .. }) => {
            response.add_detail("morpheme", morpheme)
        }
        DomainError::Validation { message } => response.add_detail("reason", message),
        _ => response,
    }
}

/// Status and localized body for a domain error
pub fn localize_domain_error(error: &DomainError, lang: Language) -> (StatusCode, ErrorResponse) {
    let key = catalog_key(error);
    let (code, template, status) = get_error_message(key.category, key.key, lang)
        .unwrap_or_else(|| {
            (
                error_codes::INTERNAL_ERROR.to_string(),
                error.to_string(),
                500,
            )
        });

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let response = ErrorResponse::new(code, format_message(&template, &key.params));
    (status, add_details(response, error))
}

/// Handle domain errors with language support
pub fn handle_domain_error_with_lang(error: &DomainError, lang: Language) -> HttpResponse {
    let (status, response) = localize_domain_error(error, lang);
    if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
    } else {
        log::debug!("Request rejected ({}): {}", status.as_u16(), error);
    }
    HttpResponse::build(status).json(response)
}

/// 400 response for a request body that failed `validator` checks
pub fn handle_validation_errors(errors: &ValidationErrors, lang: Language) -> HttpResponse {
    let message = get_error_message("validation", "invalid_request", lang)
        .map(|(_, text, _)| text)
        .unwrap_or_else(|| "Invalid request data".to_string());

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
            .add_detail("validation_errors", errors),
    )
}

/// A domain error bound to the language of the request that caused it
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: DomainError,
    pub lang: Language,
}

impl ApiError {
    pub fn new(error: impl Into<DomainError>, lang: Language) -> Self {
        Self {
            error: error.into(),
            lang,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        localize_domain_error(&self.error, self.lang).0
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error_with_lang(&self.error, self.lang)
    }
}

/// Attach the request language to a domain result
pub trait Localize<T> {
    fn localized(self, lang: Language) -> Result<T, ApiError>;
}

impl<T, E> Localize<T> for Result<T, E>
where
    E: Into<DomainError>,
{
    fn localized(self, lang: Language) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(e, lang))
    }
}
