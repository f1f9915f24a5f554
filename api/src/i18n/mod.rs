//! Localized error messages
//!
//! The catalog is compiled into the binary from `error_messages.toml`.

use std::collections::HashMap;

use actix_web::{http::header, HttpRequest};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use wc_shared::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub en: String,
    pub fr: String,
    pub code: String,
    pub http_status: u16,
}

impl ErrorMessage {
    pub fn text(&self, lang: Language) -> &str {
        match lang {
            Language::English => &self.en,
            Language::French => &self.fr,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessages {
    pub auth: HashMap<String, ErrorMessage>,
    pub token: HashMap<String, ErrorMessage>,
    pub validation: HashMap<String, ErrorMessage>,
    pub game: HashMap<String, ErrorMessage>,
    pub general: HashMap<String, ErrorMessage>,
}

impl ErrorMessages {
    pub fn get(&self, category: &str, key: &str) -> Option<&ErrorMessage> {
        let category_map = match category {
            "auth" => &self.auth,
            "token" => &self.token,
            "validation" => &self.validation,
            "game" => &self.game,
            "general" => &self.general,
            _ => return None,
        };
        category_map.get(key)
    }
}

pub static ERROR_MESSAGES: Lazy<ErrorMessages> = Lazy::new(|| {
    toml::from_str(include_str!("error_messages.toml")).expect("Failed to load error messages")
});

/// Localized `(code, message, http_status)` for a catalog entry
pub fn get_error_message(category: &str, key: &str, lang: Language) -> Option<(String, String, u16)> {
    ERROR_MESSAGES
        .get(category, key)
        .map(|msg| (msg.code.clone(), msg.text(lang).to_string(), msg.http_status))
}

/// Replace `{name}` placeholders
pub fn format_message(template: &str, params: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

/// Language preferred by the client's `Accept-Language` header
pub fn request_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_every_entry_is_translated() {
        let messages = &*ERROR_MESSAGES;
        for map in [
            &messages.auth,
            &messages.token,
            &messages.validation,
            &messages.game,
            &messages.general,
        ] {
            for (key, msg) in map {
                assert!(!msg.en.is_empty(), "missing English text for {}", key);
                assert!(!msg.fr.is_empty(), "missing French text for {}", key);
                assert!((400..600).contains(&msg.http_status), "bad status for {}", key);
            }
        }
    }

    #[test]
    fn test_get_error_message() {
        let (code, text, status) =
            get_error_message("auth", "invalid_credentials", Language::French).unwrap();
        assert_eq!(code, "INVALID_CREDENTIALS");
        assert_eq!(text, "Nom d'utilisateur ou mot de passe incorrect");
        assert_eq!(status, 401);

        assert!(get_error_message("auth", "missing", Language::English).is_none());
        assert!(get_error_message("sms", "invalid_credentials", Language::English).is_none());
    }

    #[test]
    fn test_format_message() {
        let mut params = HashMap::new();
        params.insert("field", "username".to_string());
        params.insert("min", "3".to_string());

        let (_, template, _) = get_error_message("validation", "too_short", Language::English).unwrap();
        assert_eq!(
            format_message(&template, &params),
            "The field 'username' must be at least 3 characters long"
        );
    }

    #[test]
    fn test_request_language() {
        let req = TestRequest::default()
            .insert_header((header::ACCEPT_LANGUAGE, "fr-FR,fr;q=0.9,en;q=0.8"))
            .to_http_request();
        assert_eq!(request_language(&req), Language::French);

        let req = TestRequest::default().to_http_request();
        assert_eq!(request_language(&req), Language::English);
    }
}
