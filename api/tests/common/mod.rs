//! Shared harness for the API integration tests
//!
//! Builds the real application around the in-memory repositories of
//! `wc_core`, preloaded with the default morphemes and two dictionary words.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    test, web, Error,
};
use serde_json::Value;
use wc_api::AppState;
use wc_core::domain::entities::user::{NewUser, User};
use wc_core::domain::entities::word::NewWord;
use wc_core::repositories::{
    MockMorphemeRepository, MockUserRepository, MockWordRepository, UserRepository,
    WordRepository,
};
use wc_core::services::auth::hash_password;
use wc_shared::{AppConfig, Environment};

pub type TestState = AppState<MockUserRepository, MockMorphemeRepository, MockWordRepository>;

pub const PASSWORD: &str = "secret";
pub const JWT_SECRET: &str = "integration-test-secret";

pub const MORPHEMES: [(&str, &str); 9] = [
    ("dé", "Enlever ou inverser"),
    ("re", "De nouveau ou en arrière"),
    ("pré", "Avant"),
    ("jouer", "Pratiquer un jeu ou un divertissement"),
    ("faire", "Accomplir une action"),
    ("voir", "Percevoir avec les yeux"),
    ("able", "Capable d'être"),
    ("ment", "De manière"),
    ("tion", "Action ou procédé"),
];

/// Ids of the seeded morphemes
pub const RE: i64 = 2;
pub const PRE: i64 = 3;
pub const FAIRE: i64 = 5;
pub const VOIR: i64 = 6;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub config: AppConfig,
    pub users: Arc<MockUserRepository>,
    pub words: Arc<MockWordRepository>,
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default_for(Environment::Development);
    config.logging.access_log = false;
    config.auth.jwt.secret = JWT_SECRET.to_string();
    config.auth.password.bcrypt_cost = 4;
    config
}

pub async fn setup() -> TestContext {
    let config = test_config();
    let users = Arc::new(MockUserRepository::new());
    let morphemes = Arc::new(MockMorphemeRepository::with_morphemes(&MORPHEMES));
    let words = Arc::new(MockWordRepository::new());

    words
        .create(NewWord::new(
            "refaire",
            vec![RE, FAIRE],
            5,
            "Faire de nouveau, recommencer une action",
        ))
        .await
        .unwrap();
    words
        .create(NewWord::new(
            "prévoir",
            vec![PRE, VOIR],
            5,
            "Anticiper ou prévoir ce qui va se passer",
        ))
        .await
        .unwrap();

    let state = web::Data::new(AppState::new(
        Arc::clone(&users),
        morphemes,
        Arc::clone(&words),
        &config.auth,
    ));

    TestContext {
        state,
        config,
        users,
        words,
    }
}

/// Initialise the full application for a context
macro_rules! init_app {
    ($ctx:expr) => {
        actix_web::test::init_service(wc_api::create_app($ctx.state.clone(), &$ctx.config)).await
    };
}

impl TestContext {
    /// Store an account directly and sign a token for it
    pub async fn create_user(&self, new_user: NewUser) -> (User, String) {
        let user = self.users.create(new_user).await.unwrap();
        let token = self.state.token_service.generate_access_token(&user).unwrap();
        (user, token)
    }

    pub async fn player(&self, username: &str) -> (User, String) {
        let hash = hash_password(PASSWORD, 4).await.unwrap();
        self.create_user(NewUser::player(username, hash)).await
    }

    pub async fn admin(&self, username: &str) -> (User, String) {
        let hash = hash_password(PASSWORD, 4).await.unwrap();
        self.create_user(NewUser::admin(username, hash)).await
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Send a request and return the status with the parsed JSON body
pub async fn send<S, R, B>(app: &S, req: R) -> (u16, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body = test::read_body(resp).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}
