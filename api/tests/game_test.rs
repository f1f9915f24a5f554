//! Integration tests for player game sessions

#[macro_use]
mod common;

use actix_web::test;
use serde_json::{json, Value};
use wc_core::repositories::{UserRepository, WordRepository};

use common::{bearer, send, setup, FAIRE, PRE, RE, VOIR};

fn session_id(body: &Value) -> String {
    body["data"]["id"].as_str().unwrap().to_string()
}

#[actix_web::test]
async fn test_main_game_round_trip() {
    let ctx = setup().await;
    let (alice, token) = ctx.player("alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/game/sessions")
        .insert_header(bearer(&token))
        .set_json(json!({ "mode": "main_game" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 201);
    assert_eq!(body["data"]["mode"], "main_game");
    assert_eq!(body["data"]["available_morphemes"].as_array().unwrap().len(), 9);
    let id = session_id(&body);

    for morpheme_id in [RE, FAIRE] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/game/sessions/{}/toggle", id))
            .insert_header(bearer(&token))
            .set_json(json!({ "morpheme_id": morpheme_id }))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, 200);
        assert_eq!(body["data"]["events"][0]["type"], "morpheme_selected");
    }

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/game/sessions/{}/verify", id))
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["valid"], true);
    assert_eq!(body["data"]["text"], "refaire");
    assert_eq!(body["data"]["word"]["points"], 5);
    assert_eq!(body["data"]["session"]["score"], 5);
    assert!(body["data"]["session"]["selected_morphemes"]
        .as_array()
        .unwrap()
        .is_empty());

    let stored = ctx.users.find_by_id(alice.id).await.unwrap().unwrap();
    assert_eq!(stored.score, 5);
    assert_eq!(ctx.words.list_player_words(alice.id).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_unknown_combination_is_not_an_error() {
    let ctx = setup().await;
    let (alice, token) = ctx.player("alice").await;
    let view = ctx
        .state
        .game_play
        .start_session(alice.id, wc_core::domain::value_objects::GameMode::MainGame)
        .await
        .unwrap();
    for morpheme_id in [FAIRE, RE] {
        ctx.state
            .game_play
            .toggle(alice.id, view.id, morpheme_id)
            .await
            .unwrap();
    }
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/game/sessions/{}/verify", view.id))
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["valid"], false);
    assert_eq!(body["data"]["text"], "fairere");
    assert!(body["data"]["word"].is_null());
    assert_eq!(body["data"]["session"]["events"][0]["type"], "selection_cleared");
}

#[actix_web::test]
async fn test_verify_with_empty_selection() {
    let ctx = setup().await;
    let (_, token) = ctx.player("alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/game/sessions")
        .insert_header(bearer(&token))
        .set_json(json!({ "mode": "main_game" }))
        .to_request();
    let (_, body) = send(&app, req).await;
    let id = session_id(&body);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/game/sessions/{}/verify", id))
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "EMPTY_SELECTION");
}

#[actix_web::test]
async fn test_free_build_submission() {
    let ctx = setup().await;
    let (alice, token) = ctx.player("alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/game/sessions")
        .insert_header(bearer(&token))
        .set_json(json!({ "mode": "free_build" }))
        .to_request();
    let (_, body) = send(&app, req).await;
    let id = session_id(&body);

    for morpheme_id in [PRE, VOIR] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/game/sessions/{}/toggle", id))
            .insert_header(bearer(&token))
            .set_json(json!({ "morpheme_id": morpheme_id }))
            .to_request();
        send(&app, req).await;
    }

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/game/sessions/{}/submit", id))
        .insert_header(bearer(&token))
        .set_json(json!({ "definition": "Regarder plus tard" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "DEFINITION_MISMATCH");
    assert_eq!(body["details"]["morpheme"], "pré");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/game/sessions/{}/submit", id))
        .insert_header(bearer(&token))
        .set_json(json!({ "definition": "   " }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "DEFINITION_REQUIRED");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/game/sessions/{}/submit", id))
        .insert_header(bearer(&token))
        .set_json(json!({ "definition": "Percevoir avant les autres" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["text"], "prévoir");
    assert_eq!(body["data"]["points"], 3);
    assert_eq!(body["data"]["session"]["score"], 3);
    assert_eq!(
        body["data"]["session"]["constructed_words"][0]["word_id"],
        Value::Null
    );

    let stored = ctx.users.find_by_id(alice.id).await.unwrap().unwrap();
    assert_eq!(stored.score, 3);
}

#[actix_web::test]
async fn test_wrong_mode_and_unavailable_morpheme() {
    let ctx = setup().await;
    let (_, token) = ctx.player("alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/game/sessions")
        .insert_header(bearer(&token))
        .set_json(json!({ "mode": "main_game" }))
        .to_request();
    let (_, body) = send(&app, req).await;
    let id = session_id(&body);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/game/sessions/{}/submit", id))
        .insert_header(bearer(&token))
        .set_json(json!({ "definition": "Voir avant" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "WRONG_MODE");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/game/sessions/{}/toggle", id))
        .insert_header(bearer(&token))
        .set_json(json!({ "morpheme_id": 42 }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "MORPHEME_NOT_AVAILABLE");
    assert_eq!(body["details"]["morpheme_id"], 42);
}

#[actix_web::test]
async fn test_prefix_matcher_is_not_available() {
    let ctx = setup().await;
    let (_, token) = ctx.player("alice").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/game/sessions")
        .insert_header(bearer(&token))
        .set_json(json!({ "mode": "prefix_matcher" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 501);
    assert_eq!(body["error"], "NOT_IMPLEMENTED");
}

#[actix_web::test]
async fn test_sessions_are_private() {
    let ctx = setup().await;
    let (_, alice_token) = ctx.player("alice").await;
    let (_, bob_token) = ctx.player("bob").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/game/sessions")
        .insert_header(bearer(&alice_token))
        .set_json(json!({ "mode": "main_game" }))
        .to_request();
    let (_, body) = send(&app, req).await;
    let id = session_id(&body);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/game/sessions/{}", id))
        .insert_header(bearer(&bob_token))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "SESSION_NOT_FOUND");

    let req = test::TestRequest::get()
        .uri("/api/v1/game/sessions/not-a-uuid")
        .insert_header(bearer(&alice_token))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, 404);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/game/sessions/{}", id))
        .insert_header(bearer(&alice_token))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, 204);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/game/sessions/{}", id))
        .insert_header(bearer(&alice_token))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, 404);
}

#[actix_web::test]
async fn test_admins_cannot_play() {
    let ctx = setup().await;
    let (_, token) = ctx.admin("root").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/v1/game/morphemes")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, 403);
    assert_eq!(body["message"], "Only players can play");
}

#[actix_web::test]
async fn test_clear_and_new_round_keep_score() {
    let ctx = setup().await;
    let (alice, token) = ctx.player("alice").await;
    ctx.users.add_score(alice.id, 7).await.unwrap();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/game/sessions")
        .insert_header(bearer(&token))
        .set_json(json!({ "mode": "main_game" }))
        .to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body["data"]["score"], 7);
    let id = session_id(&body);

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/game/sessions/{}/toggle", id))
        .insert_header(bearer(&token))
        .set_json(json!({ "morpheme_id": RE }))
        .to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body["data"]["current_text"], "re");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/game/sessions/{}/clear", id))
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["current_text"], "");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/game/sessions/{}/new-round", id))
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["score"], 7);
    let events = body["data"]["events"].as_array().unwrap();
    assert_eq!(events.last().unwrap()["type"], "round_reset");
}
