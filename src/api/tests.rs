//! HTTP-level tests against a local mock server.

use super::*;
use crate::config::Config;
use crate::form::{assemble, Attachment, AttachmentRule, AttachmentSet, FormPayload};
use crate::submit::{Transport, TransportError};
use mockito::{mock, Matcher};
use serde_json::json;
use url::Url;

fn test_client() -> ApiClient {
    let base = Url::parse(&mockito::server_url()).unwrap();
    ApiClient::new(&Config::new(base)).unwrap()
}

fn empty_request() -> crate::form::EncodedRequest {
    assemble(
        &FormPayload::new(),
        AttachmentSet::new(),
        AttachmentRule::Optional,
    )
    .unwrap()
}

#[tokio::test]
async fn success_body_passes_through_opaquely() {
    let _m = mock("POST", "/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"data":{"accessToken":"t0k3n"}}"#)
        .create();

    let value = test_client()
        .submit(&auth::login_user(), empty_request())
        .await
        .unwrap();

    assert_eq!(value["data"]["accessToken"], json!("t0k3n"));
}

#[tokio::test]
async fn submission_body_is_multipart() {
    let _m = mock("POST", "/auth/register")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".into()),
        )
        // The encoding contract: JSON under `data`, then the binary
        // part under `file` with its original filename.
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"(?s)name="data".*name="file""#.into()),
            Matcher::Regex(r#"\{"name":"Ada"\}"#.into()),
            Matcher::Regex(r#"name="file"; filename="avatar.jpg""#.into()),
        ]))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"u1"}"#)
        .create();

    let mut payload = FormPayload::new();
    payload.set_text("name", "Ada");
    let mut attachments = AttachmentSet::new();
    attachments.push(Attachment::new("avatar.jpg", "image/jpeg", &b"pix"[..]));
    let request = assemble(&payload, attachments, auth::registration_rule()).unwrap();

    let value = test_client()
        .submit(&auth::register_user(), request)
        .await
        .unwrap();

    assert_eq!(value["id"], json!("u1"));
}

fn prefixed_client(prefix: &str) -> ApiClient {
    let base = Url::parse(&format!("{}{}", mockito::server_url(), prefix)).unwrap();
    ApiClient::new(&Config::new(base)).unwrap()
}

#[tokio::test]
async fn base_path_prefix_is_kept_on_submit() {
    let _m = mock("POST", "/api/v1/auth/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create();

    let value = prefixed_client("/api/v1")
        .submit(&auth::login_user(), empty_request())
        .await
        .unwrap();

    assert_eq!(value["ok"], json!(true));
}

#[tokio::test]
async fn trailing_slash_base_composes_cleanly() {
    let _m = mock("GET", "/api/v1/recipes/r7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"r7","title":"Pho"}"#)
        .create();

    let recipe = prefixed_client("/api/v1/").recipe("r7").await.unwrap();

    assert_eq!(recipe.title, "Pho");
}

#[tokio::test]
async fn rejection_surfaces_server_message() {
    let _m = mock("PUT", "/recipes/r9")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Recipe not found"}"#)
        .create();

    let err = test_client()
        .submit(&recipes::update_recipe("r9"), empty_request())
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Rejected(ref m) if m == "Recipe not found"));
}

#[tokio::test]
async fn rejection_without_message_falls_back_to_status() {
    let _m = mock("POST", "/auth/forgot-password")
        .with_status(500)
        .with_body("oops")
        .create();

    let err = test_client()
        .submit(&auth::forgot_password(), empty_request())
        .await
        .unwrap_err();

    assert!(
        matches!(err, TransportError::Rejected(ref m) if m == "HTTP 500 Internal Server Error")
    );
}

#[tokio::test]
async fn fetch_recipe_decodes_wire_names() {
    let _m = mock("GET", "/recipes/r1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": "r1",
                "title": "Soup",
                "cookingTime": 15,
                "isPremium": true,
                "ingredients": [{"value": "Salt"}, {"value": "Water"}],
                "imageUrls": ["https://cdn.example/soup.jpg"]
            }"#,
        )
        .create();

    let recipe = test_client().recipe("r1").await.unwrap();

    assert_eq!(recipe.title, "Soup");
    assert_eq!(recipe.cooking_time, 15);
    assert!(recipe.is_premium);
    // Absent fields come back as defaults.
    assert!(!recipe.is_published);
    assert_eq!(recipe.description, "");
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.image_urls, ["https://cdn.example/soup.jpg"]);
}

#[tokio::test]
async fn fetch_recipes_by_user_decodes_list() {
    let _m = mock("GET", "/recipes/user/u1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"r1","title":"Soup"},{"id":"r2","title":"Stew"}]"#)
        .create();

    let recipes = test_client().recipes_by_user("u1").await.unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[1].title, "Stew");
}
