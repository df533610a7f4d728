#![allow(clippy::unwrap_used)]
// Integration tests for `Client` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use firefly3_api::{Category, Client, Error, Rule, RuleGroup};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let api_key: SecretString = "test-token".to_string().into();
    let client = Client::new(&server.uri(), &api_key).unwrap();
    (server, client)
}

fn category(name: &str, notes: &str) -> Category {
    Category {
        id: None,
        created_at: None,
        updated_at: None,
        name: name.into(),
        notes: notes.into(),
    }
}

// ── Create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_category_reattaches_envelope_id() {
    let (server, client) = setup().await;

    let envelope = json!({
        "data": {
            "type": "categories",
            "id": "17",
            "attributes": {
                "created_at": "2024-05-01T12:00:00+02:00",
                "updated_at": "2024-05-01T12:00:00+02:00",
                "name": "Groceries",
                "notes": ""
            }
        }
    });

    Mock::given(method("POST"))
        .and(path("/api/v1/categories"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "Groceries", "notes": ""})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let created = client.create(&category("Groceries", "")).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("17"));
    assert_eq!(created.name, "Groceries");
    assert_eq!(created.created_at.as_deref(), Some("2024-05-01T12:00:00+02:00"));
}

#[tokio::test]
async fn test_create_decodes_html_entities_in_response() {
    let (server, client) = setup().await;

    let envelope = json!({
        "data": {
            "type": "categories",
            "id": "3",
            "attributes": { "name": "Caf&eacute;", "notes": "Lunch &amp; dinner" }
        }
    });

    Mock::given(method("POST"))
        .and(path("/api/v1/categories"))
        // The stored value goes out as literal UTF-8, never re-escaped.
        .and(body_json(json!({"name": "Café", "notes": "Lunch & dinner"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let created = client
        .create(&category("Café", "Lunch & dinner"))
        .await
        .unwrap();

    assert_eq!(created.name, "Café");
    assert_eq!(created.notes, "Lunch & dinner");
}

#[tokio::test]
async fn test_create_rule_preserves_trigger_and_action_order() {
    let (server, client) = setup().await;

    let attributes = json!({
        "title": "Tag coffee",
        "rule_group_id": "1",
        "trigger": "store-journal",
        "active": true,
        "strict": true,
        "stop_processing": false,
        "triggers": [
            {"type": "description_contains", "value": "espresso", "active": true,
             "prohibited": false, "stop_processing": false},
            {"type": "amount_less", "value": "10", "active": true,
             "prohibited": false, "stop_processing": false}
        ],
        "actions": [
            {"type": "add_tag", "value": "coffee", "active": true, "stop_processing": false},
            {"type": "set_category", "value": "Eating out", "active": true, "stop_processing": false}
        ]
    });

    let mut response_attributes = attributes.clone();
    response_attributes["order"] = json!(1);

    Mock::given(method("POST"))
        .and(path("/api/v1/rules"))
        .and(body_json(&attributes))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"type": "rules", "id": "9", "attributes": response_attributes}
        })))
        .mount(&server)
        .await;

    let rule: Rule = serde_json::from_value(attributes).unwrap();
    let created = client.create(&rule).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("9"));
    assert_eq!(created.triggers[0].trigger_type, "description_contains");
    assert_eq!(created.triggers[1].trigger_type, "amount_less");
    assert_eq!(created.actions[0].action_type, "add_tag");
    assert_eq!(created.actions[1].action_type, "set_category");
}

// ── Get ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_not_found_is_typed() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/categories/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let result = client.get::<Category>("42").await;

    match result {
        Err(e) => assert!(e.is_not_found(), "expected NotFound, got: {e:?}"),
        Ok(found) => panic!("expected NotFound, got entity: {found:?}"),
    }
}

#[tokio::test]
async fn test_get_rule_group_returns_server_computed_order() {
    let (server, client) = setup().await;

    // Bodiless requests carry the same headers as writes.
    Mock::given(method("GET"))
        .and(path("/api/v1/rule-groups/5"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "type": "rule_groups",
                "id": "5",
                "attributes": {"title": "Bills", "description": null, "order": 2, "active": true}
            }
        })))
        .mount(&server)
        .await;

    let group = client.get::<RuleGroup>("5").await.unwrap();

    assert_eq!(group.id.as_deref(), Some("5"));
    assert_eq!(group.order, Some(2));
    assert_eq!(group.description, "");
    assert!(group.active);
}

// ── Update ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_sends_full_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/rule-groups/5"))
        .and(body_json(json!({"title": "Bills", "active": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "type": "rule_groups",
                "id": "5",
                "attributes": {"title": "Bills", "order": 2, "active": false}
            }
        })))
        .mount(&server)
        .await;

    let group = RuleGroup {
        id: None,
        created_at: None,
        updated_at: None,
        title: "Bills".into(),
        description: String::new(),
        order: None,
        active: false,
    };

    let updated = client.update("5", &group).await.unwrap();
    assert_eq!(updated.id.as_deref(), Some("5"));
    assert!(!updated.active);
}

// ── Delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_category() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/categories/17"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete::<Category>("17").await.unwrap();
}

// ── Errors ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_api_error_carries_status_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/categories/1"))
        .respond_with(ResponseTemplate::new(422).set_body_string("The title field is required."))
        .mount(&server)
        .await;

    let result = client.get::<Category>("1").await;

    match result {
        Err(Error::Api { status, ref body }) => {
            assert_eq!(status, 422);
            assert!(body.contains("title field is required"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_envelope_is_a_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login page</html>"))
        .mount(&server)
        .await;

    let result = client.create(&category("Groceries", "")).await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("login page"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_endpoint_with_existing_api_prefix_is_not_doubled() {
    let server = MockServer::start().await;
    let api_key: SecretString = "test-token".to_string().into();
    let client = Client::new(&format!("{}/api/v1", server.uri()), &api_key).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/categories/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"type": "categories", "id": "8", "attributes": {"name": "Rent", "notes": ""}}
        })))
        .mount(&server)
        .await;

    let found = client.get::<Category>("8").await.unwrap();
    assert_eq!(found.name, "Rent");
}
