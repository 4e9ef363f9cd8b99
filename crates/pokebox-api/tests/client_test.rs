// Integration tests for `PokeboxClient` using wiremock.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pokebox_api::types::{InsertBoxEntry, UpdateBoxEntry};
use pokebox_api::{Error, Operation, PokeboxClient};

// ── Helpers ─────────────────────────────────────────────────────────

const TOKEN: &str = "s3cret";

async fn setup() -> (MockServer, PokeboxClient) {
    let server = MockServer::start().await;
    let client = PokeboxClient::from_reqwest(
        &server.uri(),
        reqwest::Client::new(),
        SecretString::from(TOKEN.to_owned()),
    )
    .unwrap();
    (server, client)
}

fn pokemon_json(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "types": [{ "name": "GRASS", "color": "#7AC74C" }],
        "moves": [{ "name": "TACKLE", "power": 40, "type": { "name": "NORMAL", "color": "#A8A77A" } }],
        "sprites": {
            "front_default": "f.png", "back_default": "b.png",
            "front_shiny": "fs.png", "back_shiny": "bs.png"
        },
        "stats": {
            "hp": 45, "speed": 45, "attack": 49, "defense": 49,
            "specialAttack": 65, "specialDefense": 65
        }
    })
}

fn entry_json(id: &str, pokemon_id: u32) -> Value {
    json!({
        "id": id,
        "createdAt": "2025-03-04T05:06:07.000Z",
        "level": 12,
        "location": "Route 1",
        "notes": "shiny",
        "pokemonId": pokemon_id
    })
}

// ── Catalog ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_pokemon_sends_window() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/pokemon/"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            pokemon_json(21, "SPEAROW"),
            pokemon_json(22, "FEAROW"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.list_pokemon(10, 20).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, 21);
    assert_eq!(page[1].name, "FEAROW");
    assert_eq!(page[0].moves[0].move_type.name, "NORMAL");
}

#[tokio::test]
async fn test_catalog_calls_are_public() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/pokemon/bulbasaur"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_json(1, "BULBASAUR")))
        .mount(&server)
        .await;

    let pokemon = client.get_pokemon("bulbasaur").await.unwrap();
    assert_eq!(pokemon.id, 1);
    assert_eq!(pokemon.stats.special_defense, 65);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_get_pokemon_encodes_name() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/pokemon/mr%20mime"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_json(122, "MR. MIME")))
        .expect(1)
        .mount(&server)
        .await;

    let pokemon = client.get_pokemon("mr mime").await.unwrap();
    assert_eq!(pokemon.name, "MR. MIME");
}

// ── Box ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_box_ids_sends_bearer() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/box/"))
        .and(header("Authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["a1", "b2"])))
        .expect(1)
        .mount(&server)
        .await;

    let ids = client.list_box_ids().await.unwrap();
    assert_eq!(ids, vec!["a1".to_owned(), "b2".to_owned()]);
}

#[tokio::test]
async fn test_get_box_entry() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/box/a1"))
        .and(header("Authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_json("a1", 25)))
        .mount(&server)
        .await;

    let entry = client.get_box_entry("a1").await.unwrap();
    assert_eq!(entry.pokemon_id, 25);
    assert_eq!(entry.notes.as_deref(), Some("shiny"));
    assert_eq!(entry.created_at.to_rfc3339(), "2025-03-04T05:06:07+00:00");
}

#[tokio::test]
async fn test_create_box_entry_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/box/"))
        .and(header("Authorization", "Bearer s3cret"))
        .and(body_partial_json(json!({
            "pokemonId": 25,
            "location": "Route 1",
            "level": 12,
            "createdAt": "2025-03-04T05:06:07Z"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(entry_json("new", 25)))
        .expect(1)
        .mount(&server)
        .await;

    let body = InsertBoxEntry {
        pokemon_id: 25,
        location: "Route 1".into(),
        level: 12,
        created_at: "2025-03-04T05:06:07Z".parse().unwrap(),
        notes: None,
    };
    let created = client.create_box_entry(&body).await.unwrap();
    assert_eq!(created.id, "new");

    let requests = server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent.get("notes").is_none());
}

#[tokio::test]
async fn test_update_box_entry() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/box/a1"))
        .and(body_partial_json(json!({ "location": "Cerulean", "level": 30, "notes": "evolved" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry_json("a1", 25)))
        .expect(1)
        .mount(&server)
        .await;

    let patch = UpdateBoxEntry {
        location: "Cerulean".into(),
        level: 30,
        notes: Some("evolved".into()),
    };
    client.update_box_entry("a1", &patch).await.unwrap();
}

#[tokio::test]
async fn test_delete_box_entry_accepts_empty_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/box/a1"))
        .and(header("Authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_box_entry("a1").await.unwrap();
}

// ── Error mapping ───────────────────────────────────────────────────

#[tokio::test]
async fn test_401_maps_to_unauthorized() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/box/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.list_box_ids().await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized { .. }));
    assert_eq!(err.to_string(), "Invalid or missing authentication token");
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/box/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_box_entry("gone").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Entry does not exist");
}

#[tokio::test]
async fn test_400_uses_server_message() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/box/a1"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "level must be a number" })),
        )
        .mount(&server)
        .await;

    let patch = UpdateBoxEntry {
        location: "x".into(),
        level: 1,
        notes: None,
    };
    let err = client.update_box_entry("a1", &patch).await.unwrap_err();
    assert!(matches!(err, Error::BadRequest { ref message } if message == "level must be a number"));
}

#[tokio::test]
async fn test_500_maps_to_server() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/pokemon/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client.list_pokemon(10, 0).await.unwrap_err();
    assert!(matches!(err, Error::Server { .. }));
    assert!(err.is_transient());
    assert_eq!(err.to_string(), "Internal server error");
}

#[tokio::test]
async fn test_other_status_keeps_code() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/box/a1"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&server)
        .await;

    let err = client.delete_box_entry("a1").await.unwrap_err();
    assert_eq!(err.status(), Some(418));
    assert!(matches!(err, Error::Status { status: 418, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/box/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.list_box_ids().await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { ref body, .. } if body == "not json"));
}

#[tokio::test]
async fn test_connection_failure_names_operation() {
    let client = PokeboxClient::from_reqwest(
        "http://127.0.0.1:1",
        reqwest::Client::new(),
        SecretString::from(TOKEN.to_owned()),
    )
    .unwrap();

    let err = client.list_box_ids().await.unwrap_err();
    assert_eq!(err.operation(), Some(Operation::ListBoxIds));
    assert_eq!(err.to_string(), "Failed to fetch Box entries");
}
