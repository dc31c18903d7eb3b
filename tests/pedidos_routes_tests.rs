mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::json;

use common::{send, test_app};

fn parse_ts(v: &serde_json::Value) -> DateTime<Utc> {
    v.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn order_round_trips_with_empty_items() {
    let app = test_app();

    let (status, created) = send(
        &app,
        "POST",
        "/api/pedidos",
        Some(json!({ "datPedido": "2024-05-01T10:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["nroPedido"], 1);
    assert_eq!(created["itensPedido"], json!([]));
    assert_eq!(
        parse_ts(&created["datPedido"]),
        "2024-05-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );

    let (status, fetched) = send(&app, "GET", "/api/pedidos/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn order_requires_timestamp() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/pedidos", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("datPedido"));

    let (status, _) = send(
        &app,
        "POST",
        "/api/pedidos",
        Some(json!({ "datPedido": null, "itensPedido": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    send(
        &app,
        "POST",
        "/api/pedidos",
        Some(json!({ "datPedido": "2024-05-01T10:00:00Z" })),
    )
    .await;
    let (status, _) = send(&app, "PUT", "/api/pedidos/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_lists_items_that_reference_it() {
    let app = test_app();

    send(&app, "POST", "/api/pedidos", Some(json!({ "datPedido": "2024-05-01T10:00:00Z" }))).await;
    send(&app, "POST", "/api/pedidos", Some(json!({ "datPedido": "2024-05-02T10:00:00Z" }))).await;

    for (order, qty) in [(1, 2), (2, 5), (1, 3)] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/itens",
            Some(json!({ "qtdeItem": qty, "valUnidade": 1.5, "nroPedido": order })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, first) = send(&app, "GET", "/api/pedidos/1", None).await;
    let qtys: Vec<i64> = first["itensPedido"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["qtdeItem"].as_i64().unwrap())
        .collect();
    assert_eq!(qtys, vec![2, 3]);

    let (_, all) = send(&app, "GET", "/api/pedidos", None).await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["itensPedido"], first["itensPedido"]);
    assert_eq!(all[1]["itensPedido"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn embedded_items_in_order_body_are_not_stored() {
    let app = test_app();

    let (status, created) = send(
        &app,
        "POST",
        "/api/pedidos",
        Some(json!({
            "datPedido": "2024-05-01T10:00:00Z",
            "itensPedido": [{ "qtdeItem": 1, "valUnidade": 2.0 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["itensPedido"], json!([]));

    let (_, items) = send(&app, "GET", "/api/itens", None).await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn order_update_keeps_path_id() {
    let app = test_app();
    send(&app, "POST", "/api/pedidos", Some(json!({ "datPedido": "2024-05-01T10:00:00Z" }))).await;

    let (status, updated) = send(
        &app,
        "PUT",
        "/api/pedidos/1",
        Some(json!({ "nroPedido": 8, "datPedido": "2024-06-01T08:30:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nroPedido"], 1);

    let (_, fetched) = send(&app, "GET", "/api/pedidos/1", None).await;
    assert_eq!(
        parse_ts(&fetched["datPedido"]),
        "2024-06-01T08:30:00Z".parse::<DateTime<Utc>>().unwrap()
    );
}

#[tokio::test]
async fn deleted_order_is_gone() {
    let app = test_app();
    send(&app, "POST", "/api/pedidos", Some(json!({ "datPedido": "2024-05-01T10:00:00Z" }))).await;

    let (status, _) = send(&app, "DELETE", "/api/pedidos/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/api/pedidos/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/pedidos/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
