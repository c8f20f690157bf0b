//! CRUD, pagination and reference checks through the full router

mod common;

use chrono::{DateTime, Utc};
use common::spawn_app;
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;

#[tokio::test]
async fn pagination_windows_follow_insertion_order() {
    let app = spawn_app().await;
    for n in 1..=5 {
        app.create_table(n).await;
    }

    let (status, page) = app.call("GET", "/tables?recordPerPage=2&page=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total_count"], 5);
    let items = page["table_items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["table_number"], 1);
    assert_eq!(items[1]["table_number"], 2);

    let (_, page) = app.call("GET", "/tables?recordPerPage=2&page=3", None).await;
    let items = page["table_items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["table_number"], 5);

    // defaults: page 1, two per page
    let (_, page) = app.call("GET", "/tables?recordPerPage=0", None).await;
    assert_eq!(page["table_items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn non_integer_page_is_rejected() {
    let app = spawn_app().await;
    let (status, body) = app.call("GET", "/foods?page=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn delete_unknown_key_leaves_others() {
    let app = spawn_app().await;
    let menu_id = app.create_menu().await;
    let food_a = app.create_food(&menu_id, "Soup", 4.5).await;
    let food_b = app.create_food(&menu_id, "Salad", 6.0).await;

    let (status, body) = app
        .call("DELETE", "/foods/ffffffffffffffffffffffff", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (_, page) = app.call("GET", "/foods?recordPerPage=10", None).await;
    assert_eq!(page["total_count"], 2);

    let (status, ack) = app.call("DELETE", &format!("/foods/{food_a}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["deleted_count"], 1);

    let (status, _) = app.call("GET", &format!("/foods/{food_a}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, food) = app.call("GET", &format!("/foods/{food_b}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(food["name"], "Salad");
}

#[derive(Deserialize)]
struct KeyRow {
    key: String,
    food_id: String,
}

#[tokio::test]
async fn natural_key_matches_record_key() {
    let app = spawn_app().await;
    let menu_id = app.create_menu().await;
    let food_id = app.create_food(&menu_id, "Noodles", 8.0).await;
    assert_eq!(food_id.len(), 24);

    let rows: Vec<KeyRow> = app
        .state
        .db
        .query("SELECT <string>record::id(id) AS key, food_id FROM food")
        .await
        .unwrap()
        .take(0)
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, food_id);
    assert_eq!(rows[0].food_id, food_id);
}

#[tokio::test]
async fn price_is_rounded_and_update_refreshes_timestamp() {
    let app = spawn_app().await;
    let menu_id = app.create_menu().await;
    let food_id = app.create_food(&menu_id, "Dumplings", 2.005).await;

    let (_, before) = app.call("GET", &format!("/foods/{food_id}"), None).await;
    assert_eq!(before["price"], 2.01);

    let (status, ack) = app
        .call(
            "PATCH",
            &format!("/foods/{food_id}"),
            Some(json!({ "price": 3.333 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack, json!({ "matched_count": 1, "modified_count": 1 }));

    let (_, after) = app.call("GET", &format!("/foods/{food_id}"), None).await;
    assert_eq!(after["price"], 3.33);
    assert_eq!(after["name"], "Dumplings");
    let created: DateTime<Utc> = serde_json::from_value(after["created_at"].clone()).unwrap();
    let updated: DateTime<Utc> = serde_json::from_value(after["updated_at"].clone()).unwrap();
    assert!(updated > created);
}

#[tokio::test]
async fn update_unknown_key_is_not_found() {
    let app = spawn_app().await;
    let (status, _) = app
        .call(
            "PATCH",
            "/tables/ffffffffffffffffffffffff",
            Some(json!({ "number_of_guests": 2 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_reference_is_bad_request() {
    let app = spawn_app().await;

    let (status, body) = app
        .call(
            "POST",
            "/foods",
            Some(json!({
                "name": "Ghost",
                "price": 1.0,
                "food_image": "ghost.png",
                "menu_id": "ffffffffffffffffffffffff",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0006");

    let (status, _) = app
        .call(
            "POST",
            "/orders",
            Some(json!({
                "order_date": Utc::now() + chrono::Duration::hours(2),
                "table_id": "ffffffffffffffffffffffff",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, page) = app.call("GET", "/foods", None).await;
    assert_eq!(page["total_count"], 0);
}

#[tokio::test]
async fn blank_reference_in_update_is_ignored() {
    let app = spawn_app().await;
    let menu_id = app.create_menu().await;
    let food_id = app.create_food(&menu_id, "Noodles", 8.0).await;
    let table_id = app.create_table(9).await;
    let order_id = app
        .create(
            "/orders",
            json!({
                "order_date": Utc::now() + chrono::Duration::hours(1),
                "table_id": table_id,
            }),
        )
        .await;

    let (status, _) = app
        .call(
            "PATCH",
            &format!("/foods/{food_id}"),
            Some(json!({ "menu_id": "", "price": 9.0 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, food) = app.call("GET", &format!("/foods/{food_id}"), None).await;
    assert_eq!(food["menu_id"], menu_id.as_str());
    assert_eq!(food["price"], 9.0);

    let (status, _) = app
        .call(
            "PATCH",
            &format!("/orders/{order_id}"),
            Some(json!({ "table_id": "  " })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, order) = app.call("GET", &format!("/orders/{order_id}"), None).await;
    assert_eq!(order["table_id"], table_id.as_str());

    // a non-blank unknown key is still rejected
    let (status, _) = app
        .call(
            "PATCH",
            &format!("/orders/{order_id}"),
            Some(json!({ "table_id": "ffffffffffffffffffffffff" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn menu_dates_are_validated() {
    let app = spawn_app().await;
    let now = Utc::now();

    let (status, body) = app
        .call(
            "POST",
            "/menus",
            Some(json!({
                "name": "Brunch",
                "category": "breakfast",
                "start_date": now - chrono::Duration::days(1),
                "end_date": now + chrono::Duration::days(1),
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (status, _) = app
        .call(
            "POST",
            "/menus",
            Some(json!({
                "name": "Brunch",
                "category": "breakfast",
                "start_date": now + chrono::Duration::days(2),
                "end_date": now + chrono::Duration::days(1),
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, page) = app.call("GET", "/menus", None).await;
    assert_eq!(page["total_count"], 0);
}

#[tokio::test]
async fn order_date_must_be_in_future() {
    let app = spawn_app().await;
    let table_id = app.create_table(9).await;

    let (status, _) = app
        .call(
            "POST",
            "/orders",
            Some(json!({
                "order_date": Utc::now() - chrono::Duration::hours(1),
                "table_id": table_id,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let order_id = app
        .create(
            "/orders",
            json!({
                "order_date": Utc::now() + chrono::Duration::hours(1),
                "table_id": table_id,
            }),
        )
        .await;
    let (_, order) = app.call("GET", &format!("/orders/{order_id}"), None).await;
    assert_eq!(order["table_id"], table_id);
}

#[tokio::test]
async fn malformed_json_uses_error_body() {
    let app = spawn_app().await;
    let (status, body) = app
        .call("POST", "/tables", Some(json!({ "table_number": "seven" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}
