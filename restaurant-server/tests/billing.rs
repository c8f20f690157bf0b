//! Order-with-items, billing view and invoices

mod common;

use common::spawn_app;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn billing_view_sums_item_prices() {
    let app = spawn_app().await;
    let menu_id = app.create_menu().await;
    let burger = app.create_food(&menu_id, "Burger", 10.0).await;
    let pasta = app.create_food(&menu_id, "Pasta", 15.5).await;
    let table_id = app.create_table(7).await;

    let (status, ack) = app
        .call(
            "POST",
            "/orderItems",
            Some(json!({
                "table_id": table_id,
                "order_items": [
                    { "quantity": "M", "unit_price": 10.0, "food_id": burger },
                    { "quantity": "L", "unit_price": 15.5, "food_id": pasta },
                ],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{ack}");
    let order_id = ack["order_id"].as_str().unwrap().to_string();
    assert_eq!(ack["inserted_ids"].as_array().unwrap().len(), 2);

    let (status, groups) = app
        .call("GET", &format!("/orderItems-order/{order_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["payment_due"], 25.5);
    assert_eq!(groups[0]["total_count"], 2);
    assert_eq!(groups[0]["table_number"], 7);
    let lines = groups[0]["order_items"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["food_name"], "Burger");
    assert_eq!(lines[0]["quantity"], "M");
    assert_eq!(lines[1]["price"], 15.5);

    let invoice_id = app
        .create(
            "/invoices",
            json!({ "order_id": order_id, "payment_method": "CARD" }),
        )
        .await;
    let (status, view) = app
        .call("GET", &format!("/invoices/{invoice_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["payment_due"], 25.5);
    assert_eq!(view["payment_method"], "CARD");
    assert_eq!(view["payment_status"], "PENDING");
    assert_eq!(view["table_number"], 7);
    assert_eq!(view["order_details"].as_array().unwrap().len(), 2);

    let (status, _) = app
        .call(
            "PATCH",
            &format!("/invoices/{invoice_id}"),
            Some(json!({ "payment_status": "PAID" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, view) = app
        .call("GET", &format!("/invoices/{invoice_id}"), None)
        .await;
    assert_eq!(view["payment_status"], "PAID");
}

#[tokio::test]
async fn order_with_unknown_food_is_not_created() {
    let app = spawn_app().await;
    let table_id = app.create_table(3).await;

    let (status, _) = app
        .call(
            "POST",
            "/orderItems",
            Some(json!({
                "table_id": table_id,
                "order_items": [
                    { "quantity": "S", "unit_price": 1.0, "food_id": "ffffffffffffffffffffffff" },
                ],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, orders) = app.call("GET", "/orders", None).await;
    assert_eq!(orders["total_count"], 0);
    let (_, items) = app.call("GET", "/orderItems", None).await;
    assert_eq!(items["total_count"], 0);
}

#[tokio::test]
async fn failed_item_insert_rolls_back_order() {
    let app = spawn_app().await;
    let menu_id = app.create_menu().await;
    let soup = app.create_food(&menu_id, "Soup", 6.0).await;
    let table_id = app.create_table(5).await;

    // references are valid; the second CREATE fails inside the transaction
    app.state
        .db
        .query("DEFINE FIELD unit_price ON order_item ASSERT $value < 1000")
        .await
        .unwrap()
        .check()
        .unwrap();

    let (status, _) = app
        .call(
            "POST",
            "/orderItems",
            Some(json!({
                "table_id": table_id,
                "order_items": [
                    { "quantity": "S", "unit_price": 6.0, "food_id": soup },
                    { "quantity": "L", "unit_price": 5000.0, "food_id": soup },
                ],
            })),
        )
        .await;
    assert_ne!(status, StatusCode::OK);

    let (_, orders) = app.call("GET", "/orders", None).await;
    assert_eq!(orders["total_count"], 0);
    let (_, items) = app.call("GET", "/orderItems", None).await;
    assert_eq!(items["total_count"], 0);
}

#[tokio::test]
async fn empty_order_has_no_billing_data() {
    let app = spawn_app().await;
    let table_id = app.create_table(2).await;
    let order_id = app
        .create(
            "/orders",
            json!({
                "order_date": chrono::Utc::now() + chrono::Duration::hours(1),
                "table_id": table_id,
            }),
        )
        .await;

    let (status, groups) = app
        .call("GET", &format!("/orderItems-order/{order_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(groups, json!([]));

    let invoice_id = app
        .create("/invoices", json!({ "order_id": order_id }))
        .await;
    let (status, body) = app
        .call("GET", &format!("/invoices/{invoice_id}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "no billing data for order");
}

#[tokio::test]
async fn invoice_requires_existing_order() {
    let app = spawn_app().await;
    let (status, _) = app
        .call(
            "POST",
            "/invoices",
            Some(json!({ "order_id": "ffffffffffffffffffffffff" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
