mod common;

use axum::http::StatusCode;
use axum_stock_api::{
    dto::products::ProductPayload,
    models::{Category, Product},
    response::ApiResponse,
    routes::create_router,
};
use axum_test::TestServer;
use rust_decimal::Decimal;
use serde_json::json;

use common::{payload, seed_categories, setup_state};

async fn server() -> anyhow::Result<(TestServer, common::Seeded)> {
    let state = setup_state().await?;
    let seeded = seed_categories(&state).await?;
    let server = TestServer::new(create_router(state))?;
    Ok((server, seeded))
}

#[tokio::test]
async fn create_get_update_delete_round_trip() -> anyhow::Result<()> {
    let (server, seeded) = server().await?;

    let response = server
        .post("/v1/products")
        .json(&payload("Widget", 5, Decimal::new(1250, 2), &seeded.hardware))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created = response
        .json::<ApiResponse<Product>>()
        .data
        .expect("created product");
    assert_ne!(created.id, 0);
    assert_eq!(created.category.name, "Hardware");

    let response = server.get(&format!("/v1/products/{}", created.id)).await;
    response.assert_status_ok();
    let fetched = response.json::<ApiResponse<Product>>().data.expect("product");
    assert_eq!(fetched, created);

    let response = server
        .put(&format!("/v1/products/{}", created.id))
        .json(&ProductPayload {
            description: "Widget v2".into(),
            quantity: 7,
            price: Decimal::new(1375, 2),
            category_id: seeded.tools.id,
        })
        .await;
    response.assert_status_ok();
    let updated = response.json::<ApiResponse<Product>>().data.expect("updated");
    assert_eq!(updated.description, "Widget v2");
    assert_eq!(updated.category, seeded.tools);
    assert_eq!(updated.created_at, created.created_at);

    server
        .delete(&format!("/v1/products/{}", created.id))
        .await
        .assert_status_ok();
    server
        .get(&format!("/v1/products/{}", created.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn missing_products_map_to_not_found() -> anyhow::Result<()> {
    let (server, seeded) = server().await?;

    server
        .get("/v1/products/404")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .put("/v1/products/404")
        .json(&payload("Ghost", 1, Decimal::ONE, &seeded.hardware))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete("/v1/products/404")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unknown_category_is_a_bad_request() -> anyhow::Result<()> {
    let (server, _) = server().await?;

    let response = server
        .post("/v1/products")
        .json(&json!({
            "description": "Orphan",
            "quantity": 1,
            "price": "1.00",
            "category_id": 999
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert!(body["data"]["error"].as_str().unwrap().contains("unknown category"));
    Ok(())
}

#[tokio::test]
async fn list_and_filter_products() -> anyhow::Result<()> {
    let (server, seeded) = server().await?;
    for body in [
        payload("Blue widget", 5, Decimal::ONE, &seeded.hardware),
        payload("Gadget", 5, Decimal::TWO, &seeded.tools),
        payload("Red widget", 9, Decimal::TEN, &seeded.tools),
    ] {
        server
            .post("/v1/products")
            .json(&body)
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/v1/products").await;
    response.assert_status_ok();
    let listed = response.json::<ApiResponse<Vec<Product>>>();
    assert_eq!(listed.data.expect("list").len(), 3);
    assert_eq!(listed.meta.and_then(|m| m.total), Some(3));

    let response = server
        .get("/v1/products/filters")
        .add_query_param("description", "WIDGET")
        .add_query_param("category", "Tools")
        .await;
    response.assert_status_ok();
    let filtered = response
        .json::<ApiResponse<Vec<Product>>>()
        .data
        .expect("filtered");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].description, "Red widget");

    let response = server
        .get("/v1/products/filters")
        .add_query_param("quantity", 5)
        .await;
    let by_quantity = response
        .json::<ApiResponse<Vec<Product>>>()
        .data
        .expect("filtered");
    assert_eq!(by_quantity.len(), 2);

    let unfiltered = server
        .get("/v1/products/filters")
        .await
        .json::<ApiResponse<Vec<Product>>>()
        .data
        .expect("unfiltered");
    assert_eq!(unfiltered.len(), 3);
    Ok(())
}

#[tokio::test]
async fn empty_query_values_return_full_list() -> anyhow::Result<()> {
    let (server, seeded) = server().await?;
    for body in [
        payload("Widget", 5, Decimal::ONE, &seeded.hardware),
        payload("Gadget", 2, Decimal::TWO, &seeded.tools),
    ] {
        server
            .post("/v1/products")
            .json(&body)
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server
        .get("/v1/products/filters?description=&category=&quantity=")
        .await;
    response.assert_status_ok();
    let listed = response.json::<ApiResponse<Vec<Product>>>();
    let names: Vec<_> = listed
        .data
        .expect("unfiltered")
        .into_iter()
        .map(|p| p.description)
        .collect();
    assert_eq!(names, ["Widget", "Gadget"]);
    assert_eq!(listed.meta.and_then(|m| m.total), Some(2));

    let response = server
        .get("/v1/products/filters?description=&quantity=%202")
        .await;
    response.assert_status_ok();
    let by_quantity = response
        .json::<ApiResponse<Vec<Product>>>()
        .data
        .expect("filtered");
    assert_eq!(by_quantity.len(), 1);
    assert_eq!(by_quantity[0].description, "Gadget");

    server
        .get("/v1/products/filters?quantity=many")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn categories_are_readable() -> anyhow::Result<()> {
    let (server, seeded) = server().await?;

    let listed = server
        .get("/v1/categories")
        .await
        .json::<ApiResponse<Vec<Category>>>()
        .data
        .expect("categories");
    assert_eq!(listed, vec![seeded.hardware.clone(), seeded.tools.clone()]);

    let one = server
        .get(&format!("/v1/categories/{}", seeded.tools.id))
        .await
        .json::<ApiResponse<Category>>()
        .data
        .expect("category");
    assert_eq!(one, seeded.tools);

    server
        .get("/v1/categories/99")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unknown_routes_fall_back_to_not_found() -> anyhow::Result<()> {
    let (server, _) = server().await?;
    let response = server.get("/v2/products").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["data"]["path"], "/v2/products");
    Ok(())
}
