//! Price listing tests against a mock yugiohprices.com.

mod common;

use rust_decimal::Decimal;
use serde_json::json;
use wiremock::MockServer;
use yugioh_prices::YugiohPricesError;

const DM: &str = "Dark%20Magician";

async fn mount_dark_magician(server: &MockServer) {
    common::mount_card_prices(server, DM, common::success(common::dark_magician_listings())).await;
    common::mount_card_data(server, DM, common::success(common::dark_magician_data()), 1).await;
    common::mount_card_image(server, DM, 1).await;
}

// ---------------------------------------------------------------------------
// get_all_by_name
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_all_by_name_looks_up_card_once() {
    let server = MockServer::start().await;
    mount_dark_magician(&server).await;

    let client = common::client_for(&server);
    let all = client.prices().get_all_by_name("Dark Magician").await.unwrap();

    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|p| p.card == all[0].card));
    assert_eq!(all[0].card.name, "Dark Magician");
    assert_eq!(all[0].card.image, common::IMAGE_BYTES);
    // Mock expectations (one card_data, one card_image) are verified on drop.
}

#[tokio::test]
async fn get_all_by_name_keeps_service_order_and_prices() {
    let server = MockServer::start().await;
    mount_dark_magician(&server).await;

    let client = common::client_for(&server);
    let all = client.get_all_card_prices_by_name("Dark Magician").await.unwrap();

    let tags: Vec<&str> = all.iter().map(|p| p.print_tag.as_str()).collect();
    assert_eq!(tags, ["LOB-005", "SDY-006", "SDDM-EN001"]);
    assert_eq!(all[0].set_name, "Legend of Blue Eyes White Dragon");
    assert_eq!(all[0].prices().average, Decimal::new(1234, 2));
}

#[tokio::test]
async fn get_all_by_name_failed_listing_degrades_to_zero() {
    let server = MockServer::start().await;
    mount_dark_magician(&server).await;

    let client = common::client_for(&server);
    let all = client.prices().get_all_by_name("Dark Magician").await.unwrap();

    let sdy = &all[1];
    assert!(!sdy.has_price_data());
    let zero = sdy.prices();
    assert_eq!(zero.high, Decimal::ZERO);
    assert_eq!(zero.average, Decimal::ZERO);
    assert_eq!(zero.low, Decimal::ZERO);
    assert_eq!(zero.shift, Decimal::ZERO);
    assert_eq!(zero.shift_30, Decimal::ZERO);
}

#[tokio::test]
async fn get_all_by_name_empty_still_looks_up_card_once() {
    let server = MockServer::start().await;
    let mut kuriboh = common::dark_magician_data();
    kuriboh["name"] = json!("Kuriboh");
    common::mount_card_prices(&server, "Kuriboh", common::success(json!([]))).await;
    common::mount_card_data(&server, "Kuriboh", common::success(kuriboh), 1).await;
    common::mount_card_image(&server, "Kuriboh", 1).await;

    let client = common::client_for(&server);
    let all = client.prices().get_all_by_name("Kuriboh").await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn get_all_by_name_empty_for_unknown_card_is_not_found() {
    let server = MockServer::start().await;
    common::mount_card_prices(&server, "m8", common::success(json!([]))).await;
    common::mount_card_data(&server, "m8", common::success(json!({})), 1).await;
    common::mount_card_image(&server, "m8", 0).await;

    let client = common::client_for(&server);
    let err = client.prices().get_all_by_name("m8").await.unwrap_err();
    assert!(err.is_not_found(), "got: {err:?}");
}

#[tokio::test]
async fn get_all_by_name_service_error_carries_message() {
    let server = MockServer::start().await;
    common::mount_card_prices(&server, "m8", common::failure("Invalid card name.")).await;
    common::mount_card_data(&server, "m8", common::success(json!({})), 0).await;

    let client = common::client_for(&server);
    match client.prices().get_all_by_name("m8").await {
        Err(YugiohPricesError::Service { message, .. }) => {
            assert_eq!(message, "Invalid card name.")
        }
        other => panic!("Expected Service error, got: {other:?}"),
    }
}

#[tokio::test]
async fn get_all_by_name_propagates_card_not_found() {
    let server = MockServer::start().await;
    common::mount_card_prices(
        &server,
        "Ghost",
        common::success(common::dark_magician_listings()),
    )
    .await;
    common::mount_card_data(&server, "Ghost", common::success(serde_json::Value::Null), 1).await;
    common::mount_card_image(&server, "Ghost", 0).await;

    let client = common::client_for(&server);
    let err = client.prices().get_all_by_name("Ghost").await.unwrap_err();
    assert!(err.is_not_found(), "got: {err:?}");
}

// ---------------------------------------------------------------------------
// get_by_name
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_by_name_returns_first_listing() {
    let server = MockServer::start().await;
    mount_dark_magician(&server).await;

    let client = common::client_for(&server);
    let first = client.prices().get_by_name("Dark Magician").await.unwrap();

    assert_eq!(first.print_tag, "LOB-005");
    assert_eq!(first.rarity, "Ultra Rare");
    assert_eq!(first.card.attack, Some(2500));
    assert_eq!(first.prices().high, Decimal::new(865, 1));
}

#[tokio::test]
async fn get_by_name_zero_listings_is_empty_result() {
    let server = MockServer::start().await;
    common::mount_card_prices(&server, "Kuriboh", common::success(json!([]))).await;
    common::mount_card_data(&server, "Kuriboh", common::success(json!({})), 0).await;

    let client = common::client_for(&server);
    let err = client.get_card_prices_by_name("Kuriboh").await.unwrap_err();
    assert!(err.is_empty_result(), "got: {err:?}");
    match err {
        YugiohPricesError::EmptyResult(name) => assert_eq!(name, "Kuriboh"),
        other => panic!("Expected EmptyResult, got: {other:?}"),
    }
}

#[tokio::test]
async fn get_by_name_missing_data_is_empty_result() {
    let server = MockServer::start().await;
    common::mount_card_prices(&server, "Kuriboh", json!({ "status": "success" })).await;

    let client = common::client_for(&server);
    let err = client.prices().get_by_name("Kuriboh").await.unwrap_err();
    assert!(err.is_empty_result(), "got: {err:?}");
}

// ---------------------------------------------------------------------------
// listings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listings_skip_card_lookup() {
    let server = MockServer::start().await;
    common::mount_card_prices(&server, DM, common::success(common::dark_magician_listings())).await;
    common::mount_card_data(&server, DM, common::success(common::dark_magician_data()), 0).await;

    let client = common::client_for(&server);
    let listings = client.prices().listings("Dark Magician").await.unwrap();
    assert_eq!(listings.len(), 3);
    assert!(listings[1].price_data.is_none());
}
