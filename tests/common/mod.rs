//! Shared fixtures for the yugioh-prices integration tests.
//!
//! Provides canned upstream payloads and helpers that mount them on a
//! `wiremock` server standing in for yugiohprices.com.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yugioh_prices::YugiohPrices;

pub const IMAGE_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> YugiohPrices {
    YugiohPrices::builder().base_url(server.uri()).build().unwrap()
}

pub fn success(data: Value) -> Value {
    json!({ "status": "success", "data": data })
}

pub fn failure(message: &str) -> Value {
    json!({ "status": "fail", "message": message })
}

pub fn dark_magician_data() -> Value {
    json!({
        "name": "Dark Magician",
        "text": "The ultimate wizard in terms of attack and defense.",
        "card_type": "monster",
        "type": "Spellcaster",
        "family": "dark",
        "atk": 2500,
        "def": 2100,
        "level": 7,
        "property": null
    })
}

pub fn mirror_force_data() -> Value {
    json!({
        "name": "Mirror Force",
        "text": "When an opponent's monster declares an attack: \
                 Destroy all your opponent's Attack Position monsters.",
        "card_type": "trap",
        "type": null,
        "family": null,
        "atk": null,
        "def": null,
        "level": null,
        "property": "Normal"
    })
}

pub fn listing(set: &str, tag: &str, rarity: &str, prices: Option<Value>) -> Value {
    let price_data = match prices {
        Some(p) => json!({ "status": "success", "data": { "listings": [], "prices": p } }),
        None => json!({ "status": "fail", "message": "Unable to get price data." }),
    };
    json!({
        "name": set,
        "print_tag": tag,
        "rarity": rarity,
        "price_data": price_data
    })
}

pub fn lob_prices() -> Value {
    json!({
        "high": 86.5,
        "low": 9.99,
        "average": "12.34",
        "shift": 0.0,
        "shift_3": 0.01,
        "shift_7": -0.05,
        "shift_21": 0.1,
        "shift_30": 0.12,
        "shift_90": "0.25",
        "shift_180": 0.3,
        "shift_365": -0.4,
        "updated_at": "2014-08-26 17:27:59 UTC"
    })
}

pub fn dark_magician_listings() -> Value {
    json!([
        listing("Legend of Blue Eyes White Dragon", "LOB-005", "Ultra Rare", Some(lob_prices())),
        listing("Starter Deck: Yugi", "SDY-006", "Ultra Rare", None),
        listing(
            "Dark Magician Structure Deck",
            "SDDM-EN001",
            "Common",
            Some(json!({
                "high": "1.00",
                "low": "0.10",
                "average": "0.45",
                "updated_at": "2015-01-02T03:04:05Z"
            })),
        ),
    ])
}

/// Mount `card_data/{encoded}` returning `body`, expected `times` times.
pub async fn mount_card_data(server: &MockServer, encoded: &str, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/card_data/{encoded}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Mount `card_image/{encoded}` returning [`IMAGE_BYTES`], expected `times` times.
pub async fn mount_card_image(server: &MockServer, encoded: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/card_image/{encoded}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(IMAGE_BYTES.to_vec()))
        .expect(times)
        .mount(server)
        .await;
}

/// Mount `get_card_prices/{encoded}` returning `body`.
pub async fn mount_card_prices(server: &MockServer, encoded: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/get_card_prices/{encoded}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}
