//! Maps envelope payloads onto the domain records.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::envelope;
use crate::error::Result;
use crate::models::{Card, PriceData, PriceListing};

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// Map a `card_data` payload onto a [`Card`] (without image).
///
/// The service answers unknown names with a success envelope whose payload
/// carries no card, so a missing payload or a missing/`null` `name` yields
/// `Ok(None)`. A present but empty name is still a card.
pub fn map_card(data: Option<Value>) -> Result<Option<Card>> {
    let data = match data {
        Some(v @ Value::Object(_)) => v,
        _ => return Ok(None),
    };
    if data.get("name").map_or(true, Value::is_null) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(data)?))
}

// ---------------------------------------------------------------------------
// Price listings
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    print_tag: Option<String>,
    #[serde(default)]
    rarity: Option<String>,
    #[serde(default)]
    listings: Option<Vec<Value>>,
    #[serde(default)]
    price_data: Option<Map<String, Value>>,
}

/// Map a `get_card_prices` payload onto listings, in service order.
///
/// A missing payload is zero listings. Each listing's nested `price_data`
/// is only read when its own status is success; otherwise that listing
/// gets no price data and the rest are unaffected.
pub fn map_listings(data: Option<Value>) -> Result<Vec<PriceListing>> {
    let Some(data) = data else {
        return Ok(Vec::new());
    };
    let entries: Vec<Map<String, Value>> = serde_json::from_value(data)?;
    entries
        .into_iter()
        .map(|entry| map_listing(from_object(entry)?))
        .collect()
}

fn map_listing(raw: RawListing) -> Result<PriceListing> {
    let set_name = raw.name.unwrap_or_default();
    let price_data = match raw.price_data {
        Some(mut pd) if envelope::is_success(pd.get("status")) => map_prices(pd.remove("data"))?,
        _ => {
            log::debug!("no price data for listing in set {:?}", set_name);
            None
        }
    };
    Ok(PriceListing {
        set_name,
        print_tag: raw.print_tag.unwrap_or_default(),
        rarity: raw.rarity.unwrap_or_default(),
        listings: raw.listings.unwrap_or_default(),
        price_data,
    })
}

fn map_prices(data: Option<Value>) -> Result<Option<PriceData>> {
    match data.and_then(|mut d| d.get_mut("prices").map(Value::take)) {
        Some(Value::Null) | None => Ok(None),
        Some(prices) => {
            let prices: Map<String, Value> = serde_json::from_value(prices)?;
            Ok(Some(from_object(prices)?))
        }
    }
}

/// Deserialize a record from a JSON object only; derived structs would also
/// take a positional array.
fn from_object<T: DeserializeOwned>(object: Map<String, Value>) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(object))?)
}
