use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::card::Card;
use super::de;

// ---------------------------------------------------------------------------
// PriceData — price summary of one listing (`price_data.data.prices`)
// ---------------------------------------------------------------------------

/// Prices in USD plus percentage shifts over trailing windows.
///
/// Numeric fields the service leaves out are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceData {
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub high: Decimal,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub average: Decimal,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub low: Decimal,
    #[serde(rename = "updated_at", default, deserialize_with = "de::opt_timestamp")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub shift: Decimal,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub shift_3: Decimal,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub shift_7: Decimal,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub shift_30: Decimal,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub shift_90: Decimal,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub shift_180: Decimal,
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub shift_365: Decimal,
}

// ---------------------------------------------------------------------------
// PriceListing — one entry of `get_card_prices/{name}` before the card is attached
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceListing {
    pub set_name: String,
    pub print_tag: String,
    pub rarity: String,
    /// Opaque listing identifiers, passed through as the service sends them.
    pub listings: Vec<Value>,
    /// `None` when the service reported no price data for this print.
    pub price_data: Option<PriceData>,
}

impl PriceListing {
    pub fn with_card(self, card: Card) -> CardPrices {
        CardPrices {
            set_name: self.set_name,
            print_tag: self.print_tag,
            rarity: self.rarity,
            listings: self.listings,
            card,
            price_data: self.price_data,
        }
    }
}

// ---------------------------------------------------------------------------
// CardPrices — a priced print of a card, with the full card attached
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPrices {
    /// Name of the set this print came from.
    pub set_name: String,
    /// Print tag of the card within the set, e.g. `"LOB-005"`.
    pub print_tag: String,
    pub rarity: String,
    pub listings: Vec<Value>,
    pub card: Card,
    pub price_data: Option<PriceData>,
}

impl CardPrices {
    /// Price data, or all-zero prices when the service had none for this print.
    pub fn prices(&self) -> PriceData {
        self.price_data.clone().unwrap_or_default()
    }

    pub fn has_price_data(&self) -> bool {
        self.price_data.is_some()
    }
}
