use std::time::Duration;

pub const BASE_URL: &str = "http://yugiohprices.com/api/";

pub const CARD_DATA: &str = "card_data/";
pub const CARD_PRICES: &str = "get_card_prices/";
pub const CARD_IMAGE: &str = "card_image/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("yugioh-prices/", env!("CARGO_PKG_VERSION"));

/// Build the URL for `endpoint` with `name` percent-encoded as the last path segment.
///
/// `base` may or may not end with a slash.
pub fn endpoint_url(base: &str, endpoint: &str, name: &str) -> String {
    format!(
        "{}/{}{}",
        base.trim_end_matches('/'),
        endpoint,
        urlencoding::encode(name)
    )
}
