//! Client for the yugiohprices.com API.
//!
//! Looks up Yu-Gi-Oh! card metadata, per-print price listings and card
//! artwork by card name. Every call is a plain async HTTP GET; nothing is
//! cached between calls.
//!
//! # Quick start
//!
//! ```no_run
//! use yugioh_prices::YugiohPrices;
//!
//! # async fn example() -> yugioh_prices::Result<()> {
//! let client = YugiohPrices::builder().build()?;
//!
//! let card = client.cards().get_by_name("Dark Magician").await?;
//! println!("{} ATK {:?}", card.name, card.attack);
//!
//! for listing in client.prices().get_all_by_name("Dark Magician").await? {
//!     println!("{} {}: {}", listing.print_tag, listing.rarity, listing.prices().average);
//! }
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod config;
pub mod envelope;
pub mod error;
pub mod mapper;
pub mod models;
pub mod queries;
pub mod transport;

#[cfg(feature = "blocking")]
pub use blocking::BlockingYugiohPrices;
pub use error::{Result, YugiohPricesError};
pub use models::{Card, CardPrices, CardType, PriceData, PriceListing};
pub use transport::Transport;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// YugiohPricesBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`YugiohPrices`] client.
///
/// Use [`YugiohPrices::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](YugiohPricesBuilder::build) to create the client.
#[derive(Debug, Clone)]
pub struct YugiohPricesBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for YugiohPricesBuilder {
    fn default() -> Self {
        Self {
            base_url: config::BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl YugiohPricesBuilder {
    /// Point the client at a different API root, e.g. a mirror or a test server.
    ///
    /// Defaults to [`config::BASE_URL`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    ///
    /// Fails with [`YugiohPricesError::InvalidArgument`] if the base URL is not
    /// an absolute `http`/`https` URL or the HTTP client cannot be created.
    pub fn build(self) -> Result<YugiohPrices> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(YugiohPricesError::InvalidArgument(format!(
                "base URL must be http(s): {:?}",
                self.base_url
            )));
        }
        let transport = Transport::new(self.timeout, &self.user_agent)?;
        Ok(YugiohPrices {
            base_url: base.to_string(),
            transport,
        })
    }
}

// ---------------------------------------------------------------------------
// YugiohPrices
// ---------------------------------------------------------------------------

/// The main entry point for the yugiohprices.com API.
///
/// Holds one pooled HTTP client and exposes the endpoints as lightweight
/// borrowing query interfaces. Calls share no mutable state, so a client
/// can be used from many tasks at once.
#[derive(Debug, Clone)]
pub struct YugiohPrices {
    base_url: String,
    transport: Transport,
}

impl YugiohPrices {
    /// Create a new builder for configuring the client.
    pub fn builder() -> YugiohPricesBuilder {
        YugiohPricesBuilder::default()
    }

    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the card query interface.
    pub fn cards(&self) -> queries::cards::CardQuery<'_> {
        queries::cards::CardQuery::new(self)
    }

    /// Access the price query interface.
    pub fn prices(&self) -> queries::prices::PriceQuery<'_> {
        queries::prices::PriceQuery::new(self)
    }

    // -- Shortcuts ---------------------------------------------------------

    /// Shortcut for [`CardQuery::get_by_name`](queries::cards::CardQuery::get_by_name).
    pub async fn get_card_by_name(&self, name: &str) -> Result<Card> {
        self.cards().get_by_name(name).await
    }

    /// Shortcut for [`PriceQuery::get_all_by_name`](queries::prices::PriceQuery::get_all_by_name).
    pub async fn get_all_card_prices_by_name(&self, name: &str) -> Result<Vec<CardPrices>> {
        self.prices().get_all_by_name(name).await
    }

    /// Shortcut for [`PriceQuery::get_by_name`](queries::prices::PriceQuery::get_by_name).
    pub async fn get_card_prices_by_name(&self, name: &str) -> Result<CardPrices> {
        self.prices().get_by_name(name).await
    }

    // -- Internals ---------------------------------------------------------

    /// The API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, endpoint: &str, name: &str) -> String {
        config::endpoint_url(&self.base_url, endpoint, name)
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for YugiohPrices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "YugiohPrices(base_url={}, timeout={}s)",
            self.base_url,
            self.transport.timeout().as_secs()
        )
    }
}
