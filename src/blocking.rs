//! Blocking wrapper around [`YugiohPrices`] for callers without an async runtime.
//!
//! Owns a single-threaded Tokio runtime and drives each async call to
//! completion on it with [`Runtime::block_on`].
//!
//! # Example
//!
//! ```no_run
//! use yugioh_prices::BlockingYugiohPrices;
//!
//! let client = BlockingYugiohPrices::builder().build().unwrap();
//! let card = client.get_card_by_name("Dark Magician").unwrap();
//! println!("{}. {}", card.name, card.description);
//! ```
//!
//! Must not be used from inside an async context: `block_on` panics there.

use std::time::Duration;

use tokio::runtime::{Builder, Runtime};

use crate::error::Result;
use crate::models::{Card, CardPrices};
use crate::{YugiohPrices, YugiohPricesBuilder};

// ---------------------------------------------------------------------------
// BlockingYugiohPricesBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BlockingYugiohPrices`] client.
#[derive(Debug, Clone, Default)]
pub struct BlockingYugiohPricesBuilder {
    inner: YugiohPricesBuilder,
}

impl BlockingYugiohPricesBuilder {
    /// Point the client at a different API root.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(base_url);
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Set the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.inner = self.inner.user_agent(user_agent);
        self
    }

    /// Build the client and its private runtime.
    pub fn build(self) -> Result<BlockingYugiohPrices> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let inner = self.inner.build()?;
        Ok(BlockingYugiohPrices { runtime, inner })
    }
}

// ---------------------------------------------------------------------------
// BlockingYugiohPrices
// ---------------------------------------------------------------------------

/// Blocking counterpart of [`YugiohPrices`] with the same operations.
pub struct BlockingYugiohPrices {
    runtime: Runtime,
    inner: YugiohPrices,
}

impl BlockingYugiohPrices {
    /// Create a new builder for configuring the blocking client.
    pub fn builder() -> BlockingYugiohPricesBuilder {
        BlockingYugiohPricesBuilder::default()
    }

    /// See [`CardQuery::get_by_name`](crate::queries::cards::CardQuery::get_by_name).
    pub fn get_card_by_name(&self, name: &str) -> Result<Card> {
        self.runtime.block_on(self.inner.get_card_by_name(name))
    }

    /// See [`CardQuery::find_by_name`](crate::queries::cards::CardQuery::find_by_name).
    pub fn find_card_by_name(&self, name: &str) -> Result<Option<Card>> {
        self.runtime.block_on(self.inner.cards().find_by_name(name))
    }

    /// See [`CardQuery::get_image`](crate::queries::cards::CardQuery::get_image).
    pub fn get_card_image(&self, name: &str) -> Result<Vec<u8>> {
        self.runtime.block_on(self.inner.cards().get_image(name))
    }

    /// See [`PriceQuery::get_all_by_name`](crate::queries::prices::PriceQuery::get_all_by_name).
    pub fn get_all_card_prices_by_name(&self, name: &str) -> Result<Vec<CardPrices>> {
        self.runtime.block_on(self.inner.get_all_card_prices_by_name(name))
    }

    /// See [`PriceQuery::get_by_name`](crate::queries::prices::PriceQuery::get_by_name).
    pub fn get_card_prices_by_name(&self, name: &str) -> Result<CardPrices> {
        self.runtime.block_on(self.inner.get_card_prices_by_name(name))
    }

    /// The async client this wrapper drives.
    pub fn inner(&self) -> &YugiohPrices {
        &self.inner
    }
}
