//! Price lookups against `get_card_prices/{name}`.

use crate::config;
use crate::envelope;
use crate::error::{Result, YugiohPricesError};
use crate::mapper;
use crate::models::{CardPrices, PriceListing};
use crate::queries::cards::CardQuery;
use crate::YugiohPrices;

/// Query interface for per-print price listings.
///
/// Every returned [`CardPrices`] carries the full [`Card`](crate::models::Card),
/// looked up once per call and shared by all listings.
pub struct PriceQuery<'a> {
    client: &'a YugiohPrices,
}

impl<'a> PriceQuery<'a> {
    /// Create a new `PriceQuery` bound to the given client.
    pub fn new(client: &'a YugiohPrices) -> Self {
        Self { client }
    }

    /// Get every price listing for a card, in the order the service returns them.
    ///
    /// Zero listings is an empty `Vec`. The card is looked up exactly once
    /// either way, so an unknown card still fails with
    /// [`YugiohPricesError::NotFound`].
    pub async fn get_all_by_name(&self, name: &str) -> Result<Vec<CardPrices>> {
        let listings = self.listings(name).await?;

        let card = CardQuery::new(self.client).get_by_name(name).await?;
        Ok(listings
            .into_iter()
            .map(|listing| listing.with_card(card.clone()))
            .collect())
    }

    /// Get the first price listing for a card.
    ///
    /// Fails with [`YugiohPricesError::EmptyResult`] when there are no listings.
    pub async fn get_by_name(&self, name: &str) -> Result<CardPrices> {
        let first = self
            .listings(name)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| YugiohPricesError::EmptyResult(name.to_string()))?;

        let card = CardQuery::new(self.client).get_by_name(name).await?;
        Ok(first.with_card(card))
    }

    /// Fetch and map the listings without attaching the card.
    pub async fn listings(&self, name: &str) -> Result<Vec<PriceListing>> {
        let url = self.client.url(config::CARD_PRICES, name);
        let body = self.client.transport().fetch_text(&url).await?;
        let listings = mapper::map_listings(envelope::parse(&body)?)?;
        log::debug!("{} price listings for {:?}", listings.len(), name);
        Ok(listings)
    }
}
