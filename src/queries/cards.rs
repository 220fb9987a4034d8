//! Card lookups against `card_data/{name}` and `card_image/{name}`.

use crate::config;
use crate::envelope;
use crate::error::{Result, YugiohPricesError};
use crate::mapper;
use crate::models::Card;
use crate::YugiohPrices;

/// Query interface for card metadata and artwork.
pub struct CardQuery<'a> {
    client: &'a YugiohPrices,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given client.
    pub fn new(client: &'a YugiohPrices) -> Self {
        Self { client }
    }

    /// Get a card by its exact, case-sensitive name, with its image attached.
    ///
    /// # Errors
    ///
    /// * [`YugiohPricesError::NotFound`] if the service knows no such card.
    ///   No image is fetched in that case.
    /// * [`YugiohPricesError::Service`] if the envelope status is not success.
    pub async fn get_by_name(&self, name: &str) -> Result<Card> {
        self.find_by_name(name)
            .await?
            .ok_or_else(|| YugiohPricesError::NotFound(name.to_string()))
    }

    /// Like [`get_by_name`](Self::get_by_name) but reports an unknown card as `Ok(None)`.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Card>> {
        let url = self.client.url(config::CARD_DATA, name);
        let body = self.client.transport().fetch_text(&url).await?;
        let data = envelope::parse(&body)?;

        let Some(mut card) = mapper::map_card(data)? else {
            log::debug!("no card named {:?}", name);
            return Ok(None);
        };
        card.image = self.get_image(name).await?;
        Ok(Some(card))
    }

    /// Fetch the raw artwork bytes for a card name.
    pub async fn get_image(&self, name: &str) -> Result<Vec<u8>> {
        let url = self.client.url(config::CARD_IMAGE, name);
        self.client.transport().fetch_bytes(&url).await
    }
}
