//! Shop catalogue and one-shot purchase transactions.

use std::collections::HashMap;

use tracing::debug;

use crate::character::Character;
use crate::items::Item;

use super::InventoryService;

#[derive(Debug, Clone)]
struct Listing {
    item: Item,
    price: u64,
}

/// A named shop selling single-unit listings.
///
/// Each listing is one unit of stock: a successful sale removes it from the
/// catalogue. This is not a quantity model.
#[derive(Debug, Default)]
pub struct ShopService {
    name: String,
    catalogue: HashMap<String, Listing>,
}

impl ShopService {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catalogue: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lists an item for sale; an existing listing with the same item id is
    /// replaced.
    pub fn add_item_for_sale(&mut self, item: Item, price: u64) {
        self.catalogue.insert(item.id.clone(), Listing { item, price });
    }

    /// All `(item, price)` pairs. Order is not significant.
    pub fn list_inventory(&self) -> Vec<(&Item, u64)> {
        self.catalogue
            .values()
            .map(|listing| (&listing.item, listing.price))
            .collect()
    }

    pub fn price_of(&self, item_id: &str) -> Option<u64> {
        self.catalogue.get(item_id).map(|listing| listing.price)
    }

    /// Sells a listed item to `buyer`: debits the wallet by the price, adds
    /// the item to `buyer_inventory`, and removes the listing.
    ///
    /// Returns false without mutation if the item is not listed or the
    /// wallet is short.
    pub fn sell_item_to(
        &mut self,
        item_id: &str,
        buyer: &mut Character,
        buyer_inventory: &mut InventoryService,
    ) -> bool {
        let Some(price) = self.price_of(item_id) else {
            return false;
        };
        if !buyer.remove_currency(price) {
            return false;
        }
        if let Some(listing) = self.catalogue.remove(item_id) {
            debug!(shop = %self.name, buyer = %buyer.id(), item = %listing.item.id, price, "sale");
            buyer_inventory.add(listing.item);
        }
        true
    }
}
