use std::collections::HashMap;

use crate::{
    common::{error::CartError, money::Money, tax::TaxRate},
    domain::{
        catalog::Catalog,
        product::{Product, ProductId},
        stock::StockPolicy,
    },
    worker::handlers::{add_item, remove_item},
};

/// A single shopping session: the catalog it sells from and what has been
/// reserved so far.
///
/// Reserving units takes them out of the product's stock, and removing them
/// puts them back, so `reserved + stock` per product stays constant for the
/// lifetime of the cart. A reservation is never zero or negative; a product
/// whose quantity drops to zero is no longer listed in [`CartLedger::items`].
///
/// # Examples
/// ```
/// use cart_ledger::domain::{cart::CartLedger, catalog::Catalog};
///
/// let mut cart = CartLedger::new(Catalog::demo());
/// cart.add_item(1, 2).unwrap();
/// cart.add_item(2, 1).unwrap();
///
/// assert_eq!(cart.total().to_string_2dp(), "2029.97");
/// assert_eq!(cart.products().get(1).unwrap().stock, 3);
/// ```
#[derive(Debug, Default)]
pub struct CartLedger {
    pub(crate) catalog: Catalog,
    pub(crate) items: HashMap<ProductId, u32>,
    pub(crate) tax_rate: TaxRate,
    pub(crate) stock_policy: StockPolicy,
}

impl CartLedger {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            items: HashMap::new(),
            tax_rate: TaxRate::none(),
            stock_policy: StockPolicy::default(),
        }
    }

    pub fn with_tax_rate(mut self, tax_rate: TaxRate) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn with_stock_policy(mut self, stock_policy: StockPolicy) -> Self {
        self.stock_policy = stock_policy;
        self
    }

    pub fn tax_rate(&self) -> &TaxRate {
        &self.tax_rate
    }

    pub fn stock_policy(&self) -> StockPolicy {
        self.stock_policy
    }

    /// Reserves `quantity` units of `product_id`, taking them out of stock.
    pub fn add_item(&mut self, product_id: ProductId, quantity: u32) -> Result<(), CartError> {
        add_item::handle(self, product_id, quantity)
    }

    /// Drops `quantity` units (or the whole reservation when `None`) and
    /// returns how many units went back to stock.
    pub fn remove_item(&mut self, product_id: ProductId, quantity: Option<u32>) -> u32 {
        remove_item::handle(self, product_id, quantity)
    }

    /// Sum of `price * quantity` over all reservations, before tax.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .filter_map(|(id, qty)| self.catalog.get(*id).map(|p| p.price.times(*qty)))
            .sum()
    }

    /// Subtotal with the configured tax factor applied.
    pub fn total(&self) -> Money {
        self.subtotal().apply_rate(&self.tax_rate)
    }

    pub fn items(&self) -> &HashMap<ProductId, u32> {
        &self.items
    }

    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.items.get(&product_id).copied().unwrap_or(0)
    }

    pub fn products(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reserved lines joined with their product, ordered by product id.
    pub fn lines(&self) -> Vec<(&Product, u32)> {
        let mut lines: Vec<(&Product, u32)> = self
            .items
            .iter()
            .filter_map(|(id, qty)| self.catalog.get(*id).map(|p| (p, *qty)))
            .collect();
        lines.sort_unstable_by_key(|(p, _)| p.id);
        lines
    }
}
