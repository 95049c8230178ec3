use crate::common::money::Money;

pub type ProductId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price, tax excluded.
    pub price: Money,
    /// Units still available to reserve.
    pub stock: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}
