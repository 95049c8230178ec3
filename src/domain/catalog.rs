use std::collections::HashMap;

use crate::{
    common::{error::CartError, money::Money},
    domain::product::{Product, ProductId},
};

/// The fixed set of purchasable products. Entries are never added or removed
/// after construction; only their stock moves.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<ProductId, Product>,
}

impl Catalog {
    pub fn from_products<I>(products: I) -> Result<Self, CartError>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut map = HashMap::new();
        for product in products {
            let id = product.id;
            if map.insert(id, product).is_some() {
                return Err(CartError::DuplicateProduct(id));
            }
        }
        Ok(Self { products: map })
    }

    /// Laptop, Mouse and Keyboard, as stocked by the demo shop.
    pub fn demo() -> Self {
        let products = [
            Product::new(1, "Laptop", Money::new(9_999_900), 5),
            Product::new(2, "Mouse", Money::new(299_900), 20),
            Product::new(3, "Keyboard", Money::new(799_900), 15),
        ];
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(&id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<ProductId, Product> {
        &self.products
    }

    /// Products ordered by id, for deterministic output.
    pub fn sorted(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_unstable_by_key(|p| p.id);
        products
    }
}
