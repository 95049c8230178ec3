use crate::domain::{cart::CartLedger, product::ProductId};

/// Returns the number of units released back to stock.
pub fn handle(cart: &mut CartLedger, product_id: ProductId, quantity: Option<u32>) -> u32 {
    let CartLedger { catalog, items, .. } = cart;

    let Some(reserved) = items.get(&product_id).copied() else {
        return 0;
    };

    // Clamp so the reservation never goes below zero.
    let released = quantity.map_or(reserved, |q| q.min(reserved));
    let remaining = reserved - released;

    if remaining == 0 {
        items.remove(&product_id);
    } else {
        items.insert(product_id, remaining);
    }

    if let Some(product) = catalog.get_mut(product_id) {
        product.stock = product.stock.saturating_add(released);
    }

    tracing::debug!(
        product = product_id,
        released,
        remaining,
        "released units"
    );
    released
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::domain::{cart::CartLedger, catalog::Catalog};

    fn cart_with(product: u32, quantity: u32) -> CartLedger {
        let mut cart = CartLedger::new(Catalog::demo());
        cart.add_item(product, quantity).unwrap();
        cart
    }

    fn stock_of(cart: &CartLedger, id: u32) -> u32 {
        cart.products().get(id).expect("product exists").stock
    }

    #[test]
    fn remove_without_reservation_is_noop() {
        let mut cart = CartLedger::new(Catalog::demo());

        assert_eq!(handle(&mut cart, 1, None), 0);
        assert_eq!(handle(&mut cart, 1, Some(3)), 0);
        assert_eq!(handle(&mut cart, 99, None), 0);

        assert!(cart.is_empty());
        assert_eq!(stock_of(&cart, 1), 5);
    }

    #[test]
    fn remove_without_quantity_clears_and_restocks() {
        let mut cart = cart_with(2, 7);

        let released = handle(&mut cart, 2, None);

        assert_eq!(released, 7);
        assert!(!cart.items().contains_key(&2));
        assert_eq!(stock_of(&cart, 2), 20);
    }

    #[test]
    fn remove_partial_quantity_keeps_remainder() {
        let mut cart = cart_with(3, 5);

        let released = handle(&mut cart, 3, Some(2));

        assert_eq!(released, 2);
        assert_eq!(cart.quantity_of(3), 3);
        assert_eq!(stock_of(&cart, 3), 12);
    }

    #[test]
    fn remove_more_than_reserved_clamps_to_zero() {
        let mut cart = cart_with(1, 2);

        let released = handle(&mut cart, 1, Some(10));

        assert_eq!(released, 2);
        assert_eq!(cart.quantity_of(1), 0);
        assert!(!cart.items().contains_key(&1));
        assert_eq!(stock_of(&cart, 1), 5);
    }

    #[test]
    fn remove_exact_quantity_drops_the_entry() {
        let mut cart = cart_with(1, 2);

        handle(&mut cart, 1, Some(2));

        assert!(cart.is_empty());
    }

    #[test]
    fn remove_zero_quantity_is_noop() {
        let mut cart = cart_with(1, 2);

        assert_eq!(handle(&mut cart, 1, Some(0)), 0);

        assert_eq!(cart.quantity_of(1), 2);
        assert_eq!(stock_of(&cart, 1), 3);
    }
}
