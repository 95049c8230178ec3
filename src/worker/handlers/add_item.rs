use crate::{
    common::error::CartError,
    domain::{cart::CartLedger, product::ProductId},
};

pub fn handle(cart: &mut CartLedger, product_id: ProductId, quantity: u32) -> Result<(), CartError> {
    let CartLedger {
        catalog,
        items,
        stock_policy,
        ..
    } = cart;

    let product = catalog
        .get_mut(product_id)
        .ok_or(CartError::UnknownProduct(product_id))?;

    if quantity == 0 {
        return Err(CartError::InvalidQuantity {
            product: product_id,
            quantity,
        });
    }

    if !stock_policy.permits(quantity, product.stock) {
        return Err(CartError::InsufficientStock {
            product: product_id,
            requested: quantity,
            available: product.stock,
        });
    }

    // Validate everything before mutating so a failure leaves the cart untouched.
    let reserved = items.get(&product_id).copied().unwrap_or(0);
    let reserved = reserved
        .checked_add(quantity)
        .ok_or(CartError::InvalidQuantity {
            product: product_id,
            quantity,
        })?;

    product.stock -= quantity;
    items.insert(product_id, reserved);

    tracing::debug!(
        product = product_id,
        quantity,
        reserved,
        stock = product.stock,
        "reserved units"
    );
    Ok(())
}
