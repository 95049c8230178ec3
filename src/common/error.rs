use crate::domain::product::ProductId;

/// Validation failures raised by cart operations. All of them leave the cart
/// untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
    #[error(
        "insufficient stock for product {product}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        product: ProductId,
        requested: u32,
        available: u32,
    },
    #[error("invalid quantity {quantity} for product {product}")]
    InvalidQuantity { product: ProductId, quantity: u32 },
    #[error("duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("too many arguments. usage: cargo run -- [commands.csv] [catalog.csv]")]
    Usage,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("cart error: {0}")]
    Cart(#[from] CartError),
}
