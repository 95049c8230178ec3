pub mod cart;
pub mod catalog;
pub mod product;
pub mod stock;
