pub mod add_item;
pub mod remove_item;
