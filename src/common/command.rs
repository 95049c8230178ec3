use crate::domain::product::ProductId;

/// A cart operation read from a command script and replayed by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    Add { product: ProductId, quantity: u32 },
    /// `quantity: None` clears the whole reservation.
    Remove {
        product: ProductId,
        quantity: Option<u32>,
    },
}
