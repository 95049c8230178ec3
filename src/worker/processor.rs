use crate::{
    common::{command::CartCommand, error::CartError},
    domain::cart::CartLedger,
};

/// Replays cart commands and keeps count of what went through.
#[derive(Debug, Default)]
pub struct Processor {
    applied: usize,
    rejected: usize,
}

impl Processor {
    pub fn new() -> Self {
        Self {
            applied: 0,
            rejected: 0,
        }
    }

    pub fn process(&mut self, cart: &mut CartLedger, command: CartCommand) -> Result<(), CartError> {
        let result = match command {
            CartCommand::Add { product, quantity } => cart.add_item(product, quantity),
            CartCommand::Remove { product, quantity } => {
                cart.remove_item(product, quantity);
                Ok(())
            }
        };

        match result {
            Ok(()) => self.applied += 1,
            Err(_) => self.rejected += 1,
        }
        result
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }
}
