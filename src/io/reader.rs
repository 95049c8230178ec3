use crate::{
    common::{command::CartCommand, money::Money},
    domain::product::{Product, ProductId},
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row for command scripts. `quantity` stays empty for a
/// `remove` that clears the whole line.
struct CommandRow {
    op: String,
    product: ProductId,
    quantity: Option<String>,
}

#[derive(serde::Deserialize)]
struct CatalogRow {
    id: ProductId,
    name: String,
    price: String,
    stock: u32,
}

fn parse_quantity(raw: Option<String>) -> Result<Option<u32>, String> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(q) => q
            .parse::<u32>()
            .map(Some)
            .map_err(|e| format!("invalid quantity {q:?}: {e}")),
    }
}

/// Reads cart commands from a CSV reader.
///
/// Supported headers: `op,product,quantity`.
/// `op` is `add` or `remove` (case-insensitive). `add` requires a quantity;
/// `remove` with a blank quantity clears the reservation. Errors include the
/// product id for context.
///
/// # Examples
///
/// ```
/// use cart_ledger::io::reader::read_commands;
/// use cart_ledger::common::command::CartCommand;
/// use csv::ReaderBuilder;
///
/// let data = "op,product,quantity\n\
/// add,1,2\n\
/// remove,1,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert_eq!(commands[0], Ok(CartCommand::Add { product: 1, quantity: 2 }));
/// assert_eq!(commands[1], Ok(CartCommand::Remove { product: 1, quantity: None }));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<CartCommand, String>> + '_ {
    rdr.deserialize::<CommandRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let op = row.op.trim().to_ascii_lowercase();
        let quantity = parse_quantity(row.quantity)
            .map_err(|e| format!("{e} for product {}", row.product))?;

        match op.as_str() {
            "add" => {
                let quantity = quantity
                    .ok_or_else(|| format!("add missing quantity for product {}", row.product))?;
                Ok(CartCommand::Add {
                    product: row.product,
                    quantity,
                })
            }
            "remove" => Ok(CartCommand::Remove {
                product: row.product,
                quantity,
            }),
            other => Err(format!(
                "unknown cart operation: {other} for product {}",
                row.product
            )),
        }
    })
}

/// Reads catalog entries from a CSV reader with headers `id,name,price,stock`.
///
/// Prices are decimal strings and are parsed into [`Money`].
pub fn read_catalog<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Product, String>> + '_ {
    rdr.deserialize::<CatalogRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let price = Money::from_str(&row.price)
            .map_err(|e| format!("invalid price for product {}: {e}", row.id))?;
        Ok(Product::new(row.id, row.name.trim(), price, row.stock))
    })
}
