use std::io::Write;

use crate::domain::{cart::CartLedger, catalog::Catalog, product::ProductId};

#[derive(serde::Serialize)]
/// Internal CSV row for reserved lines.
///
/// Headers written (in this order): `product,name,quantity,unit_price,line_total`.
/// Money columns are pre-tax and formatted to 4 decimal places.
struct ItemRow<'a> {
    product: ProductId,
    name: &'a str,
    quantity: u32,
    unit_price: String,
    line_total: String,
}

#[derive(serde::Serialize)]
struct StockRow<'a> {
    product: ProductId,
    name: &'a str,
    price: String,
    stock: u32,
}

/// Writes the cart's reservations as CSV, sorted by product id.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use cart_ledger::domain::{cart::CartLedger, catalog::Catalog};
/// use cart_ledger::io::writer::write_items;
///
/// let mut cart = CartLedger::new(Catalog::demo());
/// cart.add_item(2, 3).unwrap();
///
/// let mut out = Vec::new();
/// write_items(&mut out, &cart).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(
///     s,
///     "product,name,quantity,unit_price,line_total\n2,Mouse,3,29.9900,89.9700\n"
/// );
/// ```
pub fn write_items<W: Write>(writer: W, cart: &CartLedger) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for (product, quantity) in cart.lines() {
        wtr.serialize(ItemRow {
            product: product.id,
            name: &product.name,
            quantity,
            unit_price: product.price.to_string_4dp(),
            line_total: product.price.times(quantity).to_string_4dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes every catalog product with its live stock as CSV
/// (`product,name,price,stock`), sorted by product id.
pub fn write_stock<W: Write>(writer: W, catalog: &Catalog) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for product in catalog.sorted() {
        wtr.serialize(StockRow {
            product: product.id,
            name: &product.name,
            price: product.price.to_string_4dp(),
            stock: product.stock,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the plain-text receipt printed by the demo: cart contents, total
/// and remaining stock.
pub fn write_summary<W: Write>(mut writer: W, cart: &CartLedger) -> std::io::Result<()> {
    writeln!(writer, "Cart contents:")?;
    for (product, quantity) in cart.lines() {
        writeln!(
            writer,
            "- {}: {} x {}",
            product.name,
            quantity,
            product.price.to_string_2dp()
        )?;
    }

    writeln!(writer, "Total: {}", cart.total().to_string_2dp())?;

    writeln!(writer, "Remaining stock:")?;
    for product in cart.products().sorted() {
        writeln!(writer, "- {}: {} in stock", product.name, product.stock)?;
    }

    writer.flush()
}
