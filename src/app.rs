use std::{
    fs::File,
    io::{BufWriter, Write, stdout},
};

use crate::{
    common::{config::Config, error::AppError},
    domain::{cart::CartLedger, catalog::Catalog},
    io::{reader, writer},
    worker::processor::Processor,
};

/// Entry point shared by the binary and the tests.
///
/// With no arguments, runs the demo session (two laptops and a mouse) and
/// prints a receipt. With `<commands.csv> [catalog.csv]`, replays the command
/// script and writes the reserved items followed by the stock table as CSV.
pub fn run<I, S>(args: I, config: &Config) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());

    match args.as_slice() {
        [_] | [] => run_demo(out, config),
        [_, commands] => replay(out, config, commands, None),
        [_, commands, catalog] => replay(out, config, commands, Some(catalog)),
        _ => Err(AppError::Usage),
    }
}

fn new_cart(catalog: Catalog, config: &Config) -> CartLedger {
    CartLedger::new(catalog)
        .with_tax_rate(config.tax_rate.clone())
        .with_stock_policy(config.stock_policy)
}

pub fn run_demo<W: Write>(out: W, config: &Config) -> Result<(), AppError> {
    tracing::info!(tax_rate = %config.tax_rate, policy = %config.stock_policy, "running demo cart");

    let mut cart = new_cart(Catalog::demo(), config);
    cart.add_item(1, 2)?;
    cart.add_item(2, 1)?;

    writer::write_summary(out, &cart)?;
    Ok(())
}

pub fn load_catalog(path: &str) -> Result<Catalog, AppError> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    let products = reader::read_catalog(&mut rdr)
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::Parse)?;
    Ok(Catalog::from_products(products)?)
}

fn replay<W: Write>(
    out: W,
    config: &Config,
    commands_path: &str,
    catalog_path: Option<&String>,
) -> Result<(), AppError> {
    let catalog = match catalog_path {
        Some(path) => load_catalog(path)?,
        None => Catalog::demo(),
    };
    let file = File::open(commands_path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let cart = replay_commands(&mut rdr, new_cart(catalog, config))?;
    write_report(out, &cart)
}

/// Applies every command from `rdr` to `cart`. Rejected commands are logged
/// and skipped; malformed rows abort the replay.
pub fn replay_commands<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    mut cart: CartLedger,
) -> Result<CartLedger, AppError> {
    let mut processor = Processor::new();

    for command in reader::read_commands(rdr) {
        let command = command.map_err(AppError::Parse)?;
        if let Err(err) = processor.process(&mut cart, command.clone()) {
            tracing::warn!(?command, %err, "command rejected");
        }
    }

    tracing::info!(
        applied = processor.applied(),
        rejected = processor.rejected(),
        total = %cart.total(),
        "replay finished"
    );
    Ok(cart)
}

/// Items table, a blank line, then the stock table.
pub fn write_report<W: Write>(mut out: W, cart: &CartLedger) -> Result<(), AppError> {
    writer::write_items(&mut out, cart)?;
    writeln!(out)?;
    writer::write_stock(&mut out, cart.products())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::{common::tax::TaxRate, domain::stock::StockPolicy};

    #[test]
    fn demo_prints_receipt_without_tax() {
        let mut out = Vec::new();
        run_demo(&mut out, &Config::default()).unwrap();
        let s = String::from_utf8(out).unwrap();

        assert!(s.contains("- Laptop: 2 x 999.99\n"));
        assert!(s.contains("Total: 2029.97\n"));
        assert!(s.contains("- Laptop: 3 in stock\n"));
    }

    #[test]
    fn demo_honours_configured_tax() {
        let config = Config {
            tax_rate: TaxRate::from_str("1.2").unwrap(),
            ..Config::default()
        };
        let mut out = Vec::new();
        run_demo(&mut out, &config).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("Total: 2435.96\n"));
    }

    #[test]
    fn replay_skips_rejected_commands() {
        let data = "op,product,quantity\nadd,1,2\nadd,9,1\nadd,1,10\nremove,1,1\n";
        let mut rdr = csv::ReaderBuilder::new().from_reader(data.as_bytes());

        let cart = replay_commands(&mut rdr, CartLedger::new(Catalog::demo())).unwrap();

        assert_eq!(cart.quantity_of(1), 1);
        assert_eq!(cart.products().get(1).unwrap().stock, 4);
    }

    #[test]
    fn replay_aborts_on_malformed_row() {
        let data = "op,product,quantity\nadd,1,2\nrefund,1,1\n";
        let mut rdr = csv::ReaderBuilder::new().from_reader(data.as_bytes());

        let err = replay_commands(&mut rdr, CartLedger::new(Catalog::demo())).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn replay_uses_strict_policy_when_configured() {
        let data = "op,product,quantity\nadd,1,5\n";
        let mut rdr = csv::ReaderBuilder::new().from_reader(data.as_bytes());
        let config = Config {
            stock_policy: StockPolicy::Strict,
            ..Config::default()
        };

        let cart = replay_commands(&mut rdr, new_cart(Catalog::demo(), &config)).unwrap();

        assert!(cart.is_empty());
    }

    #[test]
    fn too_many_arguments_is_a_usage_error() {
        let err = run(["bin", "a.csv", "b.csv", "c.csv"], &Config::default()).unwrap_err();
        assert!(matches!(err, AppError::Usage));
    }
}
