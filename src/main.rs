use cart_ledger::common::{config::Config, logging};

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    logging::init_tracing(&config.log_level);

    if let Err(e) = cart_ledger::app::run(std::env::args(), &config) {
        tracing::error!(error = %e, "cart_ledger failed");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
