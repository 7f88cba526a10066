use clap::Parser;
use fries_stand::utils::logger;
use fries_stand::{CliConfig, FriesError, Kiosk};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting fries-stand");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut kiosk = Kiosk::new(stdin.lock(), stdout.lock());

    let receipt = match kiosk.run() {
        Ok(receipt) => receipt,
        Err(e @ FriesError::InputClosed { .. }) => {
            tracing::error!("Order aborted: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("Order completed, total {}", receipt.total);

    if config.json {
        let mut out = kiosk.into_output();
        writeln!(out, "{}", receipt.to_json()?)?;
    }

    Ok(())
}
