use clap::Parser;
use ipv4_subnet_calc::cli::{run, Args};
use ipv4_subnet_calc::config::Config;
use ipv4_subnet_calc::{logging, SubnetHandler};
use std::error::Error;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    let config = args.apply(Config::from_env()?);

    logging::init(&config.log_config)?;
    if !config.color {
        colored::control::set_override(false);
    }
    log::info!("#Start main() {config:?}");

    let handler = SubnetHandler::new();
    let stdin = std::io::stdin();
    let ok = run(
        args.command.as_ref(),
        handler,
        config.output,
        &mut stdin.lock(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )?;

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
