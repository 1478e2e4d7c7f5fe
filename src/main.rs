use chrono::Local;
use clap::Parser;
use hunt::{
    cli::Cli, info_time, logging::ConsoleLog, output::save_to_csv, request::HttpFetcher,
    Harvester, Result,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let cli = Cli::parse();
    let log = ConsoleLog::new(cli.log_level());
    let config = cli.into_config()?;

    let fetcher = HttpFetcher::new(&config.user_agent, config.timeout)?;
    let harvester = Harvester::new(&config, fetcher, &log)?;
    let products = harvester.harvest().await;

    save_to_csv(&config.output, &products, &log)?;
    info_time!(log, start_time, "Full program time:");

    Ok(())
}
