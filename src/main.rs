use clap::Parser;
use iprange2cidr::config::Config;
use iprange2cidr::logging::{color_enabled, init_logging};
use iprange2cidr::run;
use std::error::Error;
use std::io::IsTerminal;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    colored::control::set_override(color_enabled(
        config.no_color,
        config.log_config.as_deref(),
        std::io::stderr().is_terminal(),
    ));
    init_logging(config.log_config.as_deref(), config.log_level())?;
    //
    log::info!("#Start main()");

    let stdout = std::io::stdout();
    run(&config, &mut stdout.lock())?;

    Ok(())
}
