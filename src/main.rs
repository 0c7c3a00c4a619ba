use std::process;

use toroidal_life::app::{App, Options};
use toroidal_life::config::{DEFAULT_LOG_FILTER, LOG_ENV};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(LOG_ENV, DEFAULT_LOG_FILTER),
    )
    .init();

    if let Err(e) = run() {
        log::error!("{}", e);
        process::exit(1);
    }
}

fn run() -> toroidal_life::Result<()> {
    let options = Options::from_args(std::env::args().skip(1))?;
    let mut app = App::from_options(&options)?;

    let summary = app.run(options.generations);
    print!("{}", app.engine().grid());
    println!(
        "generation {}: {} alive, {} communities",
        summary.generations, summary.alive, summary.communities
    );
    Ok(())
}
