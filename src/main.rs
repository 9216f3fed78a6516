use clap::Parser;

use sfmoviemap::config::{self, Cli};

mod logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.log_level.as_deref());
    config::load_env_files();

    if let Err(e) = sfmoviemap::run(cli).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
