//! prodsim 命令列入口

use anyhow::Result;
use prodsim_cli::{app, config, logging};

fn main() -> Result<()> {
    let config = config::AppConfig::parse();
    logging::init(config.verbose);

    app::run(&config)
}
