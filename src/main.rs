use anyhow::Context;
use clap::Parser;

use tickspan::args::Args;
use tickspan::config::{Config, ConfigStore};
use tickspan::logging;
use tickspan::ui::runtime;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let path = args.config_path();
    let mut config = Config::load_from(&path).context("failed to load configuration")?;
    args.apply(&mut config);
    config.validate().context("invalid configuration")?;

    let store = ConfigStore::new(config, path);
    runtime::run(store)
}
