use std::process;

use bitfmt::args::Args;
use bitfmt::Config;
use clap::Parser;

fn main() {
    let args = Args::parse();

    // --verbose forces debug output, otherwise RUST_LOG decides
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Could not read input: {err}");
        process::exit(1);
    });

    if let Err(e) = bitfmt::run(config) {
        eprintln!("Fatal Error: {e}");
        process::exit(1);
    }
}
