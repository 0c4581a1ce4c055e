use cdsample::{cdsample, logger::init_logging, Args};
use clap::Parser;
use log::{error, info};

use std::process;

fn main() {
    let args = Args::parse();

    init_logging(args.level, args.log.as_deref()).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });
    info!("Starting cdsample with args: {}", args);

    match cdsample(args) {
        Ok(summary) => info!(
            "Done: {} records extracted, {} sampled",
            summary.extracted, summary.sampled
        ),
        Err(e) => {
            error!("{}", e);
            log::logger().flush();
            process::exit(1);
        }
    }
}
