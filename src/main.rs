use clap::Parser;

use log::{error, info};
use std::path::Path;
use std::process;

use labelimg2yolo::{process_dataset, Args, ClassMap};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let classes = match ClassMap::parse(&args.classes) {
        Ok(classes) => classes,
        Err(e) => {
            error!("Invalid class list \"{}\": {}", args.classes, e);
            process::exit(2);
        }
    };

    if !Path::new(&args.source).is_dir() {
        error!("The specified source directory does not exist: {}", args.source);
        process::exit(2);
    }

    info!("Starting the conversion process...");

    match process_dataset(&args, &classes) {
        Ok(stats) => stats.print_summary(),
        Err(e) => {
            error!("Failed to process dataset: {}", e);
            process::exit(1);
        }
    }
}
