use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ffp::io::cli::Cli;
use ffp::io::output::Output;
use ffp::{EPOCH, io};
use log::{info, warn};
use rackpack::pack::{self, Packer};
use rackpack::util::PackConfig;
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PackConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed PackConfig: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).unwrap_or_else(|_| {
            panic!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        });
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = rackpack::io::import(&ext_instance)?;

    info!(
        "[MAIN] packing {} items (total size {}) into bins {:?}",
        instance.total_item_qty().separate_with_commas(),
        instance.total_item_size(),
        instance.bin_capacities
    );

    let packer = Packer::new(instance, config);
    let solution = packer.pack()?;

    pack::show("Bin contents", &solution);

    let output = Output {
        instance: ext_instance,
        solution: rackpack::io::export(&solution, *EPOCH),
        config,
    };

    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, solution_path.as_path())?;

    Ok(())
}
