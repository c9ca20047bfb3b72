/**
 * RecoSplit
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

extern crate getopts;
extern crate recosplit;
#[macro_use]
extern crate tracing;
extern crate tracing_subscriber;

use std::env;
use std::error::Error;
use std::path::Path;
use std::process;

use getopts::{Matches, Options};
use tracing_subscriber::EnvFilter;

use recosplit::config::{DEFAULT_DATASET_PERCENTAGE, DEFAULT_SEED};
use recosplit::io;
use recosplit::PrepareConfig;

fn main() {

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("d", "dataset", "Directory holding the ratings dataset (required). The \
        directory must contain a ratings.csv file with userId, movieId and rating columns.",
        "PATH");
    opts.optopt("p", "dataset-percentage", "Percentage of users to sample from the full \
        dataset (optional, defaults to 20).", "NUMBER");
    opts.optopt("t", "test-percentage", "Percentage of user-item interactions that will be \
        used in the test set (required).", "NUMBER");
    opts.optopt("s", "seed", "Random seed for masking the test interactions (optional, \
        defaults to 42).", "NUMBER");
    opts.optopt("o", "output-path", "Directory to write train.mtx, test.mtx and mask.csv to \
        (required, will be created if missing).", "PATH");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    let (dataset_path, output_path) = match (matches.opt_str("d"), matches.opt_str("o")) {
        (Some(dataset_path), Some(output_path)) => (dataset_path, output_path),
        _ => return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify a dataset via --dataset and an output directory via \
                --output-path."),
        ),
    };

    let config = match parse_config(&matches) {
        Ok(config) => config,
        Err(hint) => return print_usage_and_exit(&program, opts, Some(&hint)),
    };

    if let Err(failure) = prepare_data(&dataset_path, &output_path, &config) {
        error!("{}", failure);
        process::exit(1);
    }
}

fn parse_config(matches: &Matches) -> Result<PrepareConfig, String> {

    let test_percentage: u32 = match matches.opt_get("t") {
        Ok(Some(test_percentage)) => test_percentage,
        Ok(None) => return Err(String::from("Please specify --test-percentage.")),
        Err(failure) => return Err(format!("Problem with option 't': {}", failure)),
    };

    let dataset_percentage: u32 = matches.opt_get_default("p", DEFAULT_DATASET_PERCENTAGE)
        .map_err(|failure| format!("Problem with option 'p': {}", failure))?;

    let seed: u64 = matches.opt_get_default("s", DEFAULT_SEED)
        .map_err(|failure| format!("Problem with option 's': {}", failure))?;

    let config = PrepareConfig::new(test_percentage)
        .with_dataset_percentage(dataset_percentage)
        .with_seed(seed);

    config.validate().map_err(|failure| failure.to_string())?;

    Ok(config)
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
    process::exit(if hint.is_some() { 2 } else { 0 });
}

fn prepare_data(
    dataset_path: &str,
    output_path: &str,
    config: &PrepareConfig,
) -> Result<(), Box<dyn Error>> {

    let ratings_path = Path::new(dataset_path).join(io::RATINGS_FILE);

    info!("Reading ratings from {}", ratings_path.display());
    let interactions = io::read_interactions(&ratings_path)?;

    let prepared = recosplit::prepare(interactions, config)?;

    io::write_split(output_path, &prepared.split)?;

    info!("Wrote train and test data to {}", output_path);

    Ok(())
}
