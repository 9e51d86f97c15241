pub mod chronometer;
pub mod configuration;
pub mod error;
pub mod logger;

use self::{
    chronometer::Chronometer,
    configuration::{Configuration, Mode},
    error::Error,
    logger::Logger,
};
use std::{
    io::{self, Read, Write},
    process,
};
use zbase32::{Decoder, Encoder};

fn run(configuration: &Configuration, input: &[u8], logger: &Logger) -> Result<Vec<u8>, Error> {
    let policy = configuration.policy();
    match configuration.mode() {
        Mode::Encode => {
            let mut output = Encoder::with_policy(policy).encode(input);
            logger.log(format!("Encoded {} bytes into {} symbols ({})", input.len(), output.len(), policy));
            output.push('\n');
            Ok(output.into_bytes())
        }
        Mode::Decode => {
            let input = input.trim_ascii();
            let output = Decoder::with_policy(policy).decode(input)?;
            logger.log(format!("Decoded {} symbols into {} bytes ({})", input.len(), output.len(), policy));
            Ok(output)
        }
    }
}

fn execute(configuration: &Configuration, logger: &Logger) -> Result<(), Error> {
    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;
    logger.log(format!("Read {} bytes", input.len()));
    let output = run(configuration, &input, logger)?;
    io::stdout().write_all(&output)?;
    Ok(())
}

fn main() {
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(error) => {
            eprintln!("{}", error.message());
            process::exit(2);
        }
    };
    let logger = Logger::new(configuration.verbose());
    if let Err(error) = execute(&configuration, &logger) {
        eprintln!("{}", error.message());
        process::exit(1);
    }
}
