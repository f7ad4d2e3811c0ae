mod chronometer;
mod configuration;
mod logger;

use self::{
    chronometer::Chronometer,
    configuration::{Action, Configuration, Output},
    logger::Logger,
};
use alphabet_codec::{Alphabet, Codec, UnitDomain};
use std::{
    error,
    io::{self, Read, Write},
    process,
};

fn run(configuration: &Configuration, logger: &Logger) -> Result<(), Box<dyn error::Error>> {
    let alphabet = Alphabet::new(configuration.alphabet().iter().cloned())?;
    let codec = Codec::with_domain(alphabet, configuration.domain());
    logger.log(format!(
        "Built {} codec with base {} and width {}",
        codec.domain(),
        codec.base(),
        codec.width()
    ));

    let mut input = Vec::new();
    io::stdin().lock().read_to_end(&mut input)?;
    logger.log(format!("Read {} bytes", input.len()));

    let mut stdout = io::stdout().lock();
    match configuration.action() {
        Action::Encode => {
            let encoded = match codec.domain() {
                UnitDomain::Byte => codec.encode_to_string(&input),
                UnitDomain::Char => codec.encode_str_to_string(&String::from_utf8(input)?),
            };
            logger.log(format!("Encoded into {} bytes of text", encoded.len()));
            writeln!(stdout, "{}", encoded)?;
        }
        Action::Decode => {
            let input = String::from_utf8(input)?;
            let input = input.trim_end_matches(&['\r', '\n'][..]);
            let decoded = match configuration.output() {
                Output::Bytes => codec.decode_str_to_bytes(input)?,
                Output::Text => codec.decode_str_to_string(input)?.into_bytes(),
            };
            logger.log(format!("Decoded {} bytes", decoded.len()));
            stdout.write_all(&decoded)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn main() {
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    let logger = Logger::new(configuration.verbose());
    if let Err(error) = run(&configuration, &logger) {
        eprintln!("{}", error);
        process::exit(1);
    }
}
