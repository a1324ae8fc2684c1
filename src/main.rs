// SPDX-License-Identifier: MIT

use std::env;
use std::process;

use chunksum::error::Error;
use chunksum::harness::{atomic_chunked, mutex_chunked, sequential, Measurement};
use chunksum::pool::WorkerPool;
use chunksum::sequence;

/// Sequence length used when the first positional argument is absent.
const DEFAULT_SEQUENCE_LENGTH: usize = 100_000_000;
/// Chunk size used when the second positional argument is absent.
const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Run parameters taken from the command line: two optional positionals,
/// sequence length then chunk size.
#[derive(Debug, PartialEq, Eq)]
struct Config {
    sequence_length: usize,
    chunk_size: usize,
}

impl Config {
    fn from_args<I>(mut args: I) -> Result<Self, Error>
    where
        I: Iterator<Item = String>,
    {
        let sequence_length =
            parse_positional(args.next(), "sequence length", DEFAULT_SEQUENCE_LENGTH)?;
        let chunk_size = parse_positional(args.next(), "chunk size", DEFAULT_CHUNK_SIZE)?;
        if chunk_size == 0 {
            return Err(Error::ZeroChunkSize);
        }
        Ok(Config {
            sequence_length,
            chunk_size,
        })
    }
}

fn parse_positional(
    arg: Option<String>,
    name: &'static str,
    default: usize,
) -> Result<usize, Error> {
    match arg {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| Error::InvalidArgument {
            name,
            value,
        }),
    }
}

fn report(label: &str, measurement: Measurement) {
    println!(
        "{}: Time: {} ms, Sum: {}",
        label,
        measurement.elapsed.as_millis(),
        measurement.sum
    );
}

fn run(config: &Config) -> Result<(), Error> {
    println!(
        "Sequence length: {}, chunk size: {}",
        config.sequence_length, config.chunk_size
    );

    // One shared sequence; every strategy reduces the same data.
    let data = sequence::generate(config.sequence_length, sequence::DEFAULT_VALUE_RANGE);
    let pool = WorkerPool::with_available_parallelism();

    report("Sequential", sequential(&data));
    report("Atomic chunks", atomic_chunked(&data, config.chunk_size, &pool)?);
    report("Mutex chunks", mutex_chunked(&data, config.chunk_size, &pool)?);
    println!("{}", "-".repeat(40));

    Ok(())
}

fn main() {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args<'a>(values: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
        values.iter().map(|v| v.to_string())
    }

    #[test]
    fn test_defaults_when_no_args() {
        let config = Config::from_args(args(&[])).unwrap();
        assert_eq!(
            config,
            Config {
                sequence_length: DEFAULT_SEQUENCE_LENGTH,
                chunk_size: DEFAULT_CHUNK_SIZE,
            }
        );
    }

    #[test]
    fn test_explicit_positionals() {
        let config = Config::from_args(args(&["5000", "250"])).unwrap();
        assert_eq!(
            config,
            Config {
                sequence_length: 5000,
                chunk_size: 250,
            }
        );
    }

    #[test]
    fn test_zero_length_is_valid() {
        let config = Config::from_args(args(&["0"])).unwrap();
        assert_eq!(config.sequence_length, 0);
    }

    #[test]
    fn test_non_numeric_length_rejected() {
        let err = Config::from_args(args(&["lots"])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                name: "sequence length",
                value: "lots".to_string(),
            }
        );
    }

    #[test]
    fn test_negative_chunk_size_rejected() {
        let err = Config::from_args(args(&["100", "-5"])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                name: "chunk size",
                value: "-5".to_string(),
            }
        );
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let err = Config::from_args(args(&["100", "0"])).unwrap_err();
        assert_eq!(err, Error::ZeroChunkSize);
    }
}
