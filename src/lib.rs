//! `skipkv` wires the skiplist map to its configuration file and logger.
//!
//! ```
//! use skipkv::{open, Config};
//!
//! let mut config = Config::new();
//! config.parse("maxlevel 8\nseed 1\nloglevel warning").unwrap();
//!
//! let mut map = open(&config).unwrap();
//! map.insert(20, "twenty");
//! map.insert(10, "ten");
//! assert_eq!(map.floor(&15).map(|p| *p.value()), Some("ten"));
//! ```

pub extern crate config;
pub extern crate logger;
pub extern crate skiplist;
pub extern crate util;

use std::cmp;
use std::error;
use std::fmt;
use std::io;

pub use crate::config::{Config, ConfigError};
pub use crate::logger::{Level, Logger};
pub use crate::skiplist::{
    GeometricalLevelGenerator, KvPair, LevelGenerator, SkipList, SkipListError,
};

/// Probability that a node reaching one level also reaches the next.
const LEVEL_PROBABILITY: f64 = 0.5;

#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    SkipList(SkipListError),
    IOError(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Config(ref e) => e.fmt(f),
            Error::SkipList(ref e) => e.fmt(f),
            Error::IOError(ref e) => write!(f, "cannot open log file: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Config(ref e) => Some(e),
            Error::SkipList(ref e) => Some(e),
            Error::IOError(ref e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Error {
        Error::Config(e)
    }
}

impl From<SkipListError> for Error {
    fn from(e: SkipListError) -> Error {
        Error::SkipList(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::IOError(e)
    }
}

/// Builds the logger described by `config`: its `logfile`, or the standard error.
pub fn build_logger(config: &Config) -> Result<Logger, Error> {
    Ok(match config.logfile {
        Some(ref path) => Logger::file(config.loglevel, path)?,
        None => Logger::new_err(config.loglevel),
    })
}

/// Builds the level generator described by `config`.  Without a `seed` the generator is seeded
/// from the clock.
pub fn build_level_generator(config: &Config) -> GeometricalLevelGenerator {
    let total = cmp::min(config.max_level, skiplist::MAX_LEVEL_LIMIT) + 1;
    match config.seed {
        Some(seed) => GeometricalLevelGenerator::with_seed(total, LEVEL_PROBABILITY, seed),
        None => GeometricalLevelGenerator::new(total, LEVEL_PROBABILITY),
    }
}

/// Creates an empty skiplist configured and logging as `config` says.
pub fn open<K: Ord, V>(config: &Config) -> Result<SkipList<K, V>, Error> {
    open_with_logger(config, build_logger(config)?)
}

/// Same as `open`, sending log lines to `logger` instead of the configured destination.
pub fn open_with_logger<K: Ord, V>(config: &Config, logger: Logger) -> Result<SkipList<K, V>, Error> {
    let mut skiplist =
        SkipList::with_level_generator(config.max_level, build_level_generator(config))?;
    skiplist.set_logger(logger);
    Ok(skiplist)
}
